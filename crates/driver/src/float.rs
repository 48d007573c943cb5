//! Host-side IEEE-754 encoding for the register bus.
//!
//! The multiplier's register bus carries single-precision floats in network
//! byte order. These helpers convert between host `f32` values, the 4-byte
//! big-endian wire form, and the 32-bit words moved over the bus. Encoding
//! is a direct reinterpretation of the bit pattern: no rounding, no range
//! checking, and NaN payloads, infinities, and signed zeros pass through
//! bit-exactly.

/// Encodes a float as its 4-byte big-endian wire form.
#[inline]
pub const fn encode(value: f32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decodes a 4-byte big-endian wire form back into a float.
#[inline]
pub const fn decode(bytes: [u8; 4]) -> f32 {
    f32::from_be_bytes(bytes)
}

/// Packs a big-endian wire form into the word written to a 32-bit register.
#[inline]
pub const fn word_from_bytes(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

/// Unpacks a register word into its big-endian wire form.
#[inline]
pub const fn bytes_from_word(word: u32) -> [u8; 4] {
    word.to_be_bytes()
}

/// Encodes a float directly into a register word.
#[inline]
pub const fn encode_word(value: f32) -> u32 {
    word_from_bytes(encode(value))
}

/// Decodes a register word directly into a float.
#[inline]
pub const fn decode_word(word: u32) -> f32 {
    decode(bytes_from_word(word))
}

/// Renders the 32-bit pattern of a float as a binary string.
///
/// Used by the driver's `debug`-level traces to show operands and products
/// exactly as they travel over the bus.
pub fn bit_string(value: f32) -> String {
    encode(value).iter().map(|b| format!("{b:08b}")).collect()
}
