//! Register bus trait for the multiplier's window.
//!
//! The handshake driver is written against this trait so it can run over
//! the real memory-mapped window or over a simulated register file in
//! tests.

/// A 32-bit register file addressed by byte offset.
///
/// The multiplier's bus is 32 bits wide; narrower or wider accesses do not
/// exist on this interface. Exclusive access is part of the contract: the
/// handshake has a single in-flight operand slot, so a bus handle must not
/// be shared between concurrent multiplications.
pub trait RegisterBus {
    /// Returns a short name for this bus (e.g. `"fpm0"`).
    fn name(&self) -> &str;
    /// Reads the 32-bit register at the given byte offset.
    fn read_u32(&mut self, offset: u64) -> u32;
    /// Writes the 32-bit register at the given byte offset.
    fn write_u32(&mut self, offset: u64, value: u32);
}
