//! Register map and handshake flag definitions.
//!
//! The multiplier overlay exposes four 32-bit registers within one AXI
//! window. Operands are staged through `INPUT` and latched by a write to
//! `IN_FLAGS`; the device reports readiness and completion through
//! `OUT_FLAGS` and publishes the product in `RESULT`.
//!
//! # Registers
//!
//! * `0x0`: `INPUT` (write only) — next operand, big-endian IEEE-754 single
//! * `0x4`: `IN_FLAGS` (write only) — which operand was just written
//! * `0x8`: `RESULT` (read only) — big-endian IEEE-754 single product
//! * `0xC`: `OUT_FLAGS` (read only) — readiness/completion flags

use std::fmt;

/// Byte offset of the operand input register (write only).
pub const REG_INPUT: u64 = 0x0;
/// Byte offset of the input flag register (write only).
pub const REG_IN_FLAGS: u64 = 0x4;
/// Byte offset of the product register (read only).
pub const REG_RESULT: u64 = 0x8;
/// Byte offset of the status flag register (read only).
pub const REG_OUT_FLAGS: u64 = 0xC;

/// Write-side flag telling the device which operand was just placed in
/// `INPUT`.
///
/// The status side carries a third bit for result validity; that bit does
/// not exist on this type. Keeping the two flag directions as separate
/// types prevents a status word from being written back to `IN_FLAGS` by
/// mistake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OperandSlot {
    /// The first operand (multiplicand).
    A = 0b001,
    /// The second operand (multiplier).
    B = 0b010,
}

impl OperandSlot {
    /// Returns the flag word written to `IN_FLAGS` to latch this slot.
    #[inline]
    pub const fn flag_word(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Read-side status word, as read from `OUT_FLAGS`.
///
/// Bits are independent and combinable; predicates test individual bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Status(u32);

impl Status {
    /// Device ready to accept operand A.
    const READY_A: u32 = 0b001;
    /// Device ready to accept operand B.
    const READY_B: u32 = 0b010;
    /// Product in `RESULT` is valid.
    const RESULT_VALID: u32 = 0b100;

    /// Wraps a raw `OUT_FLAGS` word.
    #[inline]
    pub const fn from_word(word: u32) -> Self {
        Self(word)
    }

    /// True if the device is ready to accept the first operand.
    #[inline]
    pub const fn ready_for_a(self) -> bool {
        self.0 & Self::READY_A != 0
    }

    /// True if the device is ready to accept the second operand.
    #[inline]
    pub const fn ready_for_b(self) -> bool {
        self.0 & Self::READY_B != 0
    }

    /// True if the product register holds a valid result.
    #[inline]
    pub const fn result_valid(self) -> bool {
        self.0 & Self::RESULT_VALID != 0
    }

    /// Returns the raw flag word.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// The three wait points of one multiplication handshake.
///
/// Each stage blocks on its own `OUT_FLAGS` bit; the stage name is carried
/// in timeout errors so a stuck device reports where the handshake stalled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandshakeStage {
    /// Waiting for the device to accept the first operand.
    OperandA,
    /// Waiting for the device to accept the second operand.
    OperandB,
    /// Waiting for the product to become valid.
    Result,
}

impl HandshakeStage {
    /// True if `status` carries the bit this stage is waiting on.
    #[inline]
    pub const fn is_set(self, status: Status) -> bool {
        match self {
            Self::OperandA => status.ready_for_a(),
            Self::OperandB => status.ready_for_b(),
            Self::Result => status.result_valid(),
        }
    }
}

impl fmt::Display for HandshakeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OperandA => write!(f, "operand A readiness"),
            Self::OperandB => write!(f, "operand B readiness"),
            Self::Result => write!(f, "result validity"),
        }
    }
}
