//! The register-handshake driver.
//!
//! One multiplication is a fixed six-step conversation with the device:
//! wait until it asks for the first operand, write and latch it, repeat for
//! the second operand, then wait for the result flag and read the product.
//! The protocol has no branching; the only policy decision is how long to
//! keep polling a flag that has not appeared, which is what [`PollPolicy`]
//! controls.

use crate::config::PollPolicy;
use crate::error::DriverError;
use crate::float;
use crate::overlay::RegisterBus;
use crate::regs::{
    HandshakeStage, OperandSlot, REG_IN_FLAGS, REG_INPUT, REG_OUT_FLAGS, REG_RESULT, Status,
};
use tracing::{debug, info};

/// Drives one floating-point multiplier over a register bus.
///
/// The driver owns its bus, which makes the exclusivity requirement of the
/// handshake a compile-time property: the device has a single in-flight
/// operand slot, and a second multiplication cannot be issued while one is
/// in progress.
#[derive(Debug)]
pub struct Multiplier<B: RegisterBus> {
    bus: B,
    poll: PollPolicy,
}

impl<B: RegisterBus> Multiplier<B> {
    /// Creates a driver over `bus` with the given poll policy.
    pub fn new(bus: B, poll: PollPolicy) -> Self {
        Self { bus, poll }
    }

    /// Multiplies `a` by `b` on the device and returns the IEEE-754 product.
    ///
    /// Special values (NaN, infinities, signed zeros) pass through to the
    /// hardware uninterpreted; the returned bits are exactly what the device
    /// published in its result register.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::HandshakeTimeout`] if a bounded poll policy is
    /// configured and the device never raises the awaited flag. Until the
    /// first readiness bit is observed, nothing is written to the device.
    pub fn multiply(&mut self, a: f32, b: f32) -> Result<f32, DriverError> {
        info!("multiplying {a} and {b}");

        self.wait_for(HandshakeStage::OperandA)?;
        self.write_operand(OperandSlot::A, a);

        self.wait_for(HandshakeStage::OperandB)?;
        self.write_operand(OperandSlot::B, b);

        self.wait_for(HandshakeStage::Result)?;
        let product = float::decode_word(self.bus.read_u32(REG_RESULT));
        info!("result of {a} * {b}: {product}");
        debug!("as binary: {}", float::bit_string(product));
        Ok(product)
    }

    /// Consumes the driver, returning the underlying bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Writes one operand to `INPUT` and latches it through `IN_FLAGS`.
    fn write_operand(&mut self, slot: OperandSlot, value: f32) {
        info!("writing {value} as operand {slot}");
        debug!("as binary: {}", float::bit_string(value));
        self.bus.write_u32(REG_INPUT, float::encode_word(value));
        self.bus.write_u32(REG_IN_FLAGS, slot.flag_word());
    }

    /// Polls `OUT_FLAGS` until the bit for `stage` is set.
    ///
    /// With [`PollPolicy::Unbounded`] this spins until the device responds
    /// and never returns an error.
    fn wait_for(&mut self, stage: HandshakeStage) -> Result<(), DriverError> {
        let mut polls: u64 = 0;
        loop {
            let status = Status::from_word(self.bus.read_u32(REG_OUT_FLAGS));
            if stage.is_set(status) {
                return Ok(());
            }
            polls += 1;
            if let PollPolicy::Bounded { max_polls } = self.poll {
                if polls >= max_polls {
                    return Err(DriverError::HandshakeTimeout { stage, polls });
                }
            }
        }
    }
}
