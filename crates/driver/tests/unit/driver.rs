//! Handshake Driver Tests.
//!
//! Runs the driver against the simulated register file from
//! `tests/common`, covering the end-to-end product path, the strict
//! `IN_FLAGS` sequencing invariant, special-value passthrough, and the
//! bounded-poll timeout behavior on an unresponsive device.

use crate::common::{SimulatedMultiplier, init_tracing};
use fpm_core::config::PollPolicy;
use fpm_core::driver::Multiplier;
use fpm_core::error::DriverError;
use fpm_core::regs::{HandshakeStage, REG_IN_FLAGS, REG_INPUT};
use proptest::prelude::*;

/// A bounded policy tight enough for tests but roomy for the three waits.
const TEST_POLICY: PollPolicy = PollPolicy::Bounded { max_polls: 1000 };

#[test]
fn multiply_returns_the_hardware_product() {
    init_tracing();
    let mut driver = Multiplier::new(SimulatedMultiplier::new(), TEST_POLICY);
    let product = driver.multiply(2.0, 3.5).unwrap();
    assert_eq!(product, 7.0);
}

#[test]
fn operands_reach_the_device_bit_exactly() {
    let mut driver = Multiplier::new(SimulatedMultiplier::new(), TEST_POLICY);
    let _ = driver.multiply(-2.0, 3.0).unwrap();

    let sim = driver.into_bus();
    assert_eq!(sim.received_a(), -2.0);
    assert_eq!(sim.received_b(), 3.0);
}

#[test]
fn in_flags_receives_exactly_one_then_two() {
    let mut driver = Multiplier::new(SimulatedMultiplier::new(), TEST_POLICY);
    let _ = driver.multiply(123.456, -0.001).unwrap();

    let sim = driver.into_bus();
    assert_eq!(sim.in_flag_writes(), vec![1, 2]);

    // Exactly four writes per multiplication, operand then latch, twice.
    let offsets: Vec<u64> = sim.writes.iter().map(|w| w.offset).collect();
    assert_eq!(offsets, vec![REG_INPUT, REG_IN_FLAGS, REG_INPUT, REG_IN_FLAGS]);
}

#[test]
fn special_values_pass_through_uninterpreted() {
    let mut driver = Multiplier::new(SimulatedMultiplier::new(), TEST_POLICY);

    // inf * 0 is NaN in IEEE-754; the driver must hand it back untouched.
    let product = driver.multiply(f32::INFINITY, 0.0).unwrap();
    assert!(product.is_nan());

    let product = driver.multiply(f32::NEG_INFINITY, 2.0).unwrap();
    assert_eq!(product, f32::NEG_INFINITY);

    // Negative zero: 2.0 * -0.0 keeps the sign bit.
    let product = driver.multiply(2.0, -0.0).unwrap();
    assert_eq!(product.to_bits(), (-0.0_f32).to_bits());
}

#[test]
fn unresponsive_device_times_out_without_any_write() {
    let mut driver = Multiplier::new(
        SimulatedMultiplier::unresponsive(),
        PollPolicy::Bounded { max_polls: 64 },
    );

    let err = driver.multiply(2.0, 3.5).unwrap_err();
    match err {
        DriverError::HandshakeTimeout { stage, polls } => {
            assert_eq!(stage, HandshakeStage::OperandA);
            assert_eq!(polls, 64);
        }
        other => panic!("expected a handshake timeout, got {other}"),
    }

    // The device never signaled readiness, so nothing may have been
    // written to INPUT or IN_FLAGS.
    let sim = driver.into_bus();
    assert!(sim.writes.is_empty());
    assert_eq!(sim.status_reads, 64);
}

#[test]
fn sequential_multiplications_are_independent_handshakes() {
    let mut driver = Multiplier::new(SimulatedMultiplier::new(), TEST_POLICY);
    assert_eq!(driver.multiply(2.0, 3.5).unwrap(), 7.0);
    assert_eq!(driver.multiply(-4.0, 0.25).unwrap(), -1.0);

    let sim = driver.into_bus();
    assert_eq!(sim.in_flag_writes(), vec![1, 2, 1, 2]);
}

proptest! {
    /// For arbitrary operand bit patterns, the returned value is
    /// bit-identical to the product the device published.
    #[test]
    fn product_bits_match_the_device_for_all_operands(a_bits in any::<u32>(), b_bits in any::<u32>()) {
        let a = f32::from_bits(a_bits);
        let b = f32::from_bits(b_bits);

        let mut driver = Multiplier::new(SimulatedMultiplier::new(), TEST_POLICY);
        let product = driver.multiply(a, b).unwrap();

        let expected = a * b;
        if expected.is_nan() {
            prop_assert!(product.is_nan());
        } else {
            prop_assert_eq!(product.to_bits(), expected.to_bits());
        }
    }
}
