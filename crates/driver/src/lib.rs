//! FPGA floating-point multiplier driver library.
//!
//! This crate drives a single-precision floating-point multiplier implemented
//! as an FPGA overlay. It provides:
//! 1. **Registers:** The four-register map and the flag words of the handshake bus.
//! 2. **Encoding:** Big-endian IEEE-754 conversion between host floats and register words.
//! 3. **Overlay:** Bitstream loading and a memory-mapped register window over `/dev/mem`.
//! 4. **Driver:** The ready/valid handshake that performs one multiplication.
//! 5. **Configuration:** Documented defaults with JSON-supplied overrides.

/// Driver configuration (defaults, overlay placement, poll policy).
pub mod config;
/// The register-handshake driver that performs multiplications.
pub mod driver;
/// Driver error types.
pub mod error;
/// Host-side IEEE-754 encoding for the big-endian register bus.
pub mod float;
/// Overlay loading and memory-mapped register access.
pub mod overlay;
/// Register map and handshake flag definitions.
pub mod regs;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The handshake driver; construct with `Multiplier::new` over a register bus.
pub use crate::driver::Multiplier;
/// All errors reported by the overlay loader and the driver.
pub use crate::error::DriverError;
/// A programmed overlay with its register window mapped.
pub use crate::overlay::Overlay;
/// The 32-bit register access trait the driver is written against.
pub use crate::overlay::RegisterBus;
