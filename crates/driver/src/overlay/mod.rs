//! Overlay loading and register window mapping.
//!
//! Loading an overlay means pushing a bitstream into the programmable logic
//! and mapping the multiplier's AXI register window into this process. The
//! bitstream must be accompanied by the block design file exported alongside
//! it (`<stem>.tcl`); both are checked before any hardware is touched, which
//! catches the common mistake of copying only the `.bit` file onto the
//! board.

mod mmio;
mod traits;

pub use mmio::MmioRegisters;
pub use traits::RegisterBus;

use crate::config::OverlayConfig;
use crate::error::DriverError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Checks that the bitstream and its companion block design file exist.
///
/// # Errors
///
/// Returns [`DriverError::MissingBitstream`] or
/// [`DriverError::MissingBlockDesign`] naming the absent path.
pub fn check_artifacts(bitstream: &Path) -> Result<(), DriverError> {
    if !bitstream.is_file() {
        return Err(DriverError::MissingBitstream(bitstream.to_path_buf()));
    }
    let block_design = bitstream.with_extension("tcl");
    if !block_design.is_file() {
        return Err(DriverError::MissingBlockDesign(block_design));
    }
    Ok(())
}

/// A programmed overlay with its register window mapped.
#[derive(Debug)]
pub struct Overlay {
    registers: MmioRegisters,
}

impl Overlay {
    /// Validates the overlay artifacts, programs the device, and maps the
    /// multiplier's register window.
    ///
    /// Artifact checks run before any hardware interaction; a missing file
    /// fails the load without touching the device.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::MissingBitstream`] or
    /// [`DriverError::MissingBlockDesign`] if an artifact is absent, or
    /// [`DriverError::Io`] if programming or mapping fails.
    pub fn load(config: &OverlayConfig) -> Result<Self, DriverError> {
        check_artifacts(&config.bitstream)?;

        info!(bitstream = %config.bitstream.display(), "programming overlay");
        let data = fs::read(&config.bitstream)?;
        fs::write(&config.config_device, &data)?;

        let registers =
            MmioRegisters::map(&config.mem_device, config.register_base, config.map_len)?;
        Ok(Self { registers })
    }

    /// Returns the mapped register window.
    pub fn registers(&mut self) -> &mut MmioRegisters {
        &mut self.registers
    }

    /// Consumes the overlay, returning the mapped register window.
    pub fn into_registers(self) -> MmioRegisters {
        self.registers
    }
}
