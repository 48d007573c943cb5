//! Driver error types.
//!
//! Two failure classes exist: overlay artifacts missing or inaccessible
//! (detected before any hardware interaction) and a handshake that exhausts
//! its poll budget. The device has no fault flag distinct from "not yet
//! ready", so a stuck handshake is only distinguishable by the stage that
//! stalled.

use crate::regs::HandshakeStage;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the overlay loader and the handshake driver.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The bitstream file does not exist.
    #[error("bitstream file not found: {0}")]
    MissingBitstream(PathBuf),

    /// The block design file accompanying the bitstream does not exist.
    #[error("block design file not found: {0}")]
    MissingBlockDesign(PathBuf),

    /// Programming the device or mapping the register window failed.
    #[error("device access failed: {0}")]
    Io(#[from] std::io::Error),

    /// A polled status bit never became set within the configured budget.
    #[error("handshake timed out waiting for {stage} after {polls} polls")]
    HandshakeTimeout {
        /// The wait point that exhausted its poll budget.
        stage: HandshakeStage,
        /// Number of status reads performed before giving up.
        polls: u64,
    },
}
