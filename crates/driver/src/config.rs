//! Configuration for the multiplier driver.
//!
//! This module defines the configuration structures used to parameterize the
//! overlay loader and the handshake driver. It provides:
//! 1. **Defaults:** Baseline constants (artifact paths, register window, poll budget).
//! 2. **Structures:** Hierarchical config for the overlay and the handshake.
//! 3. **JSON:** `Config::from_json` for partial overrides; unspecified fields
//!    keep their defaults.

use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration constants for the driver.
///
/// These values describe the stock board setup and are used when a field is
/// not explicitly overridden.
mod defaults {
    /// Default bitstream file name, resolved against the working directory.
    ///
    /// The block design file exported with the bitstream must sit beside it
    /// under the same stem (`system.tcl`).
    pub const BITSTREAM: &str = "system.bit";

    /// Device node the raw bitstream is pushed through to configure the
    /// programmable logic.
    pub const CONFIG_DEVICE: &str = "/dev/xdevcfg";

    /// Device node exposing physical memory for register window mapping.
    pub const MEM_DEVICE: &str = "/dev/mem";

    /// Physical base address of the multiplier's AXI register window.
    ///
    /// The stock block design places the multiplier at the bottom of the
    /// PS-to-PL general-purpose port 0 segment.
    pub const REGISTER_BASE: u64 = 0x4000_0000;

    /// Bytes mapped for the register window (one MMU page).
    ///
    /// Only the first 16 bytes hold registers; the mapping length must
    /// still be page-sized.
    pub const MAP_LEN: usize = 0x1000;

    /// Default poll budget per handshake wait point.
    ///
    /// Large enough that a healthy device never comes close, small enough
    /// that an unprogrammed or wedged device fails in well under a second.
    pub const MAX_POLLS: u64 = 10_000_000;
}

/// Artifact paths and register window placement for the overlay.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Path of the bitstream file; a same-stem `.tcl` block design file
    /// must exist beside it.
    pub bitstream: PathBuf,
    /// Device node the raw bitstream is written through.
    pub config_device: PathBuf,
    /// Device node used to map the register window.
    pub mem_device: PathBuf,
    /// Physical base address of the register window.
    pub register_base: u64,
    /// Bytes to map for the register window.
    pub map_len: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            bitstream: PathBuf::from(defaults::BITSTREAM),
            config_device: PathBuf::from(defaults::CONFIG_DEVICE),
            mem_device: PathBuf::from(defaults::MEM_DEVICE),
            register_base: defaults::REGISTER_BASE,
            map_len: defaults::MAP_LEN,
        }
    }
}

/// Poll budget applied to one wait point of the handshake.
///
/// An unresponsive device would otherwise block the calling thread forever;
/// the bounded variant turns a stuck handshake into a reportable timeout
/// naming the stage that stalled.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PollPolicy {
    /// Spin until the flag appears, with no upper bound.
    Unbounded,
    /// Give up with a timeout error after `max_polls` status reads.
    Bounded {
        /// Maximum number of status reads per wait point.
        max_polls: u64,
    },
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::Bounded {
            max_polls: defaults::MAX_POLLS,
        }
    }
}

/// Handshake tuning.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HandshakeConfig {
    /// Poll budget applied to each of the three wait points.
    pub poll: PollPolicy,
}

/// Root configuration for the driver.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Overlay artifacts and register window placement.
    pub overlay: OverlayConfig,
    /// Handshake tuning.
    pub handshake: HandshakeConfig,
}

impl Config {
    /// Builds a configuration from a JSON document.
    ///
    /// Fields absent from the document keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if the document is
    /// malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
