//! Memory-mapped register window over `/dev/mem`.
//!
//! Maps the physical register window of the loaded overlay and implements
//! [`RegisterBus`] with volatile word accesses. The mapping is opened with
//! `O_SYNC` so accesses reach the device uncached and in order.

use crate::overlay::RegisterBus;
use std::fs::OpenOptions;
use std::io;
use std::os::fd::AsRawFd;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

/// A register window mapped from physical memory.
#[derive(Debug)]
pub struct MmioRegisters {
    base: *mut u32,
    len: usize,
}

impl MmioRegisters {
    /// Maps `len` bytes of physical memory starting at `phys_base`.
    ///
    /// `phys_base` and `len` must be page-aligned, as required by `mmap`.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the device node cannot be opened or the
    /// mapping fails.
    pub fn map(mem_device: &Path, phys_base: u64, len: usize) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open(mem_device)?;

        // SAFETY: mapping a fresh region from a freshly opened fd; the
        // result is checked against MAP_FAILED before use. The fd may be
        // dropped afterwards, the mapping outlives it.
        let base = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                file.as_raw_fd(),
                phys_base as libc::off_t,
            )
        };
        if base == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }

        Ok(Self {
            base: base.cast::<u32>(),
            len,
        })
    }

    /// Returns a pointer to the word at `offset`, panicking on offsets
    /// outside the mapped window or not word-aligned. Such offsets are
    /// driver bugs, not device conditions.
    fn slot(&self, offset: u64) -> *mut u32 {
        let offset = offset as usize;
        assert!(
            offset + 4 <= self.len,
            "register offset {offset:#x} outside mapped window"
        );
        assert_eq!(offset % 4, 0, "register offset {offset:#x} not word aligned");
        // SAFETY: bounds and alignment checked above; `base` is a valid
        // mapping of `len` bytes.
        unsafe { self.base.add(offset / 4) }
    }
}

impl RegisterBus for MmioRegisters {
    fn name(&self) -> &str {
        "fpm0"
    }

    fn read_u32(&mut self, offset: u64) -> u32 {
        let slot = self.slot(offset);
        // SAFETY: `slot` points inside the mapped window; volatile keeps
        // the device access from being elided or reordered.
        unsafe { slot.read_volatile() }
    }

    fn write_u32(&mut self, offset: u64, value: u32) {
        let slot = self.slot(offset);
        // SAFETY: as in `read_u32`.
        unsafe { slot.write_volatile(value) }
    }
}

impl Drop for MmioRegisters {
    fn drop(&mut self) {
        // SAFETY: `base` came from a successful mmap of `len` bytes.
        unsafe {
            let _ = libc::munmap(self.base.cast(), self.len);
        }
    }
}
