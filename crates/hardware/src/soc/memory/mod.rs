//! System Memory.
//!
//! This module implements the machine's only storage device: a flat array of
//! 256 bytes shared by program code, data, and the stack. It provides:
//! 1. **Storage:** Zero-initialized fixed-size cells that are never resized.
//! 2. **Bounds Checking:** Reads and writes validate the address and report a typed error.
//! 3. **Program Loading:** Bulk copy of an image starting at address 0.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::CpuError;

/// Flat byte-addressable memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Memory capacity in bytes.
    pub const SIZE: usize = MEMORY_SIZE;

    /// Creates zeroed memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::AddressOutOfRange`] if `addr >= MEMORY_SIZE`.
    #[inline]
    pub fn read_u8(&self, addr: usize) -> Result<u8, CpuError> {
        self.cells
            .get(addr)
            .copied()
            .ok_or(CpuError::AddressOutOfRange(addr))
    }

    /// Writes `val` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::AddressOutOfRange`] if `addr >= MEMORY_SIZE`.
    #[inline]
    pub fn write_u8(&mut self, addr: usize, val: u8) -> Result<(), CpuError> {
        let cell = self
            .cells
            .get_mut(addr)
            .ok_or(CpuError::AddressOutOfRange(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies `image` into memory starting at address 0.
    ///
    /// Cells past the end of the image keep their previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::ProgramTooLarge`] if the image does not fit; memory
    /// is left untouched in that case.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), CpuError> {
        if image.len() > Self::SIZE {
            return Err(CpuError::ProgramTooLarge {
                len: image.len(),
                capacity: Self::SIZE,
            });
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// The whole address space as a slice.
    pub const fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
