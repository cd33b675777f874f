//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight 8-bit
//! registers of the machine. It provides:
//! 1. **Storage:** Eight `u8` slots, `R0`-`R7`, zeroed at power-on.
//! 2. **Bounds Checking:** Every access validates the index and reports a typed error.
//! 3. **Stack Pointer:** `R7` doubles as the stack pointer and starts at `0xF4`.

use super::constants::{REGISTER_COUNT, SP, STACK_POINTER_INIT};
use super::error::CpuError;

/// The eight 8-bit general-purpose registers.
///
/// Values are `u8`, so every write is already truncated to the machine word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a register file with all registers zero and the stack pointer
    /// at [`STACK_POINTER_INIT`].
    pub fn new() -> Self {
        Self::with_stack_pointer(STACK_POINTER_INIT)
    }

    /// Creates a register file with all registers zero and the stack pointer
    /// at `sp`.
    pub fn with_stack_pointer(sp: u8) -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP] = sp;
        Self { regs }
    }

    /// Reads register `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] if `idx` is not in `0..8`.
    pub fn read(&self, idx: usize) -> Result<u8, CpuError> {
        self.regs
            .get(idx)
            .copied()
            .ok_or(CpuError::RegisterOutOfRange(idx))
    }

    /// Writes `val` to register `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] if `idx` is not in `0..8`.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), CpuError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(CpuError::RegisterOutOfRange(idx))?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// All registers in index order.
    pub const fn as_slice(&self) -> &[u8; REGISTER_COUNT] {
        &self.regs
    }

    /// Dumps the contents of all registers to stderr.
    pub fn dump(&self) {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            eprintln!(
                "R{}={:#04x} R{}={:#04x}",
                i * 2,
                pair[0],
                i * 2 + 1,
                pair[1]
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
