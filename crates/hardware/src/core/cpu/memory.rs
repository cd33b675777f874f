//! Memory and Register Access.
//!
//! This module provides the bounds-checked interface between instruction
//! handlers and machine state. Out-of-range addresses and register indices
//! are reported as typed errors instead of wrapping, so a buggy program
//! faults at the access that went wrong.

use std::io::Write;

use super::Cpu;
use crate::common::error::CpuError;

impl<W: Write> Cpu<W> {
    /// Reads the memory cell at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::AddressOutOfRange`] if `address` is not in `0..256`.
    pub fn read_memory(&self, address: usize) -> Result<u8, CpuError> {
        self.ram.read_u8(address)
    }

    /// Stores `value` at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::AddressOutOfRange`] if `address` is not in `0..256`.
    pub fn write_memory(&mut self, address: usize, value: u8) -> Result<(), CpuError> {
        self.ram.write_u8(address, value)
    }

    /// Reads register `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] if `index` is not in `0..8`.
    pub fn read_register(&self, index: usize) -> Result<u8, CpuError> {
        self.regs.read(index)
    }

    /// Writes `value` to register `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] if `index` is not in `0..8`.
    pub fn write_register(&mut self, index: usize, value: u8) -> Result<(), CpuError> {
        self.regs.write(index, value)
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// Existing contents are overwritten for the length of the image; the
    /// rest of memory is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::ProgramTooLarge`] if the image exceeds memory.
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), CpuError> {
        self.ram.load_image(bytes)?;
        tracing::debug!(len = bytes.len(), "program loaded");
        Ok(())
    }
}
