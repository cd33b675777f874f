//! Machine, Loader, and Configuration Errors.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **CPU Faults:** Every way a fetch-decode-execute cycle can abort a run.
//! 2. **Load Errors:** Failures turning a program file into memory contents.
//! 3. **Config Errors:** Failures reading or parsing a JSON run configuration.
//!
//! None of these are retryable; a fault aborts the whole run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A fault raised while the CPU is executing.
///
/// A clean `HLT` is never an error; everything here terminates the run
/// abnormally.
#[derive(Debug, Error)]
pub enum CpuError {
    /// The byte at the program counter is not in the instruction table.
    #[error("unknown instruction {opcode:#010b} ({opcode:#04x}) at address {pc}")]
    UnknownInstruction {
        /// The offending instruction byte.
        opcode: u8,
        /// Address the byte was fetched from.
        pc: usize,
    },

    /// The ALU was asked for an operation it does not implement.
    ///
    /// Unreachable from the defined instruction set; seeing this means the
    /// decoder and the ALU disagree.
    #[error("unsupported ALU operation {0:#06b}")]
    UnsupportedAluOperation(u8),

    /// A memory access outside `0..MEMORY_SIZE`.
    #[error("memory address {0:#x} is out of range")]
    AddressOutOfRange(usize),

    /// A register access outside `0..REGISTER_COUNT`.
    #[error("register index {0} is out of range")]
    RegisterOutOfRange(usize),

    /// A program image larger than memory.
    #[error("program is {len} bytes but memory holds only {capacity}")]
    ProgramTooLarge {
        /// Length of the rejected program.
        len: usize,
        /// Memory capacity in bytes.
        capacity: usize,
    },

    /// A step was requested after `HLT`; the machine must be reset first.
    #[error("machine halted at address {0}")]
    Halted(usize),

    /// The configured cycle budget ran out before `HLT`.
    #[error("cycle limit of {0} exceeded without reaching HLT")]
    CycleLimitExceeded(u64),

    /// `PRN` could not write to the output stream.
    #[error("failed to write program output: {0}")]
    Output(#[from] io::Error),
}

/// A failure turning a program file into a loaded machine.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program file '{}': {source}", path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The parsed program could not be placed in memory.
    #[error(transparent)]
    Cpu(#[from] CpuError),
}

/// A failure reading a JSON run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file '{}': {source}", path.display())]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
