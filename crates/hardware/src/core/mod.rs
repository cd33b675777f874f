//! Core processor implementation.
//!
//! This module contains the CPU (machine state plus the fetch-decode-execute
//! loop) and the execution units it dispatches to.

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
