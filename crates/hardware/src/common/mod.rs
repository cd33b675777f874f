//! Common types and constants shared across the emulator.
//!
//! This module provides the fundamental building blocks used by every other
//! component:
//! 1. **Constants:** Memory size, register count, stack pointer, encoding fields.
//! 2. **Error Handling:** CPU faults, loader errors, and configuration errors.
//! 3. **Register Management:** The 8-bit general-purpose register file.

/// Machine dimensions and instruction encoding constants.
pub mod constants;

/// Error types for execution, loading, and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, REGISTER_COUNT, SP, STACK_POINTER_INIT};
pub use error::{ConfigError, CpuError, LoadError};
pub use reg::RegisterFile;
