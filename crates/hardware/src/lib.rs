//! LS-8 emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit register machine
//! with 256 bytes of memory, with the following:
//! 1. **Core:** Machine state (registers, memory, program counter) and the
//!    fetch-decode-execute loop.
//! 2. **ISA:** Opcode table, instruction field decoding, and disassembly.
//! 3. **ALU:** Wrapping 8-bit register arithmetic.
//! 4. **Simulation:** Program loader, configuration, and statistics collection.
//!
//! ```
//! use ls8_core::{Config, Cpu};
//!
//! let mut cpu = Cpu::with_output(&Config::default(), Vec::new());
//! // LDI R0,8; PRN R0; HLT
//! cpu.load_program(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();
//! let summary = cpu.run().unwrap();
//! assert_eq!(summary.cycles, 3);
//! assert_eq!(cpu.into_output(), b"PRN: 8\n");
//! ```

/// Common types and constants (machine dimensions, registers, errors).
pub mod common;
/// Run configuration (defaults and JSON loading).
pub mod config;
/// CPU core (machine state, execution, ALU).
pub mod core;
/// Instruction set (opcodes, decoding, disassembly).
pub mod isa;
/// Program loader and simulator driver.
pub mod sim;
/// System memory.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; loads a program file and runs it.
pub use crate::sim::Simulator;
