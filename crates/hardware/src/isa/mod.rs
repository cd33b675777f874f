//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, instruction field decoding, and a disassembler
//! for the LS-8 instruction set.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction byte field extraction and the decoded `Opcode` enum.
pub mod instruction;

/// Raw opcode byte constants.
pub mod opcodes;

pub use instruction::{InstructionBits, Opcode};
