//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Register Constants:** Register file width and the reserved stack pointer slot.
//! 3. **Encoding Constants:** Bit fields of the instruction byte.

/// Number of addressable memory cells (one byte each).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Register index reserved for the stack pointer.
pub const SP: usize = 7;

/// Power-on value of the stack pointer.
///
/// The stack grows downward from here through the same address space as
/// program and data.
pub const STACK_POINTER_INIT: u8 = 0xF4;

/// Shift that moves the operand count (bits 7-6) of an instruction byte into
/// the low bits.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit set in instruction bytes that are executed by the ALU.
pub const ALU_FLAG: u8 = 0b0010_0000;

/// Mask selecting the ALU operation identifier (bits 3-0).
pub const ALU_OP_MASK: u8 = 0b0000_1111;
