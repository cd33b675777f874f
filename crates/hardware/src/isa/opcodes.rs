//! LS-8 Opcodes.
//!
//! Raw instruction bytes. The top two bits of each byte hold the operand count
//! and bit 5 marks instructions executed by the ALU.

/// Load immediate: `LDI reg, imm`.
pub const LDI: u8 = 0b1000_0010;

/// Print register as decimal: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Halt the machine: `HLT`.
pub const HLT: u8 = 0b0000_0001;

/// Multiply registers: `MUL reg_a, reg_b`.
pub const MUL: u8 = 0b1010_0010;

/// Push register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register: `POP reg`.
pub const POP: u8 = 0b0100_0110;
