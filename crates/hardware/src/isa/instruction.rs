//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the LS-8 instruction byte and the `Opcode`
//! enum that the dispatcher matches on.

use std::fmt;

use super::opcodes;
use crate::common::constants::{ALU_FLAG, ALU_OP_MASK, OPERAND_COUNT_SHIFT};

/// Trait for extracting instruction fields from an encoded instruction byte.
pub trait InstructionBits {
    /// Number of operand bytes following the instruction (bits 7-6).
    fn operand_count(&self) -> usize;

    /// Total bytes occupied by the instruction, opcode included.
    fn width(&self) -> usize;

    /// Whether the instruction is executed by the ALU (bit 5).
    fn is_alu(&self) -> bool;

    /// ALU operation identifier (bits 3-0).
    fn alu_op(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        (self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn width(&self) -> usize {
        self.operand_count() + 1
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_FLAG != 0
    }

    #[inline(always)]
    fn alu_op(&self) -> u8 {
        self & ALU_OP_MASK
    }
}

/// A decoded LS-8 instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `LDI reg, imm`: `reg = imm`.
    Ldi,
    /// `PRN reg`: print `reg` in decimal.
    Prn,
    /// `HLT`: stop the machine.
    Hlt,
    /// `MUL reg_a, reg_b`: `reg_a *= reg_b`.
    Mul,
    /// `PUSH reg`: `SP -= 1; mem[SP] = reg`.
    Push,
    /// `POP reg`: `reg = mem[SP]; SP += 1`.
    Pop,
}

impl Opcode {
    /// Every defined instruction, in table order.
    pub const ALL: [Self; 6] = [
        Self::Ldi,
        Self::Prn,
        Self::Hlt,
        Self::Mul,
        Self::Push,
        Self::Pop,
    ];

    /// The raw instruction byte.
    pub const fn byte(self) -> u8 {
        match self {
            Self::Ldi => opcodes::LDI,
            Self::Prn => opcodes::PRN,
            Self::Hlt => opcodes::HLT,
            Self::Mul => opcodes::MUL,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Hlt => "HLT",
            Self::Mul => "MUL",
            Self::Push => "PUSH",
            Self::Pop => "POP",
        }
    }

    /// Number of operand bytes.
    pub fn operand_count(self) -> usize {
        self.byte().operand_count()
    }

    /// Bytes consumed by the instruction; the program counter advances by this.
    pub fn width(self) -> usize {
        self.byte().width()
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Decodes an instruction byte, handing back the byte if it is not in the
    /// instruction table.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            opcodes::LDI => Ok(Self::Ldi),
            opcodes::PRN => Ok(Self::Prn),
            opcodes::HLT => Ok(Self::Hlt),
            opcodes::MUL => Ok(Self::Mul),
            opcodes::PUSH => Ok(Self::Push),
            opcodes::POP => Ok(Self::Pop),
            other => Err(other),
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
