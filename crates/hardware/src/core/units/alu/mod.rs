//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the register-to-register ALU. ALU-class
//! instructions carry bit 5 in their instruction byte, and the low nibble
//! selects the operation:
//!
//! | id  | operation |
//! |-----|-----------|
//! | `0` | ADD       |
//! | `2` | MUL       |
//!
//! Any other identifier is rejected with
//! [`CpuError::UnsupportedAluOperation`] rather than ignored.

/// Wrapping 8-bit add and multiply.
pub mod arithmetic;

use std::fmt;

use crate::common::error::CpuError;

/// Operations the ALU can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a + b`, wrapping.
    Add,
    /// `a * b`, wrapping.
    Mul,
}

impl TryFrom<u8> for AluOp {
    type Error = CpuError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0b0000 => Ok(Self::Add),
            0b0010 => Ok(Self::Mul),
            other => Err(CpuError::UnsupportedAluOperation(other)),
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("ADD"),
            Self::Mul => f.write_str("MUL"),
        }
    }
}

/// Arithmetic Logic Unit for 8-bit register operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes `op` on two register values and returns the 8-bit result.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 40, 2), 42);
    /// assert_eq!(Alu::execute(AluOp::Mul, 5, 6), 30);
    ///
    /// // Results wrap at the register width.
    /// assert_eq!(Alu::execute(AluOp::Add, 255, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Mul, 200, 200), 64);
    /// ```
    pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
        arithmetic::execute(op, a, b)
    }
}
