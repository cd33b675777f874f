//! ALU arithmetic operations.
//!
//! Registers are eight bits wide, so every result wraps modulo 256.

use super::AluOp;

/// Executes an arithmetic operation on two register values.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Mul => a.wrapping_mul(b),
    }
}
