//! Instruction Disassembler for the LS-8.
//!
//! Converts the bytes at an address into a human-readable instruction for
//! debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0x82, 0x00, 0x08]), "LDI R0, 8");
//! assert_eq!(disassemble(&[0xA2, 0x00, 0x01]), "MUL R0, R1");
//! ```

use super::instruction::{InstructionBits, Opcode};

/// Disassembles the instruction starting at `bytes[0]`.
///
/// Returns `"unknown 0x.."` for bytes outside the instruction table and
/// `"<mnemonic> ??"` when operand bytes are missing.
pub fn disassemble(bytes: &[u8]) -> String {
    let Some(&byte) = bytes.first() else {
        return String::from("??");
    };
    let Ok(op) = Opcode::try_from(byte) else {
        return format!("unknown {byte:#04x}");
    };
    let operands = &bytes[1..];
    if operands.len() < op.operand_count() {
        return format!("{op} ??");
    }

    // ALU-class instructions always take two registers.
    if byte.is_alu() {
        return format!("{op} R{}, R{}", operands[0], operands[1]);
    }
    match op {
        Opcode::Hlt => op.to_string(),
        Opcode::Ldi => format!("{op} R{}, {}", operands[0], operands[1]),
        _ => format!("{op} R{}", operands[0]),
    }
}

/// Disassembles a whole program image into `(address, text)` pairs.
///
/// Decoding resumes after each instruction's width; an unknown byte is
/// reported and skipped one byte at a time.
pub fn disassemble_program(image: &[u8]) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut addr = 0;
    while addr < image.len() {
        let text = disassemble(&image[addr..]);
        let step = Opcode::try_from(image[addr]).map_or(1, Opcode::width);
        out.push((addr, text));
        addr += step;
    }
    out
}
