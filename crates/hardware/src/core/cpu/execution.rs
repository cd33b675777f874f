//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the CPU. It performs the following:
//! 1. **Fetch:** Reads the instruction byte at the program counter.
//! 2. **Decode:** Maps the byte onto [`Opcode`]; bytes outside the table fault.
//! 3. **Execute:** Runs the handler, which reads its own operand bytes.
//! 4. **Advance:** Moves the program counter past the instruction once the handler succeeds.
//!
//! A faulting instruction leaves the program counter on itself, so the
//! reported address is the address of the instruction that failed.

use std::io::Write;

use super::Cpu;
use crate::common::constants::REGISTER_COUNT;
use crate::common::error::CpuError;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::disasm::disassemble;
use crate::isa::{InstructionBits, Opcode};

/// Outcome of a run that ended with `HLT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed, `HLT` included.
    pub cycles: u64,
    /// Program counter after `HLT`.
    pub pc: usize,
}

impl<W: Write> Cpu<W> {
    /// Runs until `HLT` or a fault.
    ///
    /// # Errors
    ///
    /// Returns the first [`CpuError`] raised by an instruction, or
    /// [`CpuError::CycleLimitExceeded`] if the configured limit runs out.
    pub fn run(&mut self) -> Result<RunSummary, CpuError> {
        while self.running {
            if let Some(limit) = self.max_cycles.filter(|&limit| self.stats.cycles >= limit) {
                return Err(CpuError::CycleLimitExceeded(limit));
            }
            let _ = self.step()?;
        }
        self.output.flush()?;

        tracing::info!(cycles = self.stats.cycles, pc = self.pc, "halted");
        Ok(RunSummary {
            cycles: self.stats.cycles,
            pc: self.pc,
        })
    }

    /// Executes one fetch-decode-execute cycle.
    ///
    /// # Returns
    ///
    /// The instruction that was executed.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::Halted`] once `HLT` has executed,
    /// [`CpuError::UnknownInstruction`] for a byte outside the instruction
    /// table, or any error raised by the handler.
    pub fn step(&mut self) -> Result<Opcode, CpuError> {
        let pc = self.pc;
        if !self.running {
            return Err(CpuError::Halted(pc));
        }
        let ir = self.read_memory(pc)?;
        let op =
            Opcode::try_from(ir).map_err(|opcode| CpuError::UnknownInstruction { opcode, pc })?;

        if self.trace {
            self.print_trace();
            tracing::trace!(pc, inst = %self.disassemble_at(pc), "execute");
        }

        match op {
            Opcode::Ldi => self.ldi()?,
            Opcode::Prn => self.prn()?,
            Opcode::Hlt => self.hlt(),
            Opcode::Mul => self.alu_instruction(ir)?,
            Opcode::Push => self.push()?,
            Opcode::Pop => self.pop()?,
        }

        self.pc += op.width();
        self.stats.record(op);
        Ok(op)
    }

    /// Applies `op` to two registers: `reg_a = reg_a OP reg_b`.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::RegisterOutOfRange`] if either index is invalid.
    pub fn alu(&mut self, op: AluOp, reg_a: usize, reg_b: usize) -> Result<(), CpuError> {
        let a = self.read_register(reg_a)?;
        let b = self.read_register(reg_b)?;
        self.write_register(reg_a, Alu::execute(op, a, b))
    }

    /// Operand byte `n` of the current instruction (`PC + n`).
    fn operand(&self, n: usize) -> Result<u8, CpuError> {
        self.read_memory(self.pc + n)
    }

    /// Operand byte `n` interpreted as a register index.
    fn register_operand(&self, n: usize) -> Result<usize, CpuError> {
        let idx = self.operand(n)? as usize;
        if idx < REGISTER_COUNT {
            Ok(idx)
        } else {
            Err(CpuError::RegisterOutOfRange(idx))
        }
    }

    fn ldi(&mut self) -> Result<(), CpuError> {
        let reg = self.register_operand(1)?;
        let imm = self.operand(2)?;
        self.write_register(reg, imm)
    }

    fn prn(&mut self) -> Result<(), CpuError> {
        let reg = self.register_operand(1)?;
        let value = self.read_register(reg)?;
        writeln!(self.output, "PRN: {value}")?;
        Ok(())
    }

    const fn hlt(&mut self) {
        self.running = false;
    }

    /// ALU-class instructions name their operation in the low nibble.
    fn alu_instruction(&mut self, ir: u8) -> Result<(), CpuError> {
        let op = AluOp::try_from(ir.alu_op())?;
        let reg_a = self.register_operand(1)?;
        let reg_b = self.register_operand(2)?;
        self.alu(op, reg_a, reg_b)
    }

    // Descending full stack: PUSH decrements before writing, POP reads before
    // incrementing.
    fn push(&mut self) -> Result<(), CpuError> {
        let reg = self.register_operand(1)?;
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        let value = self.read_register(reg)?;
        self.write_memory(sp as usize, value)
    }

    fn pop(&mut self) -> Result<(), CpuError> {
        let reg = self.register_operand(1)?;
        let sp = self.regs.sp();
        let value = self.read_memory(sp as usize)?;
        self.write_register(reg, value)?;
        self.regs.set_sp(self.regs.sp().wrapping_add(1));
        Ok(())
    }

    /// Disassembly of the instruction at `addr`, for trace events.
    fn disassemble_at(&self, addr: usize) -> String {
        let mem = self.ram.as_slice();
        mem.get(addr..).map_or_else(|| String::from("??"), disassemble)
    }
}
