//! Run statistics collection and reporting.
//!
//! This module tracks execution metrics for the emulator. It provides:
//! 1. **Cycles:** Instructions executed and host throughput.
//! 2. **Instruction mix:** Counts by category (load, ALU, stack, I/O, system).

use std::time::Instant;

use crate::isa::Opcode;

/// Run statistics tracking executed instructions.
///
/// The LS-8 executes one instruction per cycle, so `cycles` and
/// `instructions_retired` advance together; both are kept so reports read
/// like those of larger simulators.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that completed.
    pub instructions_retired: u64,

    /// Count of immediate loads (`LDI`).
    pub inst_load: u64,
    /// Count of ALU instructions (`MUL`).
    pub inst_alu: u64,
    /// Count of stack instructions (`PUSH`, `POP`).
    pub inst_stack: u64,
    /// Count of output instructions (`PRN`).
    pub inst_io: u64,
    /// Count of system instructions (`HLT`).
    pub inst_system: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_io: 0,
            inst_system: 0,
        }
    }
}

impl SimStats {
    /// Records one completed instruction.
    pub const fn record(&mut self, op: Opcode) {
        self.cycles += 1;
        self.instructions_retired += 1;
        match op {
            Opcode::Ldi => self.inst_load += 1,
            Opcode::Mul => self.inst_alu += 1,
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Prn => self.inst_io += 1,
            Opcode::Hlt => self.inst_system += 1,
        }
    }

    /// Prints the statistics report to stderr.
    ///
    /// Stdout is left to program output so reports never interleave with
    /// `PRN` lines in a pipe.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        eprintln!("\n==========================================================");
        eprintln!("LS-8 EMULATION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {seconds:.6} s");
        eprintln!("sim_cycles               {}", self.cycles);
        eprintln!("sim_insts                {}", self.instructions_retired);
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        eprintln!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        eprintln!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        eprintln!("  op.stack               {} ({:.2}%)", self.inst_stack, pct(self.inst_stack));
        eprintln!("  op.io                  {} ({:.2}%)", self.inst_io, pct(self.inst_io));
        eprintln!("  op.system              {} ({:.2}%)", self.inst_system, pct(self.inst_system));
        eprintln!("==========================================================");
    }
}
