//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, and the running flag.
//! 2. **Memory:** Owns the flat 256-byte address space shared by code, data, and stack.
//! 3. **Output:** Owns the stream `PRN` writes to.
//! 4. **Observability:** Carries the trace switch and run statistics.

/// Fetch-decode-execute loop and instruction handlers.
pub mod execution;

/// Bounds-checked memory and register access.
pub mod memory;

/// One-line state dump for debugging.
pub mod trace;

use std::io::{self, Write};

use crate::common::RegisterFile;
use crate::config::Config;
use crate::soc::Memory;
use crate::stats::SimStats;

pub use execution::RunSummary;

/// Main CPU structure containing all machine state.
///
/// `W` is the stream `PRN` writes to; it is stdout unless a different sink is
/// supplied with [`Cpu::with_output`].
#[derive(Debug)]
pub struct Cpu<W: Write = io::Stdout> {
    /// General-purpose registers (`R7` is the stack pointer).
    pub regs: RegisterFile,
    /// Program Counter.
    pub pc: usize,
    /// Main memory.
    pub ram: Memory,
    /// Cleared by `HLT`; the run loop stops when this is false.
    pub running: bool,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Abort after this many cycles without `HLT`.
    pub max_cycles: Option<u64>,
    /// Run statistics.
    pub stats: SimStats,
    sp_init: u8,
    output: W,
}

impl Cpu {
    /// Creates a new CPU in power-on state that prints to stdout.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration (tracing, cycle limit, initial stack pointer).
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Cpu<W> {
    /// Creates a new CPU in power-on state that prints to `output`.
    ///
    /// # Arguments
    ///
    /// * `config` - Run configuration (tracing, cycle limit, initial stack pointer).
    /// * `output` - Stream receiving `PRN` lines.
    pub fn with_output(config: &Config, output: W) -> Self {
        let sp_init = config.machine.stack_pointer_init;
        Self {
            regs: RegisterFile::with_stack_pointer(sp_init),
            pc: 0,
            ram: Memory::new(),
            running: true,
            trace: config.general.trace_instructions,
            max_cycles: config.general.max_cycles,
            stats: SimStats::default(),
            sp_init,
            output,
        }
    }

    /// Restores power-on state: zeroed memory and registers, stack pointer
    /// at its initial value, PC at 0, running, statistics cleared.
    ///
    /// Tracing and the cycle limit are kept.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::with_stack_pointer(self.sp_init);
        self.ram.clear();
        self.pc = 0;
        self.running = true;
        self.stats = SimStats::default();
    }

    /// Program counter.
    pub const fn pc(&self) -> usize {
        self.pc
    }

    /// Whether the machine has not yet halted.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// The stream `PRN` writes to.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the CPU, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Dumps the current CPU state (PC and registers) to stderr.
    pub fn dump_state(&self) {
        eprintln!("PC = {:#04x}", self.pc);
        self.regs.dump();
    }
}
