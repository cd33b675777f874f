//! Simulator: owns the CPU and drives a program from file to halt.

use std::io::{self, Write};
use std::path::Path;

use crate::common::error::{CpuError, LoadError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::RunSummary;
use crate::sim::loader;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator<W: Write = io::Stdout> {
    /// CPU state (registers, memory, stats).
    pub cpu: Cpu<W>,
}

impl Simulator {
    /// Creates a simulator whose program output goes to stdout.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
        }
    }
}

impl<W: Write> Simulator<W> {
    /// Creates a simulator whose program output goes to `output`.
    pub fn with_output(config: &Config, output: W) -> Self {
        Self {
            cpu: Cpu::with_output(config, output),
        }
    }

    /// Loads a program file into memory.
    ///
    /// # Errors
    ///
    /// See [`loader::load_file_into`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        loader::load_file_into(&mut self.cpu, path)
    }

    /// Loads a program image into memory.
    ///
    /// # Errors
    ///
    /// Returns [`CpuError::ProgramTooLarge`] if the image exceeds memory.
    pub fn load_bytes(&mut self, image: &[u8]) -> Result<(), CpuError> {
        self.cpu.load_program(image)
    }

    /// Advances the simulator by one instruction.
    ///
    /// # Errors
    ///
    /// See [`Cpu::step`].
    pub fn tick(&mut self) -> Result<(), CpuError> {
        self.cpu.step().map(|_| ())
    }

    /// Runs until `HLT` or a fault.
    ///
    /// # Errors
    ///
    /// See [`Cpu::run`].
    pub fn run(&mut self) -> Result<RunSummary, CpuError> {
        self.cpu.run()
    }
}
