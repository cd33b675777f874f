//! Instruction trace line.
//!
//! Formats the machine state as a single line for debugging:
//!
//! ```text
//! TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
//! ```
//!
//! Program counter, the instruction byte and the two bytes after it, then
//! `R0`-`R7`, all as two-digit uppercase hex.

use std::io::Write;

use super::Cpu;

impl<W: Write> Cpu<W> {
    /// Returns the trace line for the current state.
    ///
    /// Bytes past the end of memory render as `00`.
    pub fn trace_line(&self) -> String {
        let byte = |offset: usize| self.read_memory(self.pc + offset).unwrap_or(0);

        let regs = self
            .regs
            .as_slice()
            .iter()
            .map(|reg| format!("{reg:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} | {regs}",
            self.pc,
            byte(0),
            byte(1),
            byte(2)
        )
    }

    /// Prints the trace line to stderr.
    pub fn print_trace(&self) {
        eprintln!("{}", self.trace_line());
    }
}
