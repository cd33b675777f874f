//! Execution units.
//!
//! The LS-8 has a single functional unit besides the dispatcher itself: the
//! ALU that performs register-to-register arithmetic.

/// Arithmetic Logic Unit for register-to-register operations.
pub mod alu;
