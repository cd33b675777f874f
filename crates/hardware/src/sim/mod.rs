//! Simulation utilities and program loading.
//!
//! Provides the text-program loader and the `Simulator` wrapper that runs a
//! loaded program to completion.

/// Program text parsing and file loading.
pub mod loader;

/// Top-level simulator owning the CPU.
pub mod simulator;

pub use simulator::Simulator;
