//! System components outside the CPU core.
//!
//! The LS-8 has no bus or devices; its only peripheral is the flat memory
//! array that the CPU fetches from and the stack lives in.

/// Flat 256-byte system memory.
pub mod memory;

pub use memory::Memory;
