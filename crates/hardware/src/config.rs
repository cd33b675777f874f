//! Configuration system for the LS-8 emulator.
//!
//! This module defines the structures used to parameterize a run. It provides:
//! 1. **Defaults:** Power-on constants (stack pointer, tracing off, no cycle limit).
//! 2. **Structures:** Hierarchical config split into general and machine sections.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! Every field is optional in JSON; missing fields take their default. Use
//! `Config::default()` when no configuration file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the emulator.
mod defaults {
    use crate::common::constants::STACK_POINTER_INIT;

    /// Initial value of the stack pointer register (`R7`).
    pub const STACK_POINTER: u8 = STACK_POINTER_INIT;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 1000 },
///     "machine": { "stack_pointer_init": 240 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(1000));
/// assert_eq!(config.machine.stack_pointer_init, 0xF0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine power-on state
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Print a trace line to stderr before every instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Abort the run once this many instructions have executed without `HLT`
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Machine power-on state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MachineConfig {
    /// Initial stack pointer (defaults to `0xF4`)
    #[serde(default = "MachineConfig::default_stack_pointer_init")]
    pub stack_pointer_init: u8,
}

impl MachineConfig {
    /// Returns the default initial stack pointer.
    const fn default_stack_pointer_init() -> u8 {
        defaults::STACK_POINTER
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            stack_pointer_init: defaults::STACK_POINTER,
        }
    }
}
