//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize
//! the machine. It provides:
//! 1. **Defaults:** Reference machine constants (RAM size, stack pointer reset value).
//! 2. **Structures:** Hierarchical config for general run options and memory.
//! 3. **Loading:** JSON deserialization with range validation.
//!
//! Every field is optional in JSON; missing fields take the reference defaults.
//! Use `Config::default()` to run the reference machine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::common::constants::{MAX_RAM_SIZE, MIN_RAM_SIZE};

/// Default configuration constants for the emulator.
mod defaults {
    use crate::common::constants;

    /// Reference RAM size (255 cells).
    pub const RAM_SIZE: usize = constants::DEFAULT_RAM_SIZE;

    /// Reset value of the stack pointer.
    pub const INITIAL_SP: u8 = constants::INITIAL_SP;
}

/// Errors raised while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration was not valid JSON for `Config`.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value was outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Root configuration structure containing all emulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use ls8_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.ram_size, 255);
/// assert_eq!(config.memory.initial_sp, 0xF4);
/// assert!(!config.general.trace_instructions);
/// ```
///
/// Deserializing a partial JSON document:
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_steps": 10000 },
///     "memory": { "ram_size": 256 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_steps, Some(10000));
/// assert_eq!(config.memory.ram_size, 256);
/// assert_eq!(config.memory.initial_sp, 0xF4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run settings
    pub general: GeneralConfig,
    /// Main memory configuration
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks that every value is in range.
    ///
    /// RAM must hold at least one full fetch window and at most every 8-bit
    /// address. The initial stack pointer may be at most `ram_size`: the stack is
    /// full-descending, so an SP equal to `ram_size` is an empty stack whose
    /// first push lands in the last cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.ram_size;
        if !(MIN_RAM_SIZE..=MAX_RAM_SIZE).contains(&size) {
            return Err(ConfigError::Invalid(format!(
                "memory.ram_size {size} outside {MIN_RAM_SIZE}..={MAX_RAM_SIZE}"
            )));
        }
        if self.memory.initial_sp as usize > size {
            return Err(ConfigError::Invalid(format!(
                "memory.initial_sp {:#04x} is past the end of a {size}-byte memory",
                self.memory.initial_sp
            )));
        }
        if self.general.max_steps == Some(0) {
            return Err(ConfigError::Invalid(
                "general.max_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a trace line (PC, fetch window, registers) before every instruction
    pub trace_instructions: bool,

    /// Stop after this many instructions. `None` runs until halt or fault.
    pub max_steps: Option<u64>,
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Number of addressable memory cells
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,

    /// Reset value of the stack pointer (R7)
    #[serde(default = "MemoryConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl MemoryConfig {
    /// Returns the reference RAM size.
    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    /// Returns the reference stack pointer reset value.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
            initial_sp: defaults::INITIAL_SP,
        }
    }
}
