//! Fault and error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Runtime Faults:** Everything that can stop the fetch-decode-execute loop.
//! 2. **Load Errors:** Failures while reading or placing a program image.
//! 3. **Exit Codes:** A stable mapping from each fault to a process exit status.
//!
//! No fault is recoverable. Once a `Fault` is raised the machine is halted.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit status for a clean `HLT`.
pub const EXIT_HALT: i32 = 0;

/// Process exit status for a program that failed to load or a bad configuration.
pub const EXIT_LOAD_ERROR: i32 = 1;

/// Process exit status for an unknown opcode.
pub const EXIT_UNKNOWN_OPCODE: i32 = 2;

/// Process exit status for any other runtime fault.
pub const EXIT_FAULT: i32 = 3;

/// Process exit status when the configured step limit is reached.
pub const EXIT_STEP_LIMIT: i32 = 4;

/// The storage an out-of-range access was aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressSpace {
    /// Main memory; the address is a byte address.
    Memory,
    /// The register file; the address is a register index.
    Register,
}

impl fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory address"),
            Self::Register => write!(f, "register index"),
        }
    }
}

/// Runtime faults raised while executing a program.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// A memory address or register index outside the valid bounds.
    #[error("out-of-range {space} {addr:#04x}")]
    OutOfRangeAccess {
        /// Which storage was addressed.
        space: AddressSpace,
        /// The offending address or register index.
        addr: usize,
    },

    /// `DIV` with a zero divisor.
    #[error("divide by zero at pc {pc:#04x}")]
    DivideByZero {
        /// Address of the faulting instruction.
        pc: usize,
    },

    /// `MOD` with a zero divisor.
    #[error("modulo by zero at pc {pc:#04x}")]
    ModuloByZero {
        /// Address of the faulting instruction.
        pc: usize,
    },

    /// The fetched byte is not a defined instruction.
    #[error("unknown opcode {opcode:#04x} ({opcode:#010b}) at pc {pc:#04x}")]
    UnknownOpcode {
        /// The instruction byte that failed to decode.
        opcode: u8,
        /// Address the byte was fetched from.
        pc: usize,
    },

    /// The console rejected a `PRN` write.
    #[error("console write failed: {0}")]
    Console(String),
}

impl Fault {
    /// Returns the process exit status for this fault.
    ///
    /// Unknown opcodes get their own status so they can be told apart from
    /// both a clean halt and the other runtime faults.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownOpcode { .. } => EXIT_UNKNOWN_OPCODE,
            Self::OutOfRangeAccess { .. }
            | Self::DivideByZero { .. }
            | Self::ModuloByZero { .. }
            | Self::Console(_) => EXIT_FAULT,
        }
    }

    /// Shorthand for an out-of-range memory access.
    pub const fn memory(addr: usize) -> Self {
        Self::OutOfRangeAccess {
            space: AddressSpace::Memory,
            addr,
        }
    }

    /// Shorthand for an out-of-range register index.
    pub const fn register(idx: usize) -> Self {
        Self::OutOfRangeAccess {
            space: AddressSpace::Register,
            addr: idx,
        }
    }
}

impl From<io::Error> for Fault {
    fn from(err: io::Error) -> Self {
        Self::Console(err.to_string())
    }
}

/// Errors raised while reading, parsing, or placing a program image.
///
/// A load error always happens before execution starts; the machine never
/// runs a partially loaded program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line did not hold a base-2 literal in the range 0-255.
    #[error("line {line}: invalid binary literal '{text}'")]
    InvalidLiteral {
        /// 1-based line number in the program image.
        line: usize,
        /// The offending text, with comments and whitespace stripped.
        text: String,
    },

    /// The program holds more bytes than memory has cells.
    #[error("program is {len} bytes but memory holds only {capacity}")]
    ProgramTooLarge {
        /// Number of bytes in the program.
        len: usize,
        /// Number of memory cells.
        capacity: usize,
    },
}

impl LoadError {
    /// Returns the process exit status for a load failure.
    pub const fn exit_code(&self) -> i32 {
        EXIT_LOAD_ERROR
    }
}
