//! Core processor implementation.
//!
//! This module contains the CPU (machine state plus the fetch-decode-execute
//! loop), the flags register, and the ALU.

/// Architectural state (flags register).
pub mod arch;

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
