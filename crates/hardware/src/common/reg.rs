//! Register File.
//!
//! This module provides the `RegisterFile` struct, the eight 8-bit general-purpose
//! registers of the LS-8. It provides:
//! 1. **Storage:** Eight registers `R0`-`R7`, with `R7` doubling as the stack pointer.
//! 2. **Bounds Checking:** Register indices come straight from operand bytes, so every
//!    access is checked and an index of 8 or more raises a fault.
//! 3. **Observability:** A dump helper for diagnostics after a fault.
//!
//! There is no write protection. Programs may overwrite `SP`, `IM`, and `IS` freely.

use std::fmt;

use crate::common::constants::{INITIAL_SP, NUM_REGISTERS};
use crate::common::error::Fault;
use crate::isa::abi;

/// General-purpose register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl RegisterFile {
    /// Creates a register file with every register zeroed except `SP`.
    ///
    /// # Arguments
    ///
    /// * `initial_sp` - Reset value of the stack pointer.
    pub fn new(initial_sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[abi::REG_SP] = initial_sp;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Returns
    ///
    /// The register value, or an out-of-range fault for an index of 8 or more.
    #[inline]
    pub fn read(&self, idx: usize) -> Result<u8, Fault> {
        self.regs.get(idx).copied().ok_or(Fault::register(idx))
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The value to store.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Fault> {
        let slot = self.regs.get_mut(idx).ok_or(Fault::register(idx))?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer value.
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[abi::REG_SP]
    }

    /// Overwrites the stack pointer.
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[abi::REG_SP] = val;
    }

    /// Returns a copy of all eight registers.
    pub const fn snapshot(&self) -> [u8; NUM_REGISTERS] {
        self.regs
    }

    /// Dumps the register file to stderr, four registers per line.
    pub fn dump(&self) {
        eprintln!("{self}");
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(INITIAL_SP)
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..NUM_REGISTERS).step_by(4) {
            if row != 0 {
                writeln!(f)?;
            }
            for i in row..row + 4 {
                write!(f, "{:<3}={:#04x} ", abi::REG_NAMES[i], self.regs[i])?;
            }
        }
        Ok(())
    }
}
