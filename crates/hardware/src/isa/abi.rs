//! LS-8 register name constants.
//!
//! Defines the reserved register indices and the printable register names
//! used in traces and register dumps.

/// Register R5 (interrupt mask, IM). Reserved; nothing in the core reads it.
pub const REG_IM: usize = 5;
/// Register R6 (interrupt status, IS). Reserved; nothing in the core reads it.
pub const REG_IS: usize = 6;
/// Register R7 (stack pointer, SP).
pub const REG_SP: usize = 7;

/// Printable names for R0-R7.
pub const REG_NAMES: [&str; 8] = ["r0", "r1", "r2", "r3", "r4", "im", "is", "sp"];
