//! Execution units.
//!
//! The LS-8 has a single functional unit, the ALU.

/// Arithmetic Logic Unit for 8-bit integer operations.
pub mod alu;
