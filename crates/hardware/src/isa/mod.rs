//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, instruction byte layout, and decoding logic.

/// Register name constants (IM, IS, SP).
pub mod abi;

/// Instruction decoding.
pub mod decode;

/// Instruction byte fields and the decoded `Instruction` enum.
pub mod instruction;

/// Instruction byte values.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Instruction, InstructionBits};
