//! Instruction encoding and decoded instruction structures.
//!
//! Provides field extraction for LS-8 instruction bytes and the `Instruction`
//! enum the executor dispatches on.

use std::fmt;

use crate::common::constants::{OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT, SETS_PC_BIT};
use crate::core::units::alu::AluOp;
use crate::isa::opcodes;

/// Trait for extracting fields from an encoded instruction byte.
pub trait InstructionBits {
    /// Number of operand bytes that follow the instruction (bits 7-6).
    fn operand_count(&self) -> usize;

    /// Total instruction length in bytes, including the instruction byte.
    fn length(&self) -> usize {
        1 + self.operand_count()
    }

    /// Whether bit 4 marks this as an instruction that sets the PC itself.
    fn sets_pc(&self) -> bool;
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        ((self >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK) as usize
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        (self >> SETS_PC_BIT) & 1 == 1
    }
}

/// A decoded LS-8 instruction with its operands.
///
/// Register operands are raw operand bytes. They are range-checked when the
/// register file is accessed, not here, so that decoding never fails for a
/// defined opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `HLT`
    Hlt,
    /// `RET`
    Ret,
    /// `PUSH rA`
    Push {
        /// Source register.
        reg: usize,
    },
    /// `POP rA`
    Pop {
        /// Destination register.
        reg: usize,
    },
    /// `PRN rA`
    Prn {
        /// Register to print.
        reg: usize,
    },
    /// `CALL rA`
    Call {
        /// Register holding the subroutine address.
        reg: usize,
    },
    /// `JMP rA`
    Jmp {
        /// Register holding the target address.
        reg: usize,
    },
    /// `JEQ rA`
    Jeq {
        /// Register holding the target address.
        reg: usize,
    },
    /// `JNE rA`
    Jne {
        /// Register holding the target address.
        reg: usize,
    },
    /// `LDI rA, imm`
    Ldi {
        /// Destination register.
        reg: usize,
        /// Immediate value.
        imm: u8,
    },
    /// `CMP rA, rB`
    Cmp {
        /// Left-hand register.
        a: usize,
        /// Right-hand register.
        b: usize,
    },
    /// Register-register ALU operation: `rA <- rA op rB`.
    ///
    /// `NOT` is unary and carries `b == a`; the ALU ignores it.
    Alu {
        /// The ALU operation.
        op: AluOp,
        /// Destination and left-hand register.
        a: usize,
        /// Right-hand register.
        b: usize,
    },
}

impl Instruction {
    /// The instruction byte this instruction was decoded from.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Hlt => opcodes::HLT,
            Self::Ret => opcodes::RET,
            Self::Push { .. } => opcodes::PUSH,
            Self::Pop { .. } => opcodes::POP,
            Self::Prn { .. } => opcodes::PRN,
            Self::Call { .. } => opcodes::CALL,
            Self::Jmp { .. } => opcodes::JMP,
            Self::Jeq { .. } => opcodes::JEQ,
            Self::Jne { .. } => opcodes::JNE,
            Self::Ldi { .. } => opcodes::LDI,
            Self::Cmp { .. } => opcodes::CMP,
            Self::Alu { op, .. } => op.opcode(),
        }
    }

    /// Total length of the instruction in bytes (1, 2, or 3).
    pub fn length(&self) -> usize {
        self.opcode().length()
    }

    /// Assembly mnemonic, for traces and diagnostics.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Hlt => "HLT",
            Self::Ret => "RET",
            Self::Push { .. } => "PUSH",
            Self::Pop { .. } => "POP",
            Self::Prn { .. } => "PRN",
            Self::Call { .. } => "CALL",
            Self::Jmp { .. } => "JMP",
            Self::Jeq { .. } => "JEQ",
            Self::Jne { .. } => "JNE",
            Self::Ldi { .. } => "LDI",
            Self::Cmp { .. } => "CMP",
            Self::Alu { op, .. } => op.mnemonic(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.mnemonic();
        match *self {
            Self::Hlt | Self::Ret => write!(f, "{name}"),
            Self::Push { reg }
            | Self::Pop { reg }
            | Self::Prn { reg }
            | Self::Call { reg }
            | Self::Jmp { reg }
            | Self::Jeq { reg }
            | Self::Jne { reg }
            | Self::Alu {
                op: AluOp::Not,
                a: reg,
                ..
            } => write!(f, "{name} r{reg}"),
            Self::Ldi { reg, imm } => write!(f, "{name} r{reg}, {imm}"),
            Self::Cmp { a, b } | Self::Alu { a, b, .. } => write!(f, "{name} r{a}, r{b}"),
        }
    }
}
