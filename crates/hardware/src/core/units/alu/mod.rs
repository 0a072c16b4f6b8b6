//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit ALU behind every register-register
//! instruction. It is a pure function of `(op, a, b)`: it never touches
//! the register file, so a faulting operation leaves every register intact.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod
//! - [`logic`]:      And, Or, Xor, Not, and the CMP flag computation
//! - [`shifts`]:     Shl, Shr

/// Integer arithmetic operations (add, subtract, multiply, divide, modulo).
pub mod arithmetic;

/// Bitwise logical operations and comparison.
pub mod logic;

/// Shift operations (shl, shr).
pub mod shifts;

use thiserror::Error;

use crate::core::arch::flags::Flags;
use crate::isa::opcodes;

/// Register-register ALU operation selected by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Unsigned division.
    Div,
    /// Unsigned remainder.
    Mod,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise complement of `a`; `b` is ignored.
    Not,
    /// Shift left.
    Shl,
    /// Logical shift right.
    Shr,
}

impl AluOp {
    /// Every ALU operation.
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Not,
        Self::Shl,
        Self::Shr,
    ];

    /// The instruction byte that encodes this operation.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::Add => opcodes::ADD,
            Self::Sub => opcodes::SUB,
            Self::Mul => opcodes::MUL,
            Self::Div => opcodes::DIV,
            Self::Mod => opcodes::MOD,
            Self::And => opcodes::AND,
            Self::Or => opcodes::OR,
            Self::Xor => opcodes::XOR,
            Self::Not => opcodes::NOT,
            Self::Shl => opcodes::SHL,
            Self::Shr => opcodes::SHR,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Not => "NOT",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }
}

/// Faults the ALU can raise. The CPU attaches the faulting PC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AluError {
    /// `DIV` by zero.
    #[error("divide by zero")]
    DivideByZero,
    /// `MOD` by zero.
    #[error("modulo by zero")]
    ModuloByZero,
}

/// Arithmetic Logic Unit (ALU) for 8-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Every operation maps to exactly one submodule function.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand, also the value `NOT` complements
    /// * `b`  - Second operand, also used as the shift distance
    ///
    /// # Returns
    ///
    /// The 8-bit result, or an error for a zero divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluError, AluOp};
    ///
    /// // Addition wraps modulo 256
    /// assert_eq!(Alu::execute(AluOp::Add, 255, 2), Ok(1));
    ///
    /// // Shifting every bit out yields zero
    /// assert_eq!(Alu::execute(AluOp::Shl, 0xFF, 8), Ok(0));
    ///
    /// // Division by zero is a fault, not a silent no-op
    /// assert_eq!(Alu::execute(AluOp::Div, 10, 0), Err(AluError::DivideByZero));
    /// ```
    pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, AluError> {
        match op {
            AluOp::Add => Ok(arithmetic::add(a, b)),
            AluOp::Sub => Ok(arithmetic::sub(a, b)),
            AluOp::Mul => Ok(arithmetic::mul(a, b)),
            AluOp::Div => arithmetic::div(a, b),
            AluOp::Mod => arithmetic::rem(a, b),

            AluOp::And => Ok(logic::and(a, b)),
            AluOp::Or => Ok(logic::or(a, b)),
            AluOp::Xor => Ok(logic::xor(a, b)),
            AluOp::Not => Ok(logic::not(a)),

            AluOp::Shl => Ok(shifts::shl(a, b)),
            AluOp::Shr => Ok(shifts::shr(a, b)),
        }
    }

    /// Compares two values for `CMP`.
    ///
    /// Neither operand is modified. Exactly one of Equal, Greater, or Less is set.
    pub const fn compare(a: u8, b: u8) -> Flags {
        logic::compare(a, b)
    }
}
