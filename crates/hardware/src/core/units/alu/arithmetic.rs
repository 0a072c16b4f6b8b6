//! ALU arithmetic operations.
//!
//! Implements 8-bit addition, subtraction, multiplication, division, and
//! remainder. Add, subtract, and multiply wrap modulo 256. Division and
//! remainder are unsigned and fault on a zero divisor.

use super::AluError;

/// `a + b`, wrapping.
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping.
#[inline]
pub const fn sub(a: u8, b: u8) -> u8 {
    a.wrapping_sub(b)
}

/// `a * b`, wrapping.
#[inline]
pub const fn mul(a: u8, b: u8) -> u8 {
    a.wrapping_mul(b)
}

/// Unsigned division.
///
/// # Arguments
///
/// * `a` - Dividend.
/// * `b` - Divisor.
///
/// # Returns
///
/// The truncated quotient, or `AluError::DivideByZero` when `b` is 0.
#[inline]
pub fn div(a: u8, b: u8) -> Result<u8, AluError> {
    a.checked_div(b).ok_or(AluError::DivideByZero)
}

/// Unsigned remainder, or `AluError::ModuloByZero` when `b` is 0.
#[inline]
pub fn rem(a: u8, b: u8) -> Result<u8, AluError> {
    a.checked_rem(b).ok_or(AluError::ModuloByZero)
}
