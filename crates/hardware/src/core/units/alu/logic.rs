//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, and NOT over the full 8-bit pattern,
//! and the three-way comparison used by `CMP`.

use std::cmp::Ordering;

use crate::core::arch::flags::Flags;

/// Bitwise AND.
#[inline]
pub const fn and(a: u8, b: u8) -> u8 {
    a & b
}

/// Bitwise OR.
#[inline]
pub const fn or(a: u8, b: u8) -> u8 {
    a | b
}

/// Bitwise XOR.
#[inline]
pub const fn xor(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Bitwise complement.
#[inline]
pub const fn not(a: u8) -> u8 {
    !a
}

/// Computes the flags for `CMP a, b`.
pub const fn compare(a: u8, b: u8) -> Flags {
    let ordering = if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    };
    Flags::from_ordering(ordering)
}
