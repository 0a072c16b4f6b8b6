//! ALU shift operations.
//!
//! Implements shift-left (SHL) and logical shift-right (SHR) on 8-bit values.
//!
//! The shift distance is the full value of `rB`. A distance of 8 or more
//! shifts every bit out and yields 0; the distance is never masked.

/// Shifts `a` left by `distance` bits.
///
/// # Arguments
///
/// * `a`        - The value to be shifted.
/// * `distance` - The shift distance (0-255).
#[inline]
pub fn shl(a: u8, distance: u8) -> u8 {
    a.checked_shl(u32::from(distance)).unwrap_or(0)
}

/// Shifts `a` right by `distance` bits, filling with zeros.
#[inline]
pub fn shr(a: u8, distance: u8) -> u8 {
    a.checked_shr(u32::from(distance)).unwrap_or(0)
}
