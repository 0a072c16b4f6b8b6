//! Flags Register (FL).
//!
//! Holds the result of the most recent `CMP`. Only `CMP` writes it and only
//! `JEQ`/`JNE` read it. Bit layout: `00000LGE`.

use std::cmp::Ordering;
use std::fmt;

/// Equal flag (bit 0).
pub const FLAG_EQUAL: u8 = 0b0000_0001;
/// Greater-than flag (bit 1).
pub const FLAG_GREATER: u8 = 0b0000_0010;
/// Less-than flag (bit 2).
pub const FLAG_LESS: u8 = 0b0000_0100;

/// The flags register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Creates a flags register from its raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Flags produced by a comparison; exactly one bit is set.
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self(FLAG_LESS),
            Ordering::Greater => Self(FLAG_GREATER),
            Ordering::Equal => Self(FLAG_EQUAL),
        }
    }

    /// Raw register bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether the Equal flag is set.
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// Whether the Greater-than flag is set.
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// Whether the Less-than flag is set.
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
