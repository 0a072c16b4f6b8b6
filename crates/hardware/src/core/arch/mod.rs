//! LS-8 architectural state beyond the register file.
//!
//! Currently this is the flags register written by `CMP`.

/// Flags register (Equal / Greater / Less).
pub mod flags;

pub use flags::Flags;
