//! Common utilities and types used throughout the LS-8 emulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Memory sizes, register counts, and instruction layout.
//! 2. **Error Handling:** Runtime faults, load errors, and exit status mapping.
//! 3. **Register Management:** The bounds-checked register file.

/// Machine-wide constants.
pub mod constants;

/// Fault and load error definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{AddressSpace, Fault, LoadError};
pub use reg::RegisterFile;
