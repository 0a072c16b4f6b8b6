//! Machine components outside the CPU core.
//!
//! This module organizes main memory and the console device `PRN` writes to.

/// Console implementations.
pub mod devices;

/// Main memory.
pub mod memory;

/// Console trait definition.
pub mod traits;

pub use memory::Ram;
pub use traits::Console;
