//! Output devices.
//!
//! The LS-8 core has one device: the console that `PRN` prints to.

/// Console implementations (stdout, generic writer, in-memory buffer).
pub mod console;

pub use console::{BufferConsole, StdoutConsole, WriterConsole};
