//! LS-8 emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit instruction-set
//! architecture, with the following:
//! 1. **Core:** Register file, flags, and the fetch-decode-execute loop with its ALU.
//! 2. **Memory:** Flat, bounds-checked RAM and the `PRN` console.
//! 3. **ISA:** Opcode table, instruction byte layout, and decoding.
//! 4. **Simulation:** Program image loader, configuration, run policy, and statistics.
//!
//! # Example
//!
//! ```
//! use ls8_core::config::Config;
//! use ls8_core::sim::loader::parse_program;
//! use ls8_core::sim::Simulator;
//! use ls8_core::soc::devices::BufferConsole;
//!
//! let program = parse_program("10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n").unwrap();
//! let mut sim = Simulator::with_console(&Config::default(), BufferConsole::new());
//! let bytes = sim.load(&program).unwrap();
//! assert_eq!(bytes, 6);
//! sim.run().unwrap();
//! assert_eq!(sim.cpu.console().values(), &[8]);
//! ```

/// Common types and constants (errors, registers).
pub mod common;
/// Emulator configuration (defaults, structures, JSON loading).
pub mod config;
/// CPU core (machine state, execution loop, ALU, flags).
pub mod core;
/// Instruction set (opcodes, instruction layout, decode).
pub mod isa;
/// Program loader and simulator.
pub mod sim;
/// Memory and the console device.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds memory, registers, flags, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
