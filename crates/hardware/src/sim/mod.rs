//! Simulation utilities and program loading.
//!
//! Provides the program image loader and the simulator that drives a CPU
//! from a loaded image to completion.

pub mod loader;

pub mod simulator;

pub use simulator::{SimError, Simulator};
