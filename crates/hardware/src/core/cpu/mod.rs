//! LS-8 CPU.
//!
//! This module defines the `Cpu` struct, which owns the complete machine state.
//! It is organized into the following submodules:
//! 1. **Execution:** The fetch-decode-execute loop (`step`, `run`).
//! 2. **Memory:** Memory access and stack helpers (`read`, `write`, `push`, `pop`).
//!
//! Everything lives in one explicitly owned value. There is no global state;
//! callers pass the `Cpu` by reference to everything that touches it.

/// Fetch-decode-execute loop.
pub mod execution;

/// Memory access and stack operations.
pub mod memory;

use tracing::debug;

use crate::common::constants::INITIAL_PC;
use crate::common::error::LoadError;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::arch::flags::Flags;
use crate::soc::devices::StdoutConsole;
use crate::soc::memory::Ram;
use crate::soc::traits::Console;
use crate::stats::SimStats;

/// The LS-8 machine: memory, registers, PC, flags, and the halted latch.
///
/// Generic over the console `PRN` prints to. The default prints to stdout.
#[derive(Debug)]
pub struct Cpu<C = StdoutConsole> {
    /// Main memory.
    pub ram: Ram,
    /// General-purpose registers (R7 is SP).
    pub regs: RegisterFile,
    /// Address of the next instruction to fetch.
    pub pc: usize,
    /// Flags register, written only by `CMP`.
    pub fl: Flags,
    /// Set by `HLT` or any fault; nothing executes once it is set.
    pub halted: bool,
    /// Emit a trace line before each instruction.
    pub trace: bool,
    /// Run statistics.
    pub stats: SimStats,
    console: C,
}

impl Cpu<StdoutConsole> {
    /// Creates a CPU that prints to stdout.
    ///
    /// # Arguments
    ///
    /// * `config` - The emulator configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, StdoutConsole)
    }
}

impl Default for Cpu<StdoutConsole> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl<C: Console> Cpu<C> {
    /// Creates a CPU that prints to the given console.
    ///
    /// Memory and registers are zeroed, except SP which takes
    /// `config.memory.initial_sp`. PC starts at 0.
    ///
    /// # Arguments
    ///
    /// * `config` - The emulator configuration.
    /// * `console` - Sink for `PRN` output.
    pub fn with_console(config: &Config, console: C) -> Self {
        Self {
            ram: Ram::new(config.memory.ram_size),
            regs: RegisterFile::new(config.memory.initial_sp),
            pc: INITIAL_PC,
            fl: Flags::default(),
            halted: false,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            console,
        }
    }

    /// Places a program image in memory starting at address 0.
    ///
    /// Only memory is modified. A program larger than memory is rejected
    /// before anything is written.
    ///
    /// # Arguments
    ///
    /// * `program` - The program bytes.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded.
    pub fn load(&mut self, program: &[u8]) -> Result<usize, LoadError> {
        let capacity = self.ram.len();
        self.ram
            .load_at(0, program)
            .map_err(|_| LoadError::ProgramTooLarge {
                len: program.len(),
                capacity,
            })?;
        debug!(bytes = program.len(), capacity, "program loaded");
        Ok(program.len())
    }

    /// The console `PRN` writes to.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Mutable access to the console.
    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Consumes the CPU and returns its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Dumps PC, flags, and registers to stderr.
    pub fn dump_state(&self) {
        eprintln!("pc={:#04x} fl={} halted={}", self.pc, self.fl, self.halted);
        self.regs.dump();
    }
}
