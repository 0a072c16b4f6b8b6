//! Simulator: owns the CPU and drives it to completion.
//!
//! Adds the run-level policy the bare CPU does not have: an optional step
//! limit for programs that never halt.

use thiserror::Error;
use tracing::{info, warn};

use crate::common::error::{EXIT_HALT, EXIT_STEP_LIMIT, Fault, LoadError};
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::devices::StdoutConsole;
use crate::soc::traits::Console;

/// Reasons a simulation run ends without a clean halt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The CPU faulted.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// The configured step limit was reached before the program halted.
    #[error("step limit of {steps} instructions reached")]
    StepLimit {
        /// Number of instructions executed.
        steps: u64,
    },
}

impl SimError {
    /// Returns the process exit status for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Fault(fault) => fault.exit_code(),
            Self::StepLimit { .. } => EXIT_STEP_LIMIT,
        }
    }
}

/// Top-level simulator: CPU plus run policy.
#[derive(Debug)]
pub struct Simulator<C = StdoutConsole> {
    /// The machine being driven.
    pub cpu: Cpu<C>,
    max_steps: Option<u64>,
}

impl Simulator<StdoutConsole> {
    /// Creates a simulator whose CPU prints to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, StdoutConsole)
    }

    /// Exit status for a finished run: `EXIT_HALT` on success, otherwise the
    /// error's own status.
    pub const fn exit_code(result: &Result<(), SimError>) -> i32 {
        match result {
            Ok(()) => EXIT_HALT,
            Err(err) => err.exit_code(),
        }
    }
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator whose CPU prints to `console`.
    pub fn with_console(config: &Config, console: C) -> Self {
        Self {
            cpu: Cpu::with_console(config, console),
            max_steps: config.general.max_steps,
        }
    }

    /// Loads a program into the CPU's memory from address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<usize, LoadError> {
        self.cpu.load(program)
    }

    /// Runs until `HLT`, a fault, or the step limit.
    ///
    /// Without a step limit this is exactly [`Cpu::run`].
    pub fn run(&mut self) -> Result<(), SimError> {
        let Some(limit) = self.max_steps else {
            self.cpu.run()?;
            info!(
                steps = self.cpu.stats.instructions_retired,
                pc = self.cpu.pc,
                "program halted"
            );
            return Ok(());
        };

        self.cpu.stats.start_clock();
        let mut steps: u64 = 0;
        while !self.cpu.halted {
            if steps >= limit {
                warn!(steps, pc = self.cpu.pc, "step limit reached");
                return Err(SimError::StepLimit { steps });
            }
            let _ = self.cpu.step()?;
            steps += 1;
        }
        info!(steps, pc = self.cpu.pc, "program halted");
        Ok(())
    }
}
