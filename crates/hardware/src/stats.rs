//! Run statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Throughput:** Retired instructions and host time since the run started.
//! 2. **Instruction mix:** Counts by category (ALU, compare, load, stack, control, I/O).
//! 3. **Control flow:** Conditional branches seen and taken, subroutine calls.
//!
//! The report is written to stderr so it never mixes with `PRN` output.

use std::fmt;
use std::time::Instant;

use crate::isa::instruction::Instruction;

/// Run statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// Count of ALU (arithmetic, logic, shift) instructions.
    pub inst_alu: u64,
    /// Count of `CMP` instructions.
    pub inst_cmp: u64,
    /// Count of `LDI` instructions.
    pub inst_load: u64,
    /// Count of `PUSH`/`POP` instructions.
    pub inst_stack: u64,
    /// Count of `CALL`/`RET`/`JMP`/`JEQ`/`JNE` instructions.
    pub inst_control: u64,
    /// Count of `PRN` instructions.
    pub inst_io: u64,

    /// Conditional branches (`JEQ`/`JNE`) executed.
    pub branches: u64,
    /// Conditional branches that jumped.
    pub branches_taken: u64,
    /// Subroutine calls.
    pub calls: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_cmp: 0,
            inst_load: 0,
            inst_stack: 0,
            inst_control: 0,
            inst_io: 0,
            branches: 0,
            branches_taken: 0,
            calls: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction that completed.
    /// * `taken` - For `JEQ`/`JNE`, whether the jump happened; ignored otherwise.
    pub const fn record(&mut self, inst: &Instruction, taken: bool) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Alu { .. } => self.inst_alu += 1,
            Instruction::Cmp { .. } => self.inst_cmp += 1,
            Instruction::Ldi { .. } => self.inst_load += 1,
            Instruction::Push { .. } | Instruction::Pop { .. } => self.inst_stack += 1,
            Instruction::Prn { .. } => self.inst_io += 1,
            Instruction::Call { .. } => {
                self.inst_control += 1;
                self.calls += 1;
            }
            Instruction::Jeq { .. } | Instruction::Jne { .. } => {
                self.inst_control += 1;
                self.branches += 1;
                if taken {
                    self.branches_taken += 1;
                }
            }
            Instruction::Ret | Instruction::Jmp { .. } => self.inst_control += 1,
            Instruction::Hlt => {}
        }
    }

    /// Restarts the host clock. Called when a run begins so load time is excluded.
    pub fn start_clock(&mut self) {
        self.start_time = Instant::now();
    }

    /// Host seconds since the clock was last started.
    pub fn host_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Prints the full report to stderr.
    pub fn print(&self) {
        eprint!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.host_seconds();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let kips = if seconds > 0.0 {
            (self.instructions_retired as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        writeln!(f, "==========================================================")?;
        writeln!(f, "LS-8 RUN STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_kips                 {kips:.2}")?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.cmp", self.inst_cmp),
            ("op.load", self.inst_load),
            ("op.stack", self.inst_stack),
            ("op.control", self.inst_control),
            ("op.io", self.inst_io),
        ] {
            writeln!(f, "  {name:<22} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  branch.count           {}", self.branches)?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "  call.count             {}", self.calls)?;
        writeln!(f, "==========================================================")
    }
}
