//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the instruction byte and both operand bytes at PC. All three
//!    addresses must be in range even when the instruction uses fewer operands.
//! 2. **Decode:** Maps the instruction byte to an `Instruction`, rejecting unknown bytes.
//! 3. **Execute:** Applies the instruction, then advances PC by its length unless the
//!    instruction byte carries the sets-PC bit (`CALL`, `RET`, `JMP`, `JEQ`, `JNE`).
//! 4. **Observability:** Emits a per-step trace line when tracing is enabled.

use std::fmt::Write as _;

use tracing::{debug, trace, warn};

use super::Cpu;
use crate::common::error::Fault;
use crate::core::units::alu::{Alu, AluError};
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::soc::traits::Console;

impl<C: Console> Cpu<C> {
    /// Executes one instruction.
    ///
    /// A fault halts the machine and is returned. `HLT` halts the machine and
    /// leaves PC on the `HLT` byte.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(inst))` - `inst` was executed.
    /// * `Ok(None)` - the machine was already halted; nothing happened.
    /// * `Err(fault)` - the step faulted and the machine is now halted.
    pub fn step(&mut self) -> Result<Option<Instruction>, Fault> {
        if self.halted {
            return Ok(None);
        }

        match self.execute_one() {
            Ok(inst) => Ok(Some(inst)),
            Err(fault) => {
                self.halted = true;
                warn!(pc = self.pc, %fault, "machine fault");
                Err(fault)
            }
        }
    }

    /// Runs until `HLT` or the first fault.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the program halted normally, otherwise the fault that stopped it.
    pub fn run(&mut self) -> Result<(), Fault> {
        self.stats.start_clock();
        while !self.halted {
            let _ = self.step()?;
        }
        debug!(
            pc = self.pc,
            retired = self.stats.instructions_retired,
            "halted"
        );
        Ok(())
    }

    fn execute_one(&mut self) -> Result<Instruction, Fault> {
        let pc = self.pc;
        let ir = self.ram.read(pc)?;
        let op_a = self.ram.read(pc + 1)?;
        let op_b = self.ram.read(pc + 2)?;

        if self.trace {
            self.trace_step(ir, op_a, op_b);
        }

        let inst = decode(ir, op_a, op_b, pc)?;
        let next_pc = pc + inst.length();
        let mut taken = false;

        match inst {
            Instruction::Hlt => {
                self.halted = true;
            }
            Instruction::Ldi { reg, imm } => {
                self.regs.write(reg, imm)?;
            }
            Instruction::Prn { reg } => {
                let val = self.regs.read(reg)?;
                self.console_mut().print_value(val)?;
            }
            Instruction::Push { reg } => {
                self.push_reg(reg)?;
            }
            Instruction::Pop { reg } => {
                self.pop_reg(reg)?;
            }
            Instruction::Call { reg } => {
                self.push(next_pc as u8)?;
                self.pc = self.regs.read(reg)? as usize;
            }
            Instruction::Ret => {
                self.pc = self.pop()? as usize;
            }
            Instruction::Jmp { reg } => {
                self.pc = self.regs.read(reg)? as usize;
            }
            Instruction::Jeq { reg } => {
                taken = self.fl.equal();
                self.branch(taken, reg, next_pc)?;
            }
            Instruction::Jne { reg } => {
                taken = !self.fl.equal();
                self.branch(taken, reg, next_pc)?;
            }
            Instruction::Cmp { a, b } => {
                self.fl = Alu::compare(self.regs.read(a)?, self.regs.read(b)?);
            }
            Instruction::Alu { op, a, b } => {
                let result = Alu::execute(op, self.regs.read(a)?, self.regs.read(b)?)
                    .map_err(|err| match err {
                        AluError::DivideByZero => Fault::DivideByZero { pc },
                        AluError::ModuloByZero => Fault::ModuloByZero { pc },
                    })?;
                self.regs.write(a, result)?;
            }
        }

        // Instructions with the sets-PC bit have already moved PC; HLT stays put.
        if !ir.sets_pc() && !self.halted {
            self.pc = next_pc;
        }

        self.stats.record(&inst, taken);
        Ok(inst)
    }

    /// Conditional jump: PC takes the value in `reg` when `taken`, else falls through.
    ///
    /// The target register is only read when the jump is taken.
    fn branch(&mut self, taken: bool, reg: usize, next_pc: usize) -> Result<(), Fault> {
        self.pc = if taken {
            self.regs.read(reg)? as usize
        } else {
            next_pc
        };
        Ok(())
    }

    /// Formats the trace line for the instruction about to execute.
    ///
    /// Layout: `TRACE: PC | IR A B | R0 R1 R2 R3 R4 R5 R6 R7`, all in hex.
    pub fn trace_line(&self, ir: u8, op_a: u8, op_b: u8) -> String {
        let mut line = format!(
            "TRACE: {:02X} | {ir:02X} {op_a:02X} {op_b:02X} |",
            self.pc
        );
        for val in self.regs.snapshot() {
            let _ = write!(line, " {val:02X}");
        }
        line
    }

    fn trace_step(&self, ir: u8, op_a: u8, op_b: u8) {
        trace!(target: "ls8::trace", "{}", self.trace_line(ir, op_a, op_b));
    }
}
