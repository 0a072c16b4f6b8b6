//! Memory access and stack operations.
//!
//! The stack is full-descending: SP is decremented before a push writes and
//! incremented after a pop reads. SP arithmetic wraps in 8 bits, so pushing
//! with SP at 0 targets address 0xFF and faults on the reference 255-byte
//! memory. `CALL`/`RET` and `PUSH`/`POP` share the region with no separation.

use crate::common::error::Fault;
use crate::soc::traits::Console;

use super::Cpu;

impl<C: Console> Cpu<C> {
    /// Reads one byte of memory.
    #[inline]
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.ram.read(addr)
    }

    /// Writes one byte of memory.
    #[inline]
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        self.ram.write(addr, val)
    }

    /// Pushes the value of register `reg`.
    ///
    /// SP is decremented first and the register is read afterwards, so
    /// `PUSH R7` stores the already-decremented stack pointer.
    pub fn push_reg(&mut self, reg: usize) -> Result<(), Fault> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        let val = self.regs.read(reg)?;
        self.ram.write(sp as usize, val)
    }

    /// Pops the top of the stack into register `reg`.
    ///
    /// The register is written first and SP incremented afterwards, so
    /// `POP R7` leaves SP one past the popped value.
    pub fn pop_reg(&mut self, reg: usize) -> Result<(), Fault> {
        let val = self.ram.read(self.regs.sp() as usize)?;
        self.regs.write(reg, val)?;
        self.regs.set_sp(self.regs.sp().wrapping_add(1));
        Ok(())
    }

    /// Pushes a raw byte (used by `CALL` for the return address).
    pub fn push(&mut self, val: u8) -> Result<(), Fault> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram.write(sp as usize, val)
    }

    /// Pops a raw byte (used by `RET` for the return address).
    pub fn pop(&mut self) -> Result<u8, Fault> {
        let sp = self.regs.sp();
        let val = self.ram.read(sp as usize)?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(val)
    }
}
