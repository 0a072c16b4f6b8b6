//! Global System Constants.
//!
//! This module defines machine-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Default RAM size and the bounds a configuration may choose from.
//! 2. **Register Constants:** Register file width and the reset value of the stack pointer.
//! 3. **Instruction Constants:** Fetch window and opcode field layout.

/// Default RAM size in bytes.
///
/// The reference machine allocates 255 cells rather than a full 256-byte page,
/// so address `0xFF` is out of range by default.
pub const DEFAULT_RAM_SIZE: usize = 0xFF;

/// Smallest RAM size accepted by the configuration (one full fetch window).
pub const MIN_RAM_SIZE: usize = FETCH_WINDOW;

/// Largest RAM size accepted by the configuration (every 8-bit address).
pub const MAX_RAM_SIZE: usize = 0x100;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Reset value of the stack pointer (an empty, downward-growing stack).
pub const INITIAL_SP: u8 = 0xF4;

/// Reset value of the program counter.
pub const INITIAL_PC: usize = 0;

/// Number of bytes read on every fetch: the instruction byte plus two operand bytes.
pub const FETCH_WINDOW: usize = 3;

/// Bit shift for the operand count field (bits 7-6) of an instruction byte.
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit mask for the operand count field after shifting.
pub const OPERAND_COUNT_MASK: u8 = 0b11;

/// Bit position of the "sets PC" marker (bit 4) of an instruction byte.
pub const SETS_PC_BIT: u8 = 4;
