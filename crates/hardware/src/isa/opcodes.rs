//! LS-8 Opcodes.
//!
//! Defines the instruction bytes of the LS-8. Each byte is laid out as
//! `AABCDDDD`: `AA` is the operand count, `B` marks an ALU operation, `C` marks an
//! instruction that sets the PC itself, and `DDDD` identifies the instruction.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Print a register as a decimal integer.
pub const PRN: u8 = 0b0100_0111;

/// Call the subroutine at the address held in a register.
pub const CALL: u8 = 0b0101_0000;

/// Jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the Equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the Equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Bitwise complement.
pub const NOT: u8 = 0b0110_1001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Add (wrapping).
pub const ADD: u8 = 0b1010_0000;

/// Subtract (wrapping).
pub const SUB: u8 = 0b1010_0001;

/// Multiply (wrapping).
pub const MUL: u8 = 0b1010_0010;

/// Unsigned integer divide.
pub const DIV: u8 = 0b1010_0011;

/// Unsigned remainder.
pub const MOD: u8 = 0b1010_0100;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// Bitwise AND.
pub const AND: u8 = 0b1010_1000;

/// Bitwise OR.
pub const OR: u8 = 0b1010_1010;

/// Bitwise XOR.
pub const XOR: u8 = 0b1010_1011;

/// Shift left.
pub const SHL: u8 = 0b1010_1100;

/// Logical shift right.
pub const SHR: u8 = 0b1010_1101;
