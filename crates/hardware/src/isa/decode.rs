//! LS-8 Instruction Decoder.
//!
//! Turns a fetched instruction byte and its two operand bytes into an
//! `Instruction`. Operand bytes past the instruction's length are fetched
//! unconditionally by the CPU and simply ignored here.

use crate::common::error::Fault;
use crate::core::units::alu::AluOp;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes;

/// Decodes one instruction.
///
/// # Arguments
///
/// * `ir` - The instruction byte.
/// * `op_a` - The first operand byte (register index or ignored).
/// * `op_b` - The second operand byte (register index, immediate, or ignored).
/// * `pc` - Address of `ir`, used only to report an unknown opcode.
///
/// # Returns
///
/// The decoded instruction, or `Fault::UnknownOpcode` when `ir` is not defined.
pub fn decode(ir: u8, op_a: u8, op_b: u8, pc: usize) -> Result<Instruction, Fault> {
    let a = op_a as usize;
    let b = op_b as usize;

    let alu = |op| Instruction::Alu { op, a, b };

    let inst = match ir {
        opcodes::HLT => Instruction::Hlt,
        opcodes::RET => Instruction::Ret,
        opcodes::PUSH => Instruction::Push { reg: a },
        opcodes::POP => Instruction::Pop { reg: a },
        opcodes::PRN => Instruction::Prn { reg: a },
        opcodes::CALL => Instruction::Call { reg: a },
        opcodes::JMP => Instruction::Jmp { reg: a },
        opcodes::JEQ => Instruction::Jeq { reg: a },
        opcodes::JNE => Instruction::Jne { reg: a },
        opcodes::LDI => Instruction::Ldi { reg: a, imm: op_b },
        opcodes::CMP => Instruction::Cmp { a, b },
        opcodes::NOT => Instruction::Alu {
            op: AluOp::Not,
            a,
            b: a,
        },
        opcodes::ADD => alu(AluOp::Add),
        opcodes::SUB => alu(AluOp::Sub),
        opcodes::MUL => alu(AluOp::Mul),
        opcodes::DIV => alu(AluOp::Div),
        opcodes::MOD => alu(AluOp::Mod),
        opcodes::AND => alu(AluOp::And),
        opcodes::OR => alu(AluOp::Or),
        opcodes::XOR => alu(AluOp::Xor),
        opcodes::SHL => alu(AluOp::Shl),
        opcodes::SHR => alu(AluOp::Shr),
        opcode => return Err(Fault::UnknownOpcode { opcode, pc }),
    };

    Ok(inst)
}
