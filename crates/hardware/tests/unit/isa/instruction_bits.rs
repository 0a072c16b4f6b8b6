//! # Instruction Byte Field Tests
//!
//! Every opcode's `AABCDDDD` fields must agree with how the executor treats it.

use ls8_core::isa::InstructionBits;
use ls8_core::isa::opcodes::*;
use rstest::rstest;

#[rstest]
#[case(HLT, 1)]
#[case(RET, 1)]
#[case(PUSH, 2)]
#[case(POP, 2)]
#[case(PRN, 2)]
#[case(CALL, 2)]
#[case(JMP, 2)]
#[case(JEQ, 2)]
#[case(JNE, 2)]
#[case(NOT, 2)]
#[case(LDI, 3)]
#[case(ADD, 3)]
#[case(SUB, 3)]
#[case(MUL, 3)]
#[case(DIV, 3)]
#[case(MOD, 3)]
#[case(CMP, 3)]
#[case(AND, 3)]
#[case(OR, 3)]
#[case(XOR, 3)]
#[case(SHL, 3)]
#[case(SHR, 3)]
fn test_length_from_operand_count(#[case] opcode: u8, #[case] length: usize) {
    assert_eq!(opcode.length(), length);
    assert_eq!(opcode.operand_count(), length - 1);
}

#[test]
fn test_sets_pc_bit() {
    for op in [RET, CALL, JMP, JEQ, JNE] {
        assert!(op.sets_pc(), "{op:#04x} should set PC");
    }
    for op in [HLT, PUSH, POP, PRN, LDI, ADD, CMP, NOT] {
        assert!(!op.sets_pc(), "{op:#04x} should not set PC");
    }
}
