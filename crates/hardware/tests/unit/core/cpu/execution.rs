//! # CPU Execution Tests
//!
//! Instruction semantics, PC advancement, halting, and faults, driven through
//! hand-assembled programs.

use ls8_core::common::error::Fault;
use ls8_core::isa::{Instruction, InstructionBits};
use ls8_core::isa::opcodes::{ADD, DIV, JMP, MOD, SHL, SHR};
use ls8_core::sim::SimError;
use rstest::rstest;

use crate::common::builder::*;
use crate::common::harness::TestContext;

fn ctx(image: &[Vec<u8>]) -> TestContext {
    TestContext::new().load_program(&program(image))
}

// ─── Halting ─────────────────────────────────────────────────────────────────

#[test]
fn test_hlt_leaves_pc_on_hlt() {
    let mut t = ctx(&[ldi(0, 1), ldi(1, 2), hlt()]);
    t.run().unwrap();
    assert!(t.cpu().halted);
    assert_eq!(t.pc(), 6);
}

#[test]
fn test_step_after_halt_is_noop() {
    let mut t = ctx(&[hlt()]);
    assert_eq!(t.step(), Ok(Some(Instruction::Hlt)));
    assert_eq!(t.step(), Ok(None));
    assert_eq!(t.pc(), 0);
    assert_eq!(t.cpu().stats.instructions_retired, 1);
}

#[test]
fn test_empty_memory_is_unknown_opcode() {
    let mut t = TestContext::new();
    assert_eq!(
        t.run(),
        Err(SimError::Fault(Fault::UnknownOpcode { opcode: 0, pc: 0 }))
    );
}

// ─── Data movement ───────────────────────────────────────────────────────────

#[rstest]
#[case(0, 0)]
#[case(0, 8)]
#[case(3, 255)]
#[case(4, 72)]
fn test_ldi_then_prn_emits_value(#[case] reg: u8, #[case] value: u8) {
    let mut t = ctx(&[ldi(reg, value), prn(reg), hlt()]);
    t.run().unwrap();
    assert_eq!(t.output(), &[value]);
    assert_eq!(t.get_reg(reg as usize), value);
}

#[test]
fn test_prn_output_order_matches_program_order() {
    let mut t = ctx(&[ldi(0, 3), ldi(1, 1), prn(0), prn(1), prn(0), hlt()]);
    t.run().unwrap();
    assert_eq!(t.output(), &[3, 1, 3]);
}

#[test]
fn test_interrupt_registers_are_plain_storage() {
    let mut t = ctx(&[ldi(5, 0x11), ldi(6, 0x22), prn(5), prn(6), hlt()]);
    t.run().unwrap();
    assert_eq!(t.output(), &[0x11, 0x22]);
}

// ─── Stack ───────────────────────────────────────────────────────────────────

#[rstest]
#[case(0)]
#[case(42)]
#[case(255)]
fn test_push_then_pop_restores_value_and_sp(#[case] value: u8) {
    let mut t = ctx(&[ldi(0, value), push(0), pop(2), hlt()]);
    let sp = t.sp();

    t.step_n(2);
    assert_eq!(t.sp(), sp - 1);
    assert_eq!(t.cpu().read(usize::from(sp - 1)), Ok(value));

    t.run().unwrap();
    assert_eq!(t.get_reg(2), value);
    assert_eq!(t.sp(), sp);
}

#[test]
fn test_stack_is_last_in_first_out() {
    let mut t = ctx(&[
        ldi(0, 1),
        ldi(1, 2),
        push(0),
        push(1),
        pop(2),
        pop(3),
        hlt(),
    ]);
    t.run().unwrap();
    assert_eq!(t.get_reg(2), 2);
    assert_eq!(t.get_reg(3), 1);
}

#[test]
fn test_push_sp_stores_decremented_sp() {
    let mut t = ctx(&[push(7), hlt()]);
    t.run().unwrap();
    assert_eq!(t.sp(), 0xF3);
    assert_eq!(t.cpu().read(0xF3), Ok(0xF3));
}

#[test]
fn test_pop_sp_increments_after_write() {
    let mut t = ctx(&[ldi(0, 0x10), push(0), pop(7), hlt()]);
    t.run().unwrap();
    assert_eq!(t.sp(), 0x11);
}

#[test]
fn test_push_with_sp_zero_wraps_out_of_memory() {
    let mut t = ctx(&[ldi(7, 0), ldi(0, 9), push(0), hlt()]);
    assert_eq!(t.run(), Err(SimError::Fault(Fault::memory(0xFF))));
    assert!(t.cpu().halted);
}

// ─── Subroutines and jumps ───────────────────────────────────────────────────

#[test]
fn test_call_then_ret_returns_past_call() {
    // 0: LDI R1,6  3: CALL R1  5: HLT  6: RET
    let mut t = ctx(&[ldi(1, 6), call(1), hlt(), ret()]);
    let sp = t.sp();

    t.step_n(2);
    assert_eq!(t.pc(), 6);
    assert_eq!(t.sp(), sp - 1);
    assert_eq!(t.cpu().read(usize::from(sp - 1)), Ok(5));

    t.step_n(1);
    assert_eq!(t.pc(), 5);
    assert_eq!(t.sp(), sp);

    t.run().unwrap();
    assert_eq!(t.pc(), 5);
}

#[test]
fn test_nested_calls() {
    // 0: LDI R1,11  3: LDI R2,17  6: CALL R1  8: PRN R0  10: HLT
    // 11: LDI R0,1  14: CALL R2  16: RET
    // 17: ADD R0,R0 20: RET
    let mut t = ctx(&[
        ldi(1, 11),
        ldi(2, 17),
        call(1),
        prn(0),
        hlt(),
        ldi(0, 1),
        call(2),
        ret(),
        alu(ADD, 0, 0),
        ret(),
    ]);
    let sp = t.sp();
    t.run().unwrap();
    assert_eq!(t.output(), &[2]);
    assert_eq!(t.sp(), sp);
    assert_eq!(t.pc(), 10);
}

#[test]
fn test_jmp_sets_pc() {
    // 0: LDI R0,8  3: JMP R0  5: PRN R0  7: HLT  8: HLT
    let mut t = ctx(&[ldi(0, 8), jmp(0), prn(0), hlt(), hlt()]);
    t.run().unwrap();
    assert_eq!(t.pc(), 8);
    assert!(t.output().is_empty());
}

/// `LDI R0,5; LDI R1,rhs; LDI R2,18; CMP R0,R1; <jump> R2; LDI R3,1; HLT; HLT(18)`
fn branch_program(rhs: u8, jump: Vec<u8>) -> TestContext {
    ctx(&[
        ldi(0, 5),
        ldi(1, rhs),
        ldi(2, 18),
        cmp(0, 1),
        jump,
        ldi(3, 1),
        hlt(),
        hlt(),
    ])
}

#[test]
fn test_cmp_equal_then_jeq_jumps() {
    let mut t = branch_program(5, jeq(2));
    t.step_n(4);
    assert!(t.cpu().fl.equal());
    t.step_n(1);
    assert_eq!(t.pc(), 18);
}

#[test]
fn test_cmp_unequal_then_jeq_falls_through() {
    let mut t = branch_program(6, jeq(2));
    t.step_n(4);
    assert!(t.cpu().fl.less());
    t.step_n(1);
    assert_eq!(t.pc(), 14);
}

#[test]
fn test_cmp_unequal_then_jne_jumps() {
    let mut t = branch_program(6, jne(2));
    t.step_n(5);
    assert_eq!(t.pc(), 18);
}

#[test]
fn test_cmp_equal_then_jne_falls_through() {
    let mut t = branch_program(5, jne(2));
    t.step_n(5);
    assert_eq!(t.pc(), 14);
}

#[test]
fn test_jne_with_clear_flags_jumps() {
    // 0: LDI R0,6  3: JNE R0  5: HLT  6: HLT
    let mut t = ctx(&[ldi(0, 6), jne(0), hlt(), hlt()]);
    t.run().unwrap();
    assert_eq!(t.pc(), 6);
}

#[test]
fn test_untaken_branch_does_not_read_target_register() {
    // CMP leaves Less set; JEQ with an invalid register falls through.
    let mut t = ctx(&[ldi(0, 1), ldi(1, 2), cmp(0, 1), jeq(9), hlt()]);
    t.run().unwrap();
    assert_eq!(t.pc(), 11);
}

#[test]
fn test_only_cmp_writes_flags() {
    let mut t = ctx(&[ldi(0, 5), ldi(1, 5), cmp(0, 1), alu(ADD, 0, 1), hlt()]);
    t.run().unwrap();
    assert!(t.cpu().fl.equal());
    assert_eq!(t.get_reg(0), 10);
}

// ─── PC advancement ──────────────────────────────────────────────────────────

#[rstest]
#[case(ldi(0, 1), 3)]
#[case(prn(0), 2)]
#[case(push(0), 2)]
#[case(pop(0), 2)]
#[case(not(0), 2)]
#[case(alu(ADD, 0, 1), 3)]
#[case(cmp(0, 1), 3)]
fn test_pc_advances_by_instruction_length(#[case] inst: Vec<u8>, #[case] length: usize) {
    let opcode = inst[0];
    assert!(!opcode.sets_pc());
    assert_eq!(opcode.length(), length);

    let mut t = ctx(&[inst, hlt()]);
    let _ = t.step().unwrap();
    assert_eq!(t.pc(), length);
}

#[test]
fn test_jump_does_not_add_its_length() {
    // R0 is 0, so JMP R0 lands back on itself.
    assert!(JMP.sets_pc());
    let mut t = ctx(&[jmp(0), hlt()]);
    let _ = t.step().unwrap();
    assert_eq!(t.pc(), 0);
    let _ = t.step().unwrap();
    assert_eq!(t.pc(), 0);
}

#[test]
fn test_call_lands_on_target_not_past_call() {
    // 0: LDI R1,6  3: CALL R1  5: HLT  6: HLT
    let mut t = ctx(&[ldi(1, 6), call(1), hlt(), hlt()]);
    t.step_n(2);
    assert_eq!(t.pc(), 6);
    t.run().unwrap();
    assert_eq!(t.pc(), 6);
}

// ─── ALU through the CPU ─────────────────────────────────────────────────────

#[test]
fn test_add_wraps_modulo_256() {
    let mut t = ctx(&[ldi(0, 255), ldi(1, 2), alu(ADD, 0, 1), hlt()]);
    t.run().unwrap();
    assert_eq!(t.get_reg(0), 1);
    assert_eq!(t.get_reg(1), 2);
}

#[test]
fn test_not_is_two_bytes() {
    // 0: LDI R0,0x0F  3: NOT R0  5: PRN R0  7: HLT
    let mut t = ctx(&[ldi(0, 0x0F), not(0), prn(0), hlt()]);
    t.run().unwrap();
    assert_eq!(t.output(), &[0xF0]);
    assert_eq!(t.pc(), 7);
}

#[test]
fn test_shift_by_eight_clears_register() {
    let mut t = ctx(&[
        ldi(0, 0xFF),
        ldi(1, 8),
        ldi(2, 0xFF),
        alu(SHL, 0, 1),
        alu(SHR, 2, 1),
        hlt(),
    ]);
    t.run().unwrap();
    assert_eq!(t.get_reg(0), 0);
    assert_eq!(t.get_reg(2), 0);
}

#[test]
fn test_div_by_zero_halts_without_corrupting_registers() {
    // DIV sits at address 12.
    let mut t = ctx(&[
        ldi(0, 10),
        ldi(1, 0),
        ldi(2, 7),
        ldi(3, 9),
        alu(DIV, 0, 1),
        hlt(),
    ]);
    let err = t.run().unwrap_err();
    assert_eq!(err, SimError::Fault(Fault::DivideByZero { pc: 12 }));
    assert!(t.cpu().halted);
    assert_eq!(t.pc(), 12);
    assert_eq!(t.get_reg(0), 10);
    assert_eq!(t.get_reg(1), 0);
    assert_eq!(t.get_reg(2), 7);
    assert_eq!(t.get_reg(3), 9);
    assert_eq!(t.sp(), 0xF4);
}

#[test]
fn test_mod_by_zero_faults() {
    let mut t = ctx(&[ldi(0, 10), alu(MOD, 0, 1), hlt()]);
    assert_eq!(
        t.run(),
        Err(SimError::Fault(Fault::ModuloByZero { pc: 3 }))
    );
    assert_eq!(t.get_reg(0), 10);
}

// ─── Faults ──────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_opcode_halts_with_byte_and_pc() {
    let mut t = ctx(&[ldi(0, 1), vec![0xFF]]);
    assert_eq!(
        t.run(),
        Err(SimError::Fault(Fault::UnknownOpcode {
            opcode: 0xFF,
            pc: 3
        }))
    );
    assert!(t.cpu().halted);
    assert_eq!(t.pc(), 3);
    assert_eq!(t.step(), Ok(None));
}

#[test]
fn test_register_operand_out_of_range_faults() {
    let mut t = ctx(&[prn(8), hlt()]);
    assert_eq!(t.run(), Err(SimError::Fault(Fault::register(8))));

    let mut t = ctx(&[ldi(9, 1), hlt()]);
    assert_eq!(t.run(), Err(SimError::Fault(Fault::register(9))));
}

#[test]
fn test_fetch_window_past_end_of_memory_faults() {
    // A one-byte HLT at 253 still fetches 253..=255, and 255 is out of range.
    let mut t = ctx(&[ldi(0, 253), jmp(0)]);
    t.cpu_mut().write(253, 0x01).unwrap();
    assert_eq!(t.run(), Err(SimError::Fault(Fault::memory(255))));
    assert_eq!(t.pc(), 253);
}

#[test]
fn test_fetch_window_at_last_valid_address() {
    let mut t = ctx(&[ldi(0, 252), jmp(0)]);
    t.cpu_mut().write(252, 0x01).unwrap();
    t.run().unwrap();
    assert_eq!(t.pc(), 252);
}

#[test]
fn test_fault_stops_further_output() {
    let mut t = ctx(&[ldi(0, 1), prn(0), vec![0xEE], prn(0), hlt()]);
    assert!(t.run().is_err());
    assert_eq!(t.output(), &[1]);
}

// ─── Tracing ─────────────────────────────────────────────────────────────────

#[test]
fn test_trace_line_format() {
    let t = ctx(&[ldi(0, 8), hlt()]);
    assert_eq!(
        t.cpu().trace_line(0x82, 0x00, 0x08),
        "TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4"
    );
}

#[test]
fn test_tracing_does_not_change_results() {
    let mut t = ctx(&[ldi(0, 8), prn(0), hlt()]);
    t.cpu_mut().trace = true;
    t.run().unwrap();
    assert_eq!(t.output(), &[8]);
}
