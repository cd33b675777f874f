//! # CPU Execution Tests
//!
//! Tests for the fetch-decode-execute loop and instruction semantics.

use crate::common::builder::instruction::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::common::CpuError;
use ls8_core::config::Config;
use ls8_core::core::cpu::RunSummary;
use ls8_core::core::units::alu::AluOp;
use ls8_core::isa::Opcode;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_print8_program() {
    let mut ctx = TestContext::new().load_program(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
    let summary = ctx.run().unwrap();

    assert_eq!(ctx.output(), "PRN: 8\n");
    assert_eq!(summary, RunSummary { cycles: 3, pc: 6 });
    assert!(!ctx.cpu.is_running());
}

#[test]
fn test_mult_program() {
    let mut ctx = TestContext::new().load_program(&[
        0x82, 0x00, 0x05, 0x82, 0x01, 0x06, 0xA2, 0x00, 0x01, 0x47, 0x00, 0x01,
    ]);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output(), "PRN: 30\n");
}

#[test]
fn test_hlt_only_program() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().hlt().build());
    let summary = ctx.run().unwrap();

    assert_eq!(summary.cycles, 1);
    assert_eq!(ctx.cpu.pc(), 1);
    assert!(!ctx.cpu.is_running());
    assert_eq!(ctx.output(), "");
}

#[test]
fn test_step_after_halt_does_not_execute() {
    let mut ctx = TestContext::new().load_program(&[0x01, 0x82, 0x00, 0x05]);
    let _ = ctx.run().unwrap();

    assert!(matches!(ctx.cpu.step(), Err(CpuError::Halted(1))));
    assert_eq!(ctx.cpu.pc(), 1);
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.cpu.stats.cycles, 1);
}

#[test]
fn test_run_after_halt_executes_nothing() {
    let mut ctx = TestContext::new().load_program(&[0x01, 0x47, 0x00]);
    let _ = ctx.run().unwrap();

    let summary = ctx.run().unwrap();
    assert_eq!(summary, RunSummary { cycles: 1, pc: 1 });
    assert_eq!(ctx.output(), "");
}

#[test]
fn test_reset_resumes_stepping_after_halt() {
    let program = [0x01];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run().unwrap();

    ctx.cpu.reset();
    ctx.cpu.load_program(&program).unwrap();
    assert_eq!(ctx.cpu.step().unwrap(), Opcode::Hlt);
}

#[rstest]
#[case(Opcode::Ldi, ProgramBuilder::new().ldi(1, 7))]
#[case(Opcode::Prn, ProgramBuilder::new().prn(1))]
#[case(Opcode::Hlt, ProgramBuilder::new().hlt())]
#[case(Opcode::Mul, ProgramBuilder::new().mul(1, 2))]
#[case(Opcode::Push, ProgramBuilder::new().push(1))]
#[case(Opcode::Pop, ProgramBuilder::new().pop(1))]
fn test_step_advances_pc_by_width(#[case] op: Opcode, #[case] program: ProgramBuilder) {
    let mut ctx = TestContext::new().load_program(&program.build());
    assert_eq!(ctx.cpu.step().unwrap(), op);
    assert_eq!(ctx.cpu.pc(), op.width());
}

#[test]
fn test_ldi_writes_register() {
    let program = ProgramBuilder::new().ldi(4, 0xAB).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.get_reg(4), 0xAB);
}

#[test]
fn test_mul_truncates_to_eight_bits() {
    let program = ProgramBuilder::new()
        .ldi(0, 200)
        .ldi(1, 200)
        .mul(0, 1)
        .prn(0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run().unwrap();

    assert_eq!(ctx.output(), "PRN: 64\n");
    assert_eq!(ctx.get_reg(1), 200);
}

#[test]
fn test_mul_same_register_squares() {
    let program = ProgramBuilder::new().ldi(2, 12).mul(2, 2).prn(2).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output(), "PRN: 144\n");
}

#[test]
fn test_multiple_prn_lines_in_order() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 22)
        .ldi(2, 255)
        .prn(0)
        .prn(1)
        .prn(2)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output_lines(), vec!["PRN: 1", "PRN: 22", "PRN: 255"]);
}

#[test]
fn test_alu_add_through_cpu() {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, 250);
    ctx.set_reg(1, 10);
    ctx.cpu.alu(AluOp::Add, 0, 1).unwrap();
    assert_eq!(ctx.get_reg(0), 4);
    assert_eq!(ctx.get_reg(1), 10);
}

#[test]
fn test_alu_rejects_bad_register() {
    let mut ctx = TestContext::new();
    assert!(matches!(
        ctx.cpu.alu(AluOp::Mul, 0, 9),
        Err(CpuError::RegisterOutOfRange(9))
    ));
}

#[test]
fn test_unknown_opcode_faults_with_address() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .raw(&[0xFF])
        .prn(0)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&program);
    let err = ctx.run().unwrap_err();

    assert!(matches!(
        err,
        CpuError::UnknownInstruction { opcode: 0xFF, pc: 3 }
    ));
    assert_eq!(ctx.cpu.pc(), 3);
    assert!(ctx.cpu.is_running());
    assert_eq!(ctx.output(), "");
}

#[test]
fn test_zeroed_memory_faults_immediately() {
    let mut ctx = TestContext::new();
    let err = ctx.run().unwrap_err();
    assert!(matches!(
        err,
        CpuError::UnknownInstruction { opcode: 0, pc: 0 }
    ));
    assert_eq!(ctx.cpu.stats.cycles, 0);
}

#[test]
fn test_register_operand_out_of_range_faults() {
    let program = ProgramBuilder::new().ldi(8, 1).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    assert!(matches!(
        ctx.run(),
        Err(CpuError::RegisterOutOfRange(8))
    ));
    assert_eq!(ctx.cpu.pc(), 0);
}

#[test]
fn test_operand_past_end_of_memory_faults() {
    let mut ctx = TestContext::new();
    ctx.cpu.write_memory(255, 0x82).unwrap();
    ctx.cpu.pc = 255;
    assert!(matches!(
        ctx.cpu.step(),
        Err(CpuError::AddressOutOfRange(256))
    ));
}

#[test]
fn test_running_off_the_end_of_memory_faults() {
    let mut ctx = TestContext::new();
    ctx.cpu.write_memory(254, 0x47).unwrap();
    ctx.cpu.write_memory(255, 0x00).unwrap();
    ctx.cpu.pc = 254;
    assert!(matches!(
        ctx.run(),
        Err(CpuError::AddressOutOfRange(256))
    ));
    assert_eq!(ctx.output(), "PRN: 0\n");
}

#[test]
fn test_cycle_limit_stops_run() {
    let mut config = Config::default();
    config.general.max_cycles = Some(2);
    let program = ProgramBuilder::new().ldi(0, 1).ldi(1, 2).ldi(2, 3).hlt().build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);

    assert!(matches!(ctx.run(), Err(CpuError::CycleLimitExceeded(2))));
    assert_eq!(ctx.get_reg(1), 2);
    assert_eq!(ctx.get_reg(2), 0);
}

#[test]
fn test_cycle_limit_not_hit_by_exact_fit() {
    let mut config = Config::default();
    config.general.max_cycles = Some(2);
    let program = ProgramBuilder::new().ldi(0, 1).hlt().build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    assert_eq!(ctx.run().unwrap().cycles, 2);
}

#[test]
fn test_trace_enabled_run_still_produces_output() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let program = ProgramBuilder::new().ldi(0, 9).prn(0).hlt().build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output(), "PRN: 9\n");
}

proptest! {
    #[test]
    fn prop_ldi_prn_round_trip(reg in 0u8..8, value in any::<u8>()) {
        let program = ProgramBuilder::new().ldi(reg, value).prn(reg).hlt().build();
        let mut ctx = TestContext::new().load_program(&program);
        let _ = ctx.run().unwrap();
        prop_assert_eq!(ctx.output(), format!("PRN: {value}\n"));
    }

    #[test]
    fn prop_mul_program_prints_product_mod_256(a in any::<u8>(), b in any::<u8>()) {
        let program = ProgramBuilder::new()
            .ldi(0, a)
            .ldi(1, b)
            .mul(0, 1)
            .prn(0)
            .hlt()
            .build();
        let mut ctx = TestContext::new().load_program(&program);
        let _ = ctx.run().unwrap();
        let expected = (a as u32 * b as u32) % 256;
        prop_assert_eq!(ctx.output(), format!("PRN: {expected}\n"));
    }
}
