//! # Simulator Tests
//!
//! Whole programs driven through [`Simulator`], including the bundled
//! sample programs.

use ls8_core::Simulator;
use ls8_core::common::CpuError;
use ls8_core::config::Config;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

/// Path to a program in the workspace `programs/` directory.
fn sample_program(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name)
}

fn run_sample(name: &str) -> String {
    let mut sim = Simulator::with_output(&Config::default(), Vec::new());
    let _ = sim.load_file(sample_program(name)).unwrap();
    let _ = sim.run().unwrap();
    String::from_utf8(sim.cpu.into_output()).unwrap()
}

#[test]
fn test_sample_print8() {
    assert_eq!(run_sample("print8.ls8"), "PRN: 8\n");
}

#[test]
fn test_sample_mult() {
    assert_eq!(run_sample("mult.ls8"), "PRN: 72\n");
}

#[test]
fn test_sample_stack() {
    assert_eq!(run_sample("stack.ls8"), "PRN: 2\nPRN: 4\nPRN: 1\n");
}

#[test]
fn test_tick_single_steps() {
    let mut sim = Simulator::with_output(&Config::default(), Vec::new());
    sim.load_bytes(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]).unwrap();

    sim.tick().unwrap();
    assert_eq!(sim.cpu.pc(), 3);
    sim.tick().unwrap();
    assert_eq!(sim.cpu.output(), b"PRN: 8\n");
    sim.tick().unwrap();
    assert!(!sim.cpu.is_running());

    assert!(matches!(sim.tick(), Err(CpuError::Halted(6))));
    assert_eq!(sim.cpu.pc(), 6);
}

#[test]
fn test_run_reports_fault() {
    let mut sim = Simulator::with_output(&Config::default(), Vec::new());
    sim.load_bytes(&[0x82, 0x00, 0x08, 0x0F]).unwrap();

    let err = sim.run().unwrap_err();
    assert!(matches!(
        err,
        CpuError::UnknownInstruction { opcode: 0x0F, pc: 3 }
    ));
    assert_eq!(sim.cpu.read_register(0).unwrap(), 8);
}

#[test]
fn test_load_bytes_too_large() {
    let mut sim = Simulator::with_output(&Config::default(), Vec::new());
    assert!(matches!(
        sim.load_bytes(&[0; 300]),
        Err(CpuError::ProgramTooLarge { len: 300, .. })
    ));
}
