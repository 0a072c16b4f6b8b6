//! # Bundled Program Tests
//!
//! Runs each image under `programs/` and checks its printed output.

use std::path::PathBuf;

use ls8_core::sim::loader::load_program;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::TestContext;

fn program_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name)
}

#[rstest]
#[case("print8.ls8", vec![8])]
#[case("mult.ls8", vec![72])]
#[case("stack.ls8", vec![2, 4, 1])]
#[case("call.ls8", vec![20, 30, 36, 60])]
#[case("sctest.ls8", vec![1, 4, 5])]
fn test_bundled_program_output(#[case] name: &str, #[case] expected: Vec<u8>) {
    let image = load_program(program_path(name)).unwrap();
    let mut t = TestContext::new().load_program(&image);
    t.run().unwrap();
    assert_eq!(t.output(), expected.as_slice());
    assert!(t.cpu().halted);
    assert_eq!(t.cpu().read(t.pc()), Ok(0x01));
}

#[rstest]
#[case("stack.ls8")]
#[case("call.ls8")]
fn test_bundled_program_balances_stack(#[case] name: &str) {
    let image = load_program(program_path(name)).unwrap();
    let mut t = TestContext::new().load_program(&image);
    t.run().unwrap();
    assert_eq!(t.sp(), 0xF4);
}

#[test]
fn test_sctest_takes_expected_branches() {
    let image = load_program(program_path("sctest.ls8")).unwrap();
    let mut t = TestContext::new().load_program(&image);
    t.run().unwrap();
    let stats = &t.cpu().stats;
    assert_eq!(stats.branches, 4);
    assert_eq!(stats.branches_taken, 2);
}
