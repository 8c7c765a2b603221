// Tessellate: type-level arithmetic and list combinators
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/run_test.rs
// The `run` subcommand, which builds generated programs with cargo.
// These invoke a nested cargo build, so they are ignored by default:
//   cargo test --test run_test -- --ignored

use std::process::{Command, Output};

fn tessellate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tessellate"))
        .args(args)
        .output()
        .expect("failed to launch tessellate")
}

#[test]
#[ignore]
fn test_run_prints_compiled_value() {
    let output = tessellate(&["run", "7 * (2 + 3)"]);
    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Result: 35");
}

#[test]
#[ignore]
fn test_run_negative_result() {
    let output = tessellate(&["run", "1 - (-4) * -2"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Result: -7");
}

#[test]
#[ignore]
fn test_run_zero_divisor_fails_to_compile() {
    let output = tessellate(&["run", "4 / (2 - 2)"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error["), "expected a rustc error in:\n{}", stderr);
    assert!(
        stderr.contains("division by zero has no type-level rule"),
        "unexpected stderr:\n{}",
        stderr
    );
}

#[test]
fn test_run_rejects_unparsable_input_before_building() {
    let output = tessellate(&["run", "1 +"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("parse error at offset 3"));
}
