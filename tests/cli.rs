use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc2022"))
        .args(args)
        .current_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch aoc2022")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn day13_sample_prints_both_parts() {
    let output = run(&["13", "--test", "1"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "Part 1: 13\nPart 2: 140\n");
}

#[test]
fn day3_sample_prints_both_parts() {
    let output = run(&["3", "--test", "1"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "Part 1: 157\nPart 2: 70\n");
}

#[test]
fn single_part_prints_one_line() {
    let output = run(&["13", "2", "--input", "inputs/day13test1.in"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Part 2: 140\n");
}

#[test]
fn missing_input_fails() {
    let output = run(&["13", "--test", "99"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("day13test99.in"));
}

#[test]
fn unknown_day_fails() {
    let output = run(&["4", "--input", "inputs/day3test1.in"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no solution for day 4"));
}
