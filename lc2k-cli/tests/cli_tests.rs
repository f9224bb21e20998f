//! Integration tests for the LC-2K CLI.
//!
//! These tests invoke the `lc2k` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn lc2k() -> Command {
    Command::cargo_bin("lc2k").unwrap()
}

/// Return the workspace root (parent of lc2k-cli/).
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Return the absolute path to a test program file.
fn test_program(name: &str) -> PathBuf {
    workspace_root().join("tests/programs").join(name)
}

/// Helper: assemble a sample program into `dir`, returning the .mc path.
fn assemble_to_temp(dir: &TempDir, name: &str) -> PathBuf {
    let output = dir.path().join(Path::new(name).with_extension("mc"));
    lc2k()
        .args([
            "assemble",
            test_program(name).to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();
    output
}

/// Helper: write machine code text to a temp file.
fn write_mc(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("prog.mc");
    fs::write(&path, text).unwrap();
    path
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    lc2k()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: lc2k"));
}

#[test]
fn help_flag_exits_0() {
    lc2k()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("assemble"));
}

#[test]
fn unknown_command_exits_1() {
    lc2k()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("frobnicate"));
}

// ---- Assemble ----

#[test]
fn assemble_count_program() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("count.mc");
    lc2k()
        .args([
            "assemble",
            test_program("count.as").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("assembled 10 words"));

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(
        text,
        "8454151\n9043971\n655361\n16842754\n16842749\n29360128\n25165824\n5\n-1\n2\n"
    );
}

#[test]
fn assemble_default_output_uses_mc_extension() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("prog.as");
    fs::write(&input, "\tadd 1 2 3\n\thalt\n").unwrap();
    lc2k()
        .args(["assemble", input.to_str().unwrap()])
        .assert()
        .success();
    let text = fs::read_to_string(dir.path().join("prog.mc")).unwrap();
    assert_eq!(text, "655363\n25165824\n");
}

#[test]
fn assemble_error_exits_1_with_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.as");
    fs::write(&input, "\tnoop\n\tadd 1 2 8\n").unwrap();
    lc2k()
        .args(["assemble", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: line 2: register 8 out of range"));
    assert!(!dir.path().join("bad.mc").exists());
}

#[test]
fn assemble_missing_file_exits_1() {
    lc2k()
        .args(["assemble", "/nonexistent/prog.as"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

// ---- Run ----

#[test]
fn run_count_program_traces_and_halts() {
    let dir = TempDir::new().unwrap();
    let mc = assemble_to_temp(&dir, "count.as");
    lc2k()
        .args(["run", mc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("memory[0]=8454151\n"))
        .stdout(predicate::str::contains("\n@@@\nstate:\n\tpc 0\n"))
        .stdout(predicate::str::contains("machine halted\n"))
        .stdout(predicate::str::contains("total of 17 instructions executed\n"))
        .stdout(predicate::str::contains("final state of machine:\n"))
        .stdout(predicate::str::contains("\t\treg[ 1 ] 0\n"))
        .stdout(predicate::str::contains("\t\treg[ 2 ] -1\n"));
}

#[test]
fn run_quiet_prints_only_final_state() {
    let dir = TempDir::new().unwrap();
    let mc = assemble_to_temp(&dir, "multiply.as");
    let assert = lc2k()
        .args(["run", "--quiet", mc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("total of 34 instructions executed"))
        .stdout(predicate::str::contains("\t\treg[ 3 ] 42\n"))
        .stdout(predicate::str::contains("memory[").not());
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("@@@").count(), 1);
}

#[test]
fn run_runtime_fault_exits_2() {
    let dir = TempDir::new().unwrap();
    let mc = assemble_to_temp(&dir, "bad_load.as");
    lc2k()
        .args(["run", "--quiet", mc.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid memory address 5"));
}

#[test]
fn run_cycle_limit_exits_3() {
    let dir = TempDir::new().unwrap();
    let mc = assemble_to_temp(&dir, "spin.as");
    lc2k()
        .args(["run", "--quiet", "--max-cycles", "100", mc.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no halt within 100 instructions"));
}

#[test]
fn run_bad_machine_code_exits_1() {
    let dir = TempDir::new().unwrap();
    let mc = write_mc(&dir, "25165824\nhalt\n");
    lc2k()
        .args(["run", mc.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2: invalid machine word 'halt'"));
}

#[test]
fn run_empty_program_faults() {
    let dir = TempDir::new().unwrap();
    let mc = write_mc(&dir, "");
    lc2k()
        .args(["run", "--quiet", mc.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("program counter 0 out of bounds"));
}

// ---- Disassemble ----

#[test]
fn disassemble_count_program() {
    let dir = TempDir::new().unwrap();
    let mc = assemble_to_temp(&dir, "count.as");
    lc2k()
        .args(["disassemble", mc.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lw 0 1 7\nlw 1 2 3\nadd 1 2 1\n"))
        .stdout(predicate::str::contains("beq 0 0 -3\nnoop\nhalt\n"))
        .stdout(predicate::str::contains(".fill -1\n"));
}

#[test]
fn disassembly_reassembles_to_same_words() {
    let dir = TempDir::new().unwrap();
    let mc = assemble_to_temp(&dir, "multiply.as");
    let listing = lc2k()
        .args(["disassemble", mc.to_str().unwrap()])
        .output()
        .unwrap();
    let source = dir.path().join("listing.as");
    fs::write(&source, &listing.stdout).unwrap();
    let again = dir.path().join("again.mc");
    lc2k()
        .args([
            "assemble",
            source.to_str().unwrap(),
            "-o",
            again.to_str().unwrap(),
        ])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&mc).unwrap(),
        fs::read_to_string(&again).unwrap()
    );
}
