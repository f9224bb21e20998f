//! CLI command implementations.

use std::fs;
use std::path::Path;

use lc2k_common::Program;
use lc2k_vm::{ExecConfig, Machine, RuntimeError};

/// Assemble an LC-2K source file to machine code.
pub fn assemble(input: &Path, output: Option<&Path>) -> Result<(), i32> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("mc"));

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", input.display());
        1
    })?;

    let program = lc2k_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    fs::write(&output, program.to_text()).map_err(|e| {
        eprintln!("error: cannot write '{}': {e}", output.display());
        1
    })?;

    eprintln!(
        "assembled {} words -> {}",
        program.len(),
        output.display()
    );
    Ok(())
}

/// Execute a machine-code file, printing the state before every cycle
/// unless `quiet` is set.
pub fn run(input: &Path, max_cycles: Option<u64>, quiet: bool) -> Result<(), i32> {
    let program = read_machine_code(input)?;
    let mut machine = Machine::new(&program).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    if !quiet {
        for (i, word) in program.words.iter().enumerate() {
            println!("memory[{i}]={word}");
        }
    }

    let config = ExecConfig { max_cycles };
    let result = machine.execute_with(&config, |state| {
        if !quiet {
            println!("\n{state}");
        }
    });

    match result {
        Ok(outcome) => {
            println!("machine halted");
            println!(
                "total of {} instructions executed",
                outcome.instructions_executed
            );
            println!("final state of machine:");
            println!("\n{machine}");
            Ok(())
        }
        Err(e @ RuntimeError::CycleLimitExceeded { .. }) => {
            eprintln!("error: {e}");
            Err(3)
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(2)
        }
    }
}

/// Disassemble a machine-code file to assembly text.
pub fn disassemble(input: &Path) -> Result<(), i32> {
    let program = read_machine_code(input)?;
    print!("{}", lc2k_assembler::disassemble(&program));
    Ok(())
}

/// Read a machine-code file (one signed decimal word per line).
fn read_machine_code(input: &Path) -> Result<Program, i32> {
    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", input.display());
        1
    })?;
    Program::from_text(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
