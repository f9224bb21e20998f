//! LC-2K interpreter — executes assembled machine words.
//!
//! The machine has:
//! - Eight 32-bit general-purpose registers, all starting at zero
//! - Word-addressed memory holding exactly the loaded program
//! - A program counter starting at address 0
//!
//! Any out-of-bounds fetch, load, store, branch or jump is a fatal fault.
//!
//! # Usage
//!
//! ```
//! use lc2k_common::Program;
//! use lc2k_vm::run;
//!
//! // add 1 2 3; halt
//! let program = Program::new(vec![655363, 25165824]);
//!
//! let (machine, outcome) = run(&program).unwrap();
//! assert_eq!(outcome.instructions_executed, 2);
//! assert_eq!(machine.register(3), 0);
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use execute::{ExecConfig, Outcome, Step};
pub use machine::Machine;

use lc2k_common::Program;

/// Load and execute a program with no cycle limit.
///
/// Returns the final machine state alongside the run summary.
///
/// # Errors
///
/// Returns [`RuntimeError`] on any fault (out-of-bounds access, branch or
/// jump, or a program too large to load).
pub fn run(program: &Program) -> Result<(Machine, Outcome), RuntimeError> {
    run_with(program, &ExecConfig::default())
}

/// Load and execute a program under `config`.
pub fn run_with(
    program: &Program,
    config: &ExecConfig,
) -> Result<(Machine, Outcome), RuntimeError> {
    let mut machine = Machine::new(program)?;
    let outcome = machine.execute(config)?;
    Ok((machine, outcome))
}
