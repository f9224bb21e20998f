//! Runtime faults for the LC-2K interpreter.
//!
//! Every fault is fatal. Faults raised by an instruction carry that
//! instruction's address (`at`).

use thiserror::Error;

/// Errors that stop execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The program counter left the loaded program before a fetch.
    #[error("program counter {pc} out of bounds")]
    PcOutOfBounds { pc: usize },

    /// `lw` or `sw` computed an address outside the loaded program.
    #[error("invalid memory address {address} at instruction {at}")]
    InvalidAddress { at: usize, address: i64 },

    /// `beq` would branch outside the loaded program.
    #[error("branch target {target} out of bounds at instruction {at}")]
    BranchOutOfBounds { at: usize, target: i64 },

    /// `jalr` would jump outside the loaded program.
    #[error("jump target {target} out of bounds at instruction {at}")]
    JumpOutOfBounds { at: usize, target: i64 },

    /// The fetched word does not decode to a known opcode.
    #[error("invalid opcode {opcode} at instruction {at}")]
    InvalidOpcode { at: usize, opcode: u8 },

    /// The configured cycle ceiling was reached without a halt.
    #[error("no halt within {limit} instructions")]
    CycleLimitExceeded { limit: u64 },

    /// The program does not fit in memory.
    #[error("program has {0} words (memory holds at most 65536)")]
    ProgramTooLarge(usize),
}
