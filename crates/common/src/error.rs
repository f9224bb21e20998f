//! Decode errors for LC-2K machine words and machine-code files.

use thiserror::Error;

/// Errors that occur while decoding machine words or machine-code text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Opcode value outside 0..=7.
    #[error("invalid opcode: {0}")]
    InvalidOpcode(u8),

    /// A machine-code line did not parse as a signed 32-bit decimal.
    #[error("line {line}: invalid machine word '{text}'")]
    InvalidWord { line: usize, text: String },

    /// The program has more words than the machine has memory.
    #[error("program has {0} words (memory holds at most 65536)")]
    ProgramTooLarge(usize),
}
