//! Error types for the LC-2K assembler.

use thiserror::Error;

/// Errors produced while assembling source text into machine words.
///
/// Every variant carries the 1-based source line it was detected on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// A source line exceeds the maximum line length.
    #[error("line {line}: line too long ({length} characters, maximum 1000)")]
    LineTooLong { line: usize, length: usize },

    /// A label definition is not a valid identifier.
    #[error("line {line}: invalid label '{label}'")]
    InvalidLabel { line: usize, label: String },

    /// A line carries a label but no opcode.
    #[error("line {line}: label '{label}' has no opcode")]
    MissingOpcode { line: usize, label: String },

    /// An unrecognized opcode mnemonic was encountered.
    #[error("line {line}: unrecognized opcode '{token}'")]
    UnknownOpcode { line: usize, token: String },

    /// An opcode did not have enough operands.
    #[error("line {line}: {opcode} is missing operand {position}")]
    MissingOperand {
        line: usize,
        opcode: String,
        position: usize,
    },

    /// A register operand is not an integer.
    #[error("line {line}: non-integer register '{token}'")]
    InvalidRegister { line: usize, token: String },

    /// A register operand is outside 0..=7.
    #[error("line {line}: register {value} out of range (0-7)")]
    RegisterOutOfRange { line: usize, value: i64 },

    /// A numeric literal could not be parsed.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// A label was referenced but never defined.
    #[error("line {line}: undefined label '{label}'")]
    UndefinedLabel { line: usize, label: String },

    /// A label was defined more than once.
    #[error("line {line}: duplicate label '{label}' (first defined on line {first_line})")]
    DuplicateLabel {
        line: usize,
        label: String,
        first_line: usize,
    },

    /// An offset does not fit in a signed 16-bit field.
    #[error("line {line}: offset {value} does not fit in 16 bits")]
    OffsetOutOfRange { line: usize, value: i64 },

    /// A `.fill` value does not fit in a signed 32-bit word.
    #[error("line {line}: .fill value {value} does not fit in 32 bits")]
    FillOutOfRange { line: usize, value: i64 },

    /// The source has more instructions and data words than memory holds.
    #[error("line {line}: program exceeds {limit} words")]
    ProgramTooLarge { line: usize, limit: usize },
}
