//! LC-2K common types and instruction encoding.
//!
//! This crate provides the foundational data structures shared by the
//! assembler and the interpreter:
//!
//! - [`Opcode`] — the eight LC-2K opcodes and their instruction forms
//! - [`Instruction`] — the 32-bit word layout with encode/decode
//! - [`Program`] — a sequence of machine words and its text format
//! - [`DecodeError`] — errors from decoding words or machine-code text
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::{Format, Opcode};
pub use program::Program;
