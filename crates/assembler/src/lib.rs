//! LC-2K assembler — two-pass text → machine word translation.
//!
//! Pass 1 reads every line and assigns addresses to labels. Pass 2 encodes
//! each line against the finished symbol table, so forward references work.
//!
//! # Usage
//!
//! ```
//! use lc2k_assembler::{assemble, disassemble};
//!
//! let text = "\tadd 1 2 3\n\thalt\n";
//! let program = assemble(text).unwrap();
//! assert_eq!(program.to_text(), "655363\n25165824\n");
//! assert_eq!(disassemble(&program), "add 1 2 3\nhalt\n");
//! ```
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for every program.
//! Assembling the same source twice always yields identical words.

pub mod error;
pub mod symbols;

mod disassembler;
mod encoder;
mod lexer;

pub use error::AsmError;
pub use lexer::{read_records, Record, FILL_DIRECTIVE, MAX_LINE_LENGTH};
pub use symbols::SymbolTable;

use encoder::encode_record;
use lc2k_common::program::MAX_WORDS;
use lc2k_common::Program;

/// Assemble text into a program.
///
/// Returns the first error encountered. Fix one error at a time.
pub fn assemble(text: &str) -> Result<Program, AsmError> {
    assemble_with_symbols(text).map(|(program, _)| program)
}

/// Assemble text, also returning the symbol table built by pass 1.
pub fn assemble_with_symbols(text: &str) -> Result<(Program, SymbolTable), AsmError> {
    let records = read_records(text)?;
    if let Some(extra) = records.get(MAX_WORDS) {
        return Err(AsmError::ProgramTooLarge {
            line: extra.line,
            limit: MAX_WORDS,
        });
    }
    let symbols = SymbolTable::build(&records)?;

    let mut words = Vec::with_capacity(records.len());
    for (address, record) in records.iter().enumerate() {
        words.push(encode_record(record, address, &symbols)?);
    }

    Ok((Program::new(words), symbols))
}

/// Disassemble a program into canonical assembly text.
///
/// Words that are not canonical instruction encodings come out as `.fill`.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}
