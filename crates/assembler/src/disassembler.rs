//! Disassembler: machine words → canonical assembly text.
//!
//! One line per word, no labels, no indentation. A word that is not exactly
//! the encoding of some instruction (stray bits in unused fields, or any
//! negative value) is printed as `.fill`, so the text always reassembles to
//! the same words.

use lc2k_common::{Instruction, Program};

/// Disassemble a program into canonical assembly text.
///
/// Branch offsets are printed as numbers, which the assembler uses as-is,
/// so `assemble(disassemble(program)) == program`.
pub fn disassemble(program: &Program) -> String {
    let mut out = String::new();
    for &word in &program.words {
        let line = match Instruction::decode(word) {
            Ok(instr) if Instruction::is_canonical(word) => instr.to_string(),
            _ => format!(".fill {word}"),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}
