//! Line reader: splits LC-2K assembly text into per-line records.
//!
//! A line has the shape `[label] opcode [field0 [field1 [field2]]] [comment]`,
//! fields separated by whitespace. Anything after the third field is
//! ignored, which is how LC-2K sources carry trailing comments.

use crate::error::AsmError;
use lc2k_common::Opcode;

/// Longest accepted source line, in characters, excluding the newline.
pub const MAX_LINE_LENGTH: usize = 1000;

/// The `.fill` data directive.
pub const FILL_DIRECTIVE: &str = ".fill";

/// One assembler-significant source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based source line number.
    pub line: usize,
    /// Label defined on this line, without any trailing `:`.
    pub label: Option<String>,
    /// Opcode mnemonic or `.fill`, as written.
    pub opcode: String,
    /// Up to three operand fields, still untyped.
    pub operands: [Option<String>; 3],
}

impl Record {
    /// Operand `index` (0-based), if present.
    pub fn operand(&self, index: usize) -> Option<&str> {
        self.operands.get(index).and_then(|op| op.as_deref())
    }
}

/// Split a whole source text into records, one per non-blank line.
///
/// Blank and whitespace-only lines produce no record and so consume no
/// address.
pub fn read_records(text: &str) -> Result<Vec<Record>, AsmError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(record) = read_line(line, idx + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parse a single line.
///
/// The first token is a label if it ends with `:`, or if the line starts in
/// column 0 and the token is not an opcode mnemonic or `.fill`.
pub(crate) fn read_line(line: &str, line_num: usize) -> Result<Option<Record>, AsmError> {
    let length = line.chars().count();
    if length > MAX_LINE_LENGTH {
        return Err(AsmError::LineTooLong {
            line: line_num,
            length,
        });
    }

    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };

    let in_column_zero = !line.starts_with(char::is_whitespace);
    let (label, opcode) = if let Some(name) = first.strip_suffix(':') {
        (Some(name), tokens.next())
    } else if in_column_zero && !is_mnemonic(first) {
        (Some(first), tokens.next())
    } else {
        (None, Some(first))
    };

    if let Some(name) = label {
        if !is_valid_label(name) {
            return Err(AsmError::InvalidLabel {
                line: line_num,
                label: name.to_string(),
            });
        }
    }

    let Some(opcode) = opcode else {
        return Err(AsmError::MissingOpcode {
            line: line_num,
            label: label.unwrap_or_default().to_string(),
        });
    };

    let operands = [
        tokens.next().map(str::to_string),
        tokens.next().map(str::to_string),
        tokens.next().map(str::to_string),
    ];

    Ok(Some(Record {
        line: line_num,
        label: label.map(str::to_string),
        opcode: opcode.to_string(),
        operands,
    }))
}

fn is_mnemonic(token: &str) -> bool {
    token == FILL_DIRECTIVE || Opcode::from_mnemonic(token).is_some()
}

/// Labels start with a letter and continue with letters, digits or `_`.
fn is_valid_label(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
