//! Program representation for LC-2K machine code.
//!
//! Machine-code files hold one signed decimal integer per line, each the
//! two's-complement value of a 32-bit word. There is no header.

use crate::error::DecodeError;

/// Maximum number of words the machine's memory can hold.
pub const MAX_WORDS: usize = 65536;

/// An LC-2K program: a sequence of machine words.
///
/// Words are kept as `i32` so that `.fill` data and instructions share one
/// representation, and so that printing matches the 32-bit signed view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The word stream, address 0 first.
    pub words: Vec<i32>,
}

impl Program {
    /// Create a new program from a vector of words.
    pub fn new(words: Vec<i32>) -> Self {
        Self { words }
    }

    /// Render the program in machine-code text form.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.words.len() * 12);
        for word in &self.words {
            out.push_str(&word.to_string());
            out.push('\n');
        }
        out
    }

    /// Parse machine-code text.
    ///
    /// Each line is trimmed and parsed as a signed 32-bit decimal. Any line
    /// that fails to parse, including an empty one between words, is an
    /// error reported with its 1-based line number.
    pub fn from_text(text: &str) -> Result<Self, DecodeError> {
        let mut words = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            let word = trimmed.parse::<i32>().map_err(|_| DecodeError::InvalidWord {
                line: idx + 1,
                text: trimmed.to_string(),
            })?;
            words.push(word);
        }

        if words.len() > MAX_WORDS {
            return Err(DecodeError::ProgramTooLarge(words.len()));
        }

        Ok(Self { words })
    }

    /// Number of words in the program.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the program has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
