//! Symbol table: label name → instruction address (assembler pass 1).

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::AsmError;
use crate::lexer::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Symbol {
    address: usize,
    line: usize,
}

/// Label addresses for one source file. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
    instruction_count: usize,
}

impl SymbolTable {
    /// Assign every record its address and collect the labels.
    ///
    /// A record's address is its 0-based position in `records`, so every
    /// instruction and `.fill` takes exactly one slot. Defining the same
    /// label twice is an error.
    pub fn build(records: &[Record]) -> Result<Self, AsmError> {
        let mut symbols = HashMap::new();

        for (address, record) in records.iter().enumerate() {
            let Some(label) = &record.label else {
                continue;
            };
            match symbols.entry(label.clone()) {
                Entry::Occupied(prev) => {
                    let prev: &Symbol = prev.get();
                    return Err(AsmError::DuplicateLabel {
                        line: record.line,
                        label: label.clone(),
                        first_line: prev.line,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(Symbol {
                        address,
                        line: record.line,
                    });
                }
            }
        }

        Ok(Self {
            symbols,
            instruction_count: records.len(),
        })
    }

    /// Address of `label`, if defined.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.symbols.get(label).map(|s| s.address)
    }

    /// Number of defined labels.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if no labels are defined.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Total number of address slots (instructions and `.fill`s) counted.
    pub fn instruction_count(&self) -> usize {
        self.instruction_count
    }

    /// All `(label, address)` pairs, ordered by address.
    pub fn entries(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self
            .symbols
            .iter()
            .map(|(name, s)| (name.as_str(), s.address))
            .collect();
        entries.sort_by_key(|&(_, address)| address);
        entries
    }
}
