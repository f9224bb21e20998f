//! Machine state: program counter, register file, memory.

use std::fmt;

use crate::error::RuntimeError;
use lc2k_common::instruction::NUM_REGISTERS;
use lc2k_common::program::MAX_WORDS;
use lc2k_common::Program;

/// The LC-2K machine.
///
/// Memory holds exactly the loaded words; there is no implicit zero-filled
/// space past them. All eight registers are general-purpose, including
/// register 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Address of the next instruction to fetch.
    pub(crate) pc: usize,
    /// Register file.
    pub(crate) registers: [i32; NUM_REGISTERS],
    /// Loaded words, instructions and data alike.
    pub(crate) memory: Vec<i32>,
    /// Instructions fetched so far, including `halt`.
    pub(crate) executed: u64,
}

impl Machine {
    /// Load a program: registers zeroed, pc at 0.
    pub fn new(program: &Program) -> Result<Self, RuntimeError> {
        if program.len() > MAX_WORDS {
            return Err(RuntimeError::ProgramTooLarge(program.len()));
        }
        Ok(Self {
            pc: 0,
            registers: [0; NUM_REGISTERS],
            memory: program.words.clone(),
            executed: 0,
        })
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn registers(&self) -> &[i32; NUM_REGISTERS] {
        &self.registers
    }

    /// Value of register `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 8`.
    pub fn register(&self, index: usize) -> i32 {
        self.registers[index]
    }

    pub fn memory(&self) -> &[i32] {
        &self.memory
    }

    /// Number of words loaded; valid addresses are `0..loaded_word_count()`.
    pub fn loaded_word_count(&self) -> usize {
        self.memory.len()
    }

    /// Instructions executed so far, `halt` included.
    pub fn instructions_executed(&self) -> u64 {
        self.executed
    }

    /// Read the word at pc.
    pub(crate) fn fetch(&self) -> Result<i32, RuntimeError> {
        self.memory
            .get(self.pc)
            .copied()
            .ok_or(RuntimeError::PcOutOfBounds { pc: self.pc })
    }

    /// Convert `address` to an index if it lies inside the loaded program.
    pub(crate) fn checked_address(&self, address: i64) -> Option<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&a| a < self.memory.len())
    }
}

/// Full state dump in the classic LC-2K simulator layout.
impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@@@")?;
        writeln!(f, "state:")?;
        writeln!(f, "\tpc {}", self.pc)?;
        writeln!(f, "\tmemory:")?;
        for (i, word) in self.memory.iter().enumerate() {
            writeln!(f, "\t\tmem[ {i} ] {word}")?;
        }
        writeln!(f, "\tregisters:")?;
        for (i, value) in self.registers.iter().enumerate() {
            writeln!(f, "\t\treg[ {i} ] {value}")?;
        }
        write!(f, "end state")
    }
}
