//! Opcode definitions for the LC-2K instruction set.

use crate::error::DecodeError;

/// Identifies the operation to perform.
///
/// The `#[repr(u8)]` discriminant is the 3-bit value stored in bits 24-22
/// of a machine word.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `regDest = regA + regB`.
    Add = 0,
    /// `regDest = !(regA | regB)`.
    Nor = 1,
    /// Load `regB` from `memory[regA + offset]`.
    Lw = 2,
    /// Store `regB` to `memory[regA + offset]`.
    Sw = 3,
    /// Branch to `pc + 1 + offset` if `regA == regB`.
    Beq = 4,
    /// Store `pc + 1` in `regB`, then jump to the address in `regA`.
    Jalr = 5,
    /// Stop the machine.
    Halt = 6,
    /// Do nothing.
    Noop = 7,
}

/// Instruction forms, which decide how the low 19 bits of a word are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Two source registers and a destination register in bits 2-0.
    R,
    /// Two registers and a 16-bit two's-complement offset in bits 15-0.
    I,
    /// Two registers, no offset.
    J,
    /// No operand fields.
    O,
}

/// All opcodes, in encoding order.
pub const ALL_OPCODES: [Opcode; 8] = [
    Opcode::Add,
    Opcode::Nor,
    Opcode::Lw,
    Opcode::Sw,
    Opcode::Beq,
    Opcode::Jalr,
    Opcode::Halt,
    Opcode::Noop,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_OPCODES
            .get(value as usize)
            .copied()
            .ok_or(DecodeError::InvalidOpcode(value))
    }
}

impl Opcode {
    /// Assembly mnemonic for this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Nor => "nor",
            Opcode::Lw => "lw",
            Opcode::Sw => "sw",
            Opcode::Beq => "beq",
            Opcode::Jalr => "jalr",
            Opcode::Halt => "halt",
            Opcode::Noop => "noop",
        }
    }

    /// Look up an opcode by its mnemonic. Matching is case-sensitive.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == mnemonic)
            .copied()
    }

    /// The instruction form this opcode is encoded with.
    pub fn format(self) -> Format {
        match self {
            Opcode::Add | Opcode::Nor => Format::R,
            Opcode::Lw | Opcode::Sw | Opcode::Beq => Format::I,
            Opcode::Jalr => Format::J,
            Opcode::Halt | Opcode::Noop => Format::O,
        }
    }
}
