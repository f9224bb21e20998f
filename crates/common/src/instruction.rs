//! Instruction encoding and decoding for the LC-2K instruction set.
//!
//! Every instruction is one 32-bit word:
//! ```text
//! Bits 31-25: unused (0 on encode, ignored on decode)
//! Bits 24-22: opcode
//! Bits 21-19: register A
//! Bits 18-16: register B
//! Bits 15-0:  offset (I-type), destination register in bits 2-0 (R-type)
//! ```
//!
//! The assembler's encoder and the interpreter's decoder both go through
//! this module, so the layout is defined exactly once.

use std::fmt;

use crate::error::DecodeError;
use crate::opcode::{Format, Opcode};

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

pub const OPCODE_SHIFT: u32 = 22;
pub const REG_A_SHIFT: u32 = 19;
pub const REG_B_SHIFT: u32 = 16;

pub const OPCODE_MASK: u32 = 0x7;
pub const REG_MASK: u32 = 0x7;
pub const DEST_MASK: u32 = 0x7;
pub const OFFSET_MASK: u32 = 0xFFFF;

/// Smallest offset an I-type instruction can carry.
pub const OFFSET_MIN: i64 = i16::MIN as i64;
/// Largest offset an I-type instruction can carry.
pub const OFFSET_MAX: i64 = i16::MAX as i64;

/// Bits 24-22.
pub fn opcode_bits(word: i32) -> u8 {
    ((word as u32 >> OPCODE_SHIFT) & OPCODE_MASK) as u8
}

/// Bits 21-19.
pub fn reg_a(word: i32) -> u8 {
    ((word as u32 >> REG_A_SHIFT) & REG_MASK) as u8
}

/// Bits 18-16.
pub fn reg_b(word: i32) -> u8 {
    ((word as u32 >> REG_B_SHIFT) & REG_MASK) as u8
}

/// Bits 2-0.
pub fn dest_field(word: i32) -> u8 {
    (word as u32 & DEST_MASK) as u8
}

/// Bits 15-0, not yet sign-extended.
pub fn offset_field(word: i32) -> u16 {
    (word as u32 & OFFSET_MASK) as u16
}

/// Interpret a 16-bit field as two's complement.
pub fn sign_extend_16(field: u16) -> i32 {
    field as i16 as i32
}

/// A single decoded LC-2K instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Register A (bits 21-19). Zero for O-type.
    pub reg_a: u8,
    /// Register B (bits 18-16). Zero for O-type.
    pub reg_b: u8,
    /// Low field: destination register for R-type, raw 16-bit offset for
    /// I-type, zero otherwise.
    pub field: u16,
}

impl Instruction {
    /// An R-type instruction (`add`, `nor`).
    pub fn r_type(opcode: Opcode, reg_a: u8, reg_b: u8, dest: u8) -> Self {
        Self {
            opcode,
            reg_a,
            reg_b,
            field: dest as u16,
        }
    }

    /// An I-type instruction (`lw`, `sw`, `beq`).
    pub fn i_type(opcode: Opcode, reg_a: u8, reg_b: u8, offset: i16) -> Self {
        Self {
            opcode,
            reg_a,
            reg_b,
            field: offset as u16,
        }
    }

    /// A J-type instruction (`jalr`).
    pub fn j_type(opcode: Opcode, reg_a: u8, reg_b: u8) -> Self {
        Self {
            opcode,
            reg_a,
            reg_b,
            field: 0,
        }
    }

    /// An O-type instruction (`halt`, `noop`).
    pub fn o_type(opcode: Opcode) -> Self {
        Self {
            opcode,
            reg_a: 0,
            reg_b: 0,
            field: 0,
        }
    }

    /// Pack this instruction into a machine word.
    ///
    /// Each field is masked to its width, so out-of-range register numbers
    /// never bleed into neighbouring fields. Callers that accept user input
    /// must range-check registers first.
    pub fn encode(&self) -> i32 {
        let low = match self.opcode.format() {
            Format::R => self.field as u32 & DEST_MASK,
            Format::I => self.field as u32 & OFFSET_MASK,
            Format::J | Format::O => 0,
        };
        let word = ((self.opcode as u32 & OPCODE_MASK) << OPCODE_SHIFT)
            | ((self.reg_a as u32 & REG_MASK) << REG_A_SHIFT)
            | ((self.reg_b as u32 & REG_MASK) << REG_B_SHIFT)
            | low;
        word as i32
    }

    /// Unpack a machine word.
    ///
    /// Bits 31-25 and any bits the opcode's format does not use are ignored.
    pub fn decode(word: i32) -> Result<Self, DecodeError> {
        let opcode = Opcode::try_from(opcode_bits(word))?;
        let instr = match opcode.format() {
            Format::R => Self::r_type(opcode, reg_a(word), reg_b(word), dest_field(word)),
            Format::I => Self {
                opcode,
                reg_a: reg_a(word),
                reg_b: reg_b(word),
                field: offset_field(word),
            },
            Format::J => Self::j_type(opcode, reg_a(word), reg_b(word)),
            Format::O => Self::o_type(opcode),
        };
        Ok(instr)
    }

    /// True if `word` is exactly what encoding its decoded form produces,
    /// i.e. it carries no stray bits.
    pub fn is_canonical(word: i32) -> bool {
        Self::decode(word).is_ok_and(|instr| instr.encode() == word)
    }

    /// Destination register of an R-type instruction.
    pub fn dest(&self) -> u8 {
        (self.field as u32 & DEST_MASK) as u8
    }

    /// Sign-extended offset of an I-type instruction.
    pub fn offset(&self) -> i32 {
        sign_extend_16(self.field)
    }
}

/// Renders the instruction as assembly text, e.g. `lw 0 1 -1`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.opcode.mnemonic();
        match self.opcode.format() {
            Format::R => write!(f, "{m} {} {} {}", self.reg_a, self.reg_b, self.dest()),
            Format::I => write!(f, "{m} {} {} {}", self.reg_a, self.reg_b, self.offset()),
            Format::J => write!(f, "{m} {} {}", self.reg_a, self.reg_b),
            Format::O => write!(f, "{m}"),
        }
    }
}
