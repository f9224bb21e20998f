//! Encoder: one record plus a finished symbol table → one machine word
//! (assembler pass 2).
//!
//! Label resolution differs by opcode. `beq` turns a label into a
//! displacement from the instruction after the branch, while `lw` and `sw`
//! use the label's address as-is. This matches how the machine executes
//! them (`pc + 1 + offset` versus `regA + offset`) and must not be
//! "fixed" into symmetry.

use crate::error::AsmError;
use crate::lexer::{Record, FILL_DIRECTIVE};
use crate::symbols::SymbolTable;
use lc2k_common::instruction::NUM_REGISTERS;
use lc2k_common::{Format, Instruction, Opcode};

/// A classified operand field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand<'a> {
    Number(i64),
    Label(&'a str),
}

/// Encode the record found at `address`.
pub(crate) fn encode_record(
    record: &Record,
    address: usize,
    symbols: &SymbolTable,
) -> Result<i32, AsmError> {
    if record.opcode == FILL_DIRECTIVE {
        return encode_fill(record, symbols);
    }

    let opcode = Opcode::from_mnemonic(&record.opcode).ok_or_else(|| AsmError::UnknownOpcode {
        line: record.line,
        token: record.opcode.clone(),
    })?;

    let instr = match opcode.format() {
        Format::R => {
            let reg_a = register(record, 0)?;
            let reg_b = register(record, 1)?;
            let dest = register(record, 2)?;
            Instruction::r_type(opcode, reg_a, reg_b, dest)
        }
        Format::I => {
            let reg_a = register(record, 0)?;
            let reg_b = register(record, 1)?;
            let offset = offset(record, opcode, address, symbols)?;
            Instruction::i_type(opcode, reg_a, reg_b, offset)
        }
        Format::J => {
            let reg_a = register(record, 0)?;
            let reg_b = register(record, 1)?;
            Instruction::j_type(opcode, reg_a, reg_b)
        }
        Format::O => Instruction::o_type(opcode),
    };

    Ok(instr.encode())
}

/// `.fill`: a literal word, or the address of a label.
fn encode_fill(record: &Record, symbols: &SymbolTable) -> Result<i32, AsmError> {
    let value = match classify(operand(record, 0)?, record.line)? {
        Operand::Number(n) => n,
        Operand::Label(name) => resolve(record, name, symbols)? as i64,
    };
    i32::try_from(value).map_err(|_| AsmError::FillOutOfRange {
        line: record.line,
        value,
    })
}

/// Offset field of an I-type instruction, range-checked to 16 bits.
fn offset(
    record: &Record,
    opcode: Opcode,
    address: usize,
    symbols: &SymbolTable,
) -> Result<i16, AsmError> {
    let value = match classify(operand(record, 2)?, record.line)? {
        Operand::Number(n) => n,
        Operand::Label(name) => {
            let target = resolve(record, name, symbols)? as i64;
            fit_offset(target, record.line)?;
            if opcode == Opcode::Beq {
                target - (address as i64 + 1)
            } else {
                target
            }
        }
    };
    fit_offset(value, record.line)
}

fn fit_offset(value: i64, line: usize) -> Result<i16, AsmError> {
    i16::try_from(value).map_err(|_| AsmError::OffsetOutOfRange { line, value })
}

/// Register operand `index`, which must be an integer in 0..=7.
fn register(record: &Record, index: usize) -> Result<u8, AsmError> {
    let token = operand(record, index)?;
    let value = match classify(token, record.line)? {
        Operand::Number(n) => n,
        Operand::Label(_) => {
            return Err(AsmError::InvalidRegister {
                line: record.line,
                token: token.to_string(),
            })
        }
    };
    if !(0..NUM_REGISTERS as i64).contains(&value) {
        return Err(AsmError::RegisterOutOfRange {
            line: record.line,
            value,
        });
    }
    Ok(value as u8)
}

fn operand(record: &Record, index: usize) -> Result<&str, AsmError> {
    record
        .operand(index)
        .ok_or_else(|| AsmError::MissingOperand {
            line: record.line,
            opcode: record.opcode.clone(),
            position: index,
        })
}

fn resolve(record: &Record, name: &str, symbols: &SymbolTable) -> Result<usize, AsmError> {
    symbols.get(name).ok_or_else(|| AsmError::UndefinedLabel {
        line: record.line,
        label: name.to_string(),
    })
}

/// Decimal integers (optionally signed) are numbers; anything that starts
/// like one but does not parse is an error; everything else is a label.
fn classify(token: &str, line: usize) -> Result<Operand<'_>, AsmError> {
    if let Ok(n) = token.parse::<i64>() {
        return Ok(Operand::Number(n));
    }
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    if unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(AsmError::InvalidNumber {
            line,
            token: token.to_string(),
        });
    }
    Ok(Operand::Label(token))
}
