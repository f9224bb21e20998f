//! Fetch-decode-execute loop.

use crate::error::RuntimeError;
use crate::machine::Machine;
use lc2k_common::instruction::opcode_bits;
use lc2k_common::{Instruction, Opcode};

/// Execution limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecConfig {
    /// Stop with [`RuntimeError::CycleLimitExceeded`] once this many
    /// instructions have executed without a halt. `None` runs unbounded.
    pub max_cycles: Option<u64>,
}

/// Result of a single cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Halted,
}

/// Summary of a run that reached `halt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Instructions executed, counting the final `halt`.
    pub instructions_executed: u64,
}

impl Machine {
    /// Run until `halt` or a fault.
    pub fn execute(&mut self, config: &ExecConfig) -> Result<Outcome, RuntimeError> {
        self.execute_with(config, |_| {})
    }

    /// Run until `halt` or a fault, calling `before_cycle` with the current
    /// state ahead of every fetch.
    pub fn execute_with<F>(
        &mut self,
        config: &ExecConfig,
        mut before_cycle: F,
    ) -> Result<Outcome, RuntimeError>
    where
        F: FnMut(&Machine),
    {
        loop {
            if let Some(limit) = config.max_cycles {
                if self.executed >= limit {
                    return Err(RuntimeError::CycleLimitExceeded { limit });
                }
            }
            before_cycle(self);
            if self.step()? == Step::Halted {
                return Ok(Outcome {
                    instructions_executed: self.executed,
                });
            }
        }
    }

    /// Execute one instruction.
    ///
    /// pc advances before the instruction takes effect, so `beq` and `jalr`
    /// see the address of the following instruction.
    pub fn step(&mut self) -> Result<Step, RuntimeError> {
        let at = self.pc;
        let word = self.fetch()?;
        let instr = Instruction::decode(word).map_err(|_| RuntimeError::InvalidOpcode {
            at,
            opcode: opcode_bits(word),
        })?;
        self.pc += 1;
        self.executed += 1;

        let a = usize::from(instr.reg_a);
        let b = usize::from(instr.reg_b);

        match instr.opcode {
            Opcode::Add => {
                self.registers[usize::from(instr.dest())] =
                    self.registers[a].wrapping_add(self.registers[b]);
            }
            Opcode::Nor => {
                self.registers[usize::from(instr.dest())] =
                    !(self.registers[a] | self.registers[b]);
            }
            Opcode::Lw => {
                let address = self.data_address(at, a, instr.offset())?;
                self.registers[b] = self.memory[address];
            }
            Opcode::Sw => {
                let address = self.data_address(at, a, instr.offset())?;
                self.memory[address] = self.registers[b];
            }
            Opcode::Beq => {
                let target = self.pc as i64 + i64::from(instr.offset());
                let target_index = self
                    .checked_address(target)
                    .ok_or(RuntimeError::BranchOutOfBounds { at, target })?;
                if self.registers[a] == self.registers[b] {
                    self.pc = target_index;
                }
            }
            Opcode::Jalr => {
                let target = i64::from(self.registers[a]);
                self.checked_address(target)
                    .ok_or(RuntimeError::JumpOutOfBounds { at, target })?;
                // Link first: with regA == regB the jump lands on pc + 1.
                self.registers[b] = self.pc as i32;
                self.pc = self.registers[a] as usize;
            }
            Opcode::Halt => return Ok(Step::Halted),
            Opcode::Noop => {}
        }

        Ok(Step::Continue)
    }

    /// Effective address `regA + offset` for `lw`/`sw`.
    fn data_address(&self, at: usize, reg_a: usize, offset: i32) -> Result<usize, RuntimeError> {
        let address = i64::from(self.registers[reg_a]) + i64::from(offset);
        self.checked_address(address)
            .ok_or(RuntimeError::InvalidAddress { at, address })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc2k_common::Program;

    fn machine(words: Vec<i32>) -> Machine {
        Machine::new(&Program::new(words)).unwrap()
    }

    fn halt() -> i32 {
        Instruction::o_type(Opcode::Halt).encode()
    }

    #[test]
    fn step_advances_pc_and_count() {
        let mut m = machine(vec![Instruction::o_type(Opcode::Noop).encode(), halt()]);
        assert_eq!(m.step(), Ok(Step::Continue));
        assert_eq!(m.pc(), 1);
        assert_eq!(m.instructions_executed(), 1);
        assert_eq!(m.step(), Ok(Step::Halted));
        assert_eq!(m.pc(), 2);
        assert_eq!(m.instructions_executed(), 2);
    }

    #[test]
    fn high_bits_are_ignored() {
        let mut m = machine(vec![(0x7Fu32 << 25) as i32 | halt()]);
        assert_eq!(m.step(), Ok(Step::Halted));
    }

    #[test]
    fn add_wraps_on_overflow() {
        let mut m = machine(vec![Instruction::r_type(Opcode::Add, 1, 2, 3).encode(), halt()]);
        m.registers[1] = i32::MAX;
        m.registers[2] = 1;
        m.step().unwrap();
        assert_eq!(m.register(3), i32::MIN);
    }

    #[test]
    fn nor_is_bitwise() {
        let mut m = machine(vec![Instruction::r_type(Opcode::Nor, 1, 2, 3).encode(), halt()]);
        m.registers[1] = 0b1010;
        m.registers[2] = 0b0110;
        m.step().unwrap();
        assert_eq!(m.register(3), !0b1110);
    }

    #[test]
    fn register_zero_is_writable() {
        let mut m = machine(vec![Instruction::r_type(Opcode::Nor, 0, 0, 0).encode(), halt()]);
        m.step().unwrap();
        assert_eq!(m.register(0), -1);
    }

    #[test]
    fn data_address_bounds() {
        let mut m = machine(vec![0, 0, 0]);
        m.registers[1] = 1;
        assert_eq!(m.data_address(0, 1, 1), Ok(2));
        assert_eq!(
            m.data_address(0, 1, 2),
            Err(RuntimeError::InvalidAddress { at: 0, address: 3 })
        );
        assert_eq!(
            m.data_address(4, 1, -2),
            Err(RuntimeError::InvalidAddress { at: 4, address: -1 })
        );
    }

    #[test]
    fn cycle_limit_counts_halt() {
        let mut m = machine(vec![Instruction::o_type(Opcode::Noop).encode(), halt()]);
        let outcome = m.execute(&ExecConfig { max_cycles: Some(2) }).unwrap();
        assert_eq!(outcome.instructions_executed, 2);

        let mut m = machine(vec![Instruction::o_type(Opcode::Noop).encode(), halt()]);
        assert_eq!(
            m.execute(&ExecConfig { max_cycles: Some(1) }),
            Err(RuntimeError::CycleLimitExceeded { limit: 1 })
        );
    }

    #[test]
    fn hook_sees_state_before_each_fetch() {
        let mut m = machine(vec![
            Instruction::o_type(Opcode::Noop).encode(),
            Instruction::o_type(Opcode::Noop).encode(),
            halt(),
        ]);
        let mut seen = Vec::new();
        m.execute_with(&ExecConfig::default(), |state| seen.push(state.pc()))
            .unwrap();
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
