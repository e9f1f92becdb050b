//! # Program Structure
//!
//! A program is an ordered list of instructions plus the initial register
//! contents. Instruction `i` of the list sits at program address `i + 1`;
//! address 0 is the halt sentinel and never holds an instruction.
//!
//! Text form (as produced by `Display` and read by the loader):
//!
//! ```text
//! 0 3 6          <- initial registers R0 R1 R2
//! 1 LOAD 1       <- NUM COMMAND ARG
//! 2 STORE 3
//! ...
//! ```

use crate::instruction::Instruction;
use crate::value::{Address, Value};
use crate::{ENTRY_POINT, HALT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loaded RAM program
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Instructions; index 0 is program address 1
    pub instructions: Vec<Instruction>,

    /// Initial register values; index 0 is the accumulator
    pub registers: Vec<Value>,
}

impl Program {
    /// Create a program with all registers initially zero
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            registers: Vec::new(),
        }
    }

    /// Set the initial register contents
    pub fn with_registers<I, V>(mut self, registers: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.registers = registers.into_iter().map(Into::into).collect();
        self
    }

    /// Append an instruction, returning the program address it occupies
    pub fn push(&mut self, instruction: Instruction) -> Address {
        self.instructions.push(instruction);
        self.instructions.len()
    }

    /// Fetch the instruction at a program address
    ///
    /// Address 0 (halt) and addresses past the last instruction yield `None`.
    pub fn fetch(&self, pc: Address) -> Option<&Instruction> {
        if pc == HALT {
            return None;
        }
        self.instructions.get(pc - 1)
    }

    /// Number of instructions
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Check if the program has no instructions
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over `(address, instruction)` pairs
    pub fn lines(&self) -> impl Iterator<Item = (Address, &Instruction)> {
        self.instructions
            .iter()
            .enumerate()
            .map(|(i, inst)| (i + ENTRY_POINT, inst))
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.registers.is_empty() {
            writeln!(f, "0")?;
        } else {
            let values: Vec<String> = self.registers.iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", values.join(" "))?;
        }

        for (address, inst) in self.lines() {
            writeln!(f, "{} {}", address, inst)?;
        }
        Ok(())
    }
}
