//! # RAM Instructions
//!
//! An instruction is kept as the raw (mnemonic, operand-token) pair a loader
//! produced. Decoding into [`Opcode`] and [`Operand`] happens when the machine
//! executes it, so an unknown mnemonic or a malformed operand is a run-time
//! fault at the line that carries it.

use crate::error::Result;
use crate::opcode::Opcode;
use crate::operand::Operand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One program line: opcode mnemonic plus operand token
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    /// Opcode mnemonic as written (e.g. `LOAD`)
    pub mnemonic: String,
    /// Operand token as written (e.g. `#3`, `7`, `*2`)
    pub operand: String,
}

impl Instruction {
    /// Create an instruction from raw text
    pub fn new(mnemonic: impl Into<String>, operand: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            operand: operand.into(),
        }
    }

    /// Decode the mnemonic
    pub fn opcode(&self) -> Result<Opcode> {
        self.mnemonic.parse()
    }

    /// Decode the operand token
    pub fn decode_operand(&self) -> Result<Operand> {
        Operand::parse(&self.operand)
    }
}

impl From<(&str, &str)> for Instruction {
    fn from((mnemonic, operand): (&str, &str)) -> Self {
        Self::new(mnemonic, operand)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operand.is_empty() {
            write!(f, "{}", self.mnemonic)
        } else {
            write!(f, "{} {}", self.mnemonic, self.operand)
        }
    }
}
