//! # RAM Opcode Definitions
//!
//! The machine has a closed set of nine opcodes, grouped by family:
//! - Transfer: LOAD, STORE
//! - Arithmetic: ADD, SUB, MULT, DIV
//! - Jump: GOTO, JZERO
//! - System: END
//!
//! Programs spell opcodes as upper-case mnemonics.

use crate::error::SpecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instruction opcode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== Transfer ==========
    /// LOAD: acc = v(op)
    Load,
    /// STORE: R[a(op)] = acc
    Store,

    // ========== Arithmetic ==========
    /// ADD: acc = acc + v(op)
    Add,
    /// SUB: acc = max(0, acc - v(op))
    Sub,
    /// MULT: acc = acc * v(op)
    Mult,
    /// DIV: acc = acc / v(op), truncating
    Div,

    // ========== Jump ==========
    /// GOTO: PC = line
    Goto,
    /// JZERO: if acc == 0 { PC = line }
    Jzero,

    // ========== System ==========
    /// END: PC = 0
    End,
}

impl Opcode {
    /// Every opcode, in table order
    pub const ALL: [Opcode; 9] = [
        Opcode::Load,
        Opcode::Store,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mult,
        Opcode::Div,
        Opcode::Goto,
        Opcode::Jzero,
        Opcode::End,
    ];

    /// Look up an opcode by its mnemonic (exact, upper-case)
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        match mnemonic {
            "LOAD" => Some(Opcode::Load),
            "STORE" => Some(Opcode::Store),
            "ADD" => Some(Opcode::Add),
            "SUB" => Some(Opcode::Sub),
            "MULT" => Some(Opcode::Mult),
            "DIV" => Some(Opcode::Div),
            "GOTO" => Some(Opcode::Goto),
            "JZERO" => Some(Opcode::Jzero),
            "END" => Some(Opcode::End),
            _ => None,
        }
    }

    /// Mnemonic as written in program text
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mult => "MULT",
            Opcode::Div => "DIV",
            Opcode::Goto => "GOTO",
            Opcode::Jzero => "JZERO",
            Opcode::End => "END",
        }
    }

    /// Check if this is an arithmetic opcode
    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub | Opcode::Mult | Opcode::Div)
    }

    /// Check if this opcode replaces the accumulator
    #[inline]
    pub const fn writes_accumulator(self) -> bool {
        matches!(self, Opcode::Load) || self.is_arithmetic()
    }
}

impl FromStr for Opcode {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| SpecError::UnknownOpcode(s.to_string()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
