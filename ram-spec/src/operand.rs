//! # Operands and Addressing Modes
//!
//! | Token | Mode      | Value            | Address |
//! |-------|-----------|------------------|---------|
//! | `#k`  | Immediate | `k`              | none    |
//! | `k`   | Direct    | `R[k]`           | `k`     |
//! | `*k`  | Indirect  | `R[R[k]]`        | `R[k]`  |
//!
//! Immediate literals may be negative. Direct and indirect numerals are
//! register addresses and must be non-negative.

use crate::error::{Result, SpecError};
use crate::value::{Address, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Addressing mode of an operand
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressingMode {
    Immediate,
    Direct,
    Indirect,
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressingMode::Immediate => "immediate",
            AddressingMode::Direct => "direct",
            AddressingMode::Indirect => "indirect",
        };
        f.write_str(name)
    }
}

/// Decoded operand token
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// `#k`: the literal `k`
    Immediate(Value),
    /// `k`: register `k`
    Direct(Address),
    /// `*k`: the register whose address is held in register `k`
    Indirect(Address),
}

impl Operand {
    /// Parse an operand token
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();

        if let Some(literal) = token.strip_prefix('#') {
            literal
                .parse::<Value>()
                .map(Operand::Immediate)
                .map_err(|_| malformed(token, "expected an integer after `#`"))
        } else if let Some(digits) = token.strip_prefix('*') {
            parse_address(token, digits).map(Operand::Indirect)
        } else {
            parse_address(token, token).map(Operand::Direct)
        }
    }

    /// Addressing mode of this operand
    pub fn mode(&self) -> AddressingMode {
        match self {
            Operand::Immediate(_) => AddressingMode::Immediate,
            Operand::Direct(_) => AddressingMode::Direct,
            Operand::Indirect(_) => AddressingMode::Indirect,
        }
    }
}

fn parse_address(token: &str, digits: &str) -> Result<Address> {
    if digits.is_empty() {
        return Err(malformed(token, "missing register number"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(token, "register number must be a non-negative integer"));
    }
    digits
        .parse::<Address>()
        .map_err(|_| malformed(token, "register number is too large"))
}

fn malformed(token: &str, reason: &'static str) -> SpecError {
    SpecError::MalformedOperand {
        token: token.to_string(),
        reason,
    }
}

impl FromStr for Operand {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Immediate(value) => write!(f, "#{}", value),
            Operand::Direct(address) => write!(f, "{}", address),
            Operand::Indirect(address) => write!(f, "*{}", address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!(Operand::parse("#5"), Ok(Operand::Immediate(Value::from(5))));
        assert_eq!(Operand::parse("5"), Ok(Operand::Direct(5)));
        assert_eq!(Operand::parse("*5"), Ok(Operand::Indirect(5)));
    }

    #[test]
    fn test_parse_negative_immediate() {
        assert_eq!(
            Operand::parse("#-12"),
            Ok(Operand::Immediate(Value::from(-12)))
        );
    }

    #[test]
    fn test_parse_big_immediate() {
        let op = Operand::parse("#123456789012345678901234567890").unwrap();
        assert_eq!(
            op,
            Operand::Immediate("123456789012345678901234567890".parse().unwrap())
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Operand::parse("  *3 "), Ok(Operand::Indirect(3)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for token in ["", "#", "*", "abc", "-1", "*-1", "#x", "1.5", "**2", "*#2"] {
            assert!(
                matches!(Operand::parse(token), Err(SpecError::MalformedOperand { .. })),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn test_parse_rejects_oversized_address() {
        let token = "99999999999999999999999999";
        assert!(matches!(
            Operand::parse(token),
            Err(SpecError::MalformedOperand { reason: "register number is too large", .. })
        ));
    }

    #[test]
    fn test_mode() {
        assert_eq!(Operand::parse("#1").unwrap().mode(), AddressingMode::Immediate);
        assert_eq!(Operand::parse("1").unwrap().mode(), AddressingMode::Direct);
        assert_eq!(Operand::parse("*1").unwrap().mode(), AddressingMode::Indirect);
        assert_eq!(AddressingMode::Indirect.to_string(), "indirect");
    }

    #[test]
    fn test_display_matches_token_form() {
        for token in ["#-4", "#0", "17", "*2"] {
            assert_eq!(Operand::parse(token).unwrap().to_string(), token);
        }
    }
}
