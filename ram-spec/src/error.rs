//! # Error Types for the RAM vocabulary

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("Malformed operand `{token}`: {reason}")]
    MalformedOperand { token: String, reason: &'static str },

    #[error("Unknown opcode: {0}")]
    UnknownOpcode(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::MalformedOperand {
            token: "#x".to_string(),
            reason: "expected an integer after `#`",
        };
        assert_eq!(
            err.to_string(),
            "Malformed operand `#x`: expected an integer after `#`"
        );

        let err = SpecError::UnknownOpcode("JUMP".to_string());
        assert_eq!(err.to_string(), "Unknown opcode: JUMP");
    }
}
