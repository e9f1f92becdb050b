//! Runtime error types for the RAM machine
//!
//! Every variant is fatal: a machine that reports one of these (other than
//! [`RuntimeError::CycleLimitExceeded`]) is faulted and never resumes.

use ram_spec::{Address, Opcode, SpecError, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Abnormal termination: no instruction at address {pc}")]
    AddressOutOfProgram { pc: Address },

    #[error("Unknown instruction `{mnemonic}` at address {pc}")]
    UnknownOpcode { pc: Address, mnemonic: String },

    #[error("Division by zero at address {pc}")]
    DivisionByZero { pc: Address },

    #[error("Invalid operand `{operand}` for {opcode} at address {pc}: {reason}")]
    InvalidOperandForm {
        pc: Address,
        opcode: Opcode,
        operand: String,
        reason: &'static str,
    },

    #[error("Malformed operand at address {pc}: {source}")]
    MalformedOperand {
        pc: Address,
        #[source]
        source: SpecError,
    },

    #[error("Register value {value} is not a register address (at address {pc})")]
    InvalidAddress { pc: Address, value: Value },

    #[error("Cycle limit exceeded: {limit}")]
    CycleLimitExceeded { limit: u64 },
}

impl RuntimeError {
    /// Program address at which the error was raised, if any
    pub fn pc(&self) -> Option<Address> {
        match self {
            RuntimeError::AddressOutOfProgram { pc }
            | RuntimeError::UnknownOpcode { pc, .. }
            | RuntimeError::DivisionByZero { pc }
            | RuntimeError::InvalidOperandForm { pc, .. }
            | RuntimeError::MalformedOperand { pc, .. }
            | RuntimeError::InvalidAddress { pc, .. } => Some(*pc),
            RuntimeError::CycleLimitExceeded { .. } => None,
        }
    }

    /// Check if this error faults the machine
    ///
    /// Hitting the cycle limit only stops `run`; the machine can keep stepping.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RuntimeError::CycleLimitExceeded { .. })
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
