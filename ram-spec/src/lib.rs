//! # RAM Specification
//!
//! Shared vocabulary for the Random Access Machine: a single-accumulator
//! register machine over an unbounded array of integer registers.
//!
//! ## Key Features
//! - Nine instructions: LOAD, STORE, ADD, SUB, MULT, DIV, GOTO, JZERO, END
//! - Three addressing modes: immediate (`#k`), direct (`k`), indirect (`*k`)
//! - Unbounded signed register values (`num_bigint::BigInt`)
//! - Register 0 is the accumulator
//! - Program address 0 is the halt sentinel; execution starts at address 1

pub mod value;
pub mod opcode;
pub mod operand;
pub mod instruction;
pub mod error;
pub mod program;

pub use value::{cost, to_address, Address, Value};
pub use opcode::Opcode;
pub use operand::{AddressingMode, Operand};
pub use instruction::Instruction;
pub use error::{Result, SpecError};
pub use program::Program;

/// Register address of the accumulator
pub const ACCUMULATOR: Address = 0;

/// Program counter value that halts the machine
pub const HALT: Address = 0;

/// Program address of the first executed instruction
pub const ENTRY_POINT: Address = 1;
