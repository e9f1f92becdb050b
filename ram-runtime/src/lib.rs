//! # RAM Runtime
//!
//! Execute programs for the Random Access Machine: a single-accumulator
//! register machine over an unbounded array of integer registers.
//!
//! ## Features
//!
//! - **Self-expanding registers**: every register reads as 0 until written
//! - **Three addressing modes**: immediate `#k`, direct `k`, indirect `*k`
//! - **Resumable stepping**: `step` runs one cycle, `run` runs to halt
//! - **Cost accounting**: logarithmic time and space of each run
//! - **Observer hook**: per-cycle machine snapshots for tracing
//!
//! ## Example
//!
//! ```rust
//! use ram_runtime::{Machine, MachineConfig};
//! use ram_spec::{Instruction, Program, Value};
//!
//! let program = Program::new(vec![
//!     Instruction::new("LOAD", "1"),
//!     Instruction::new("MULT", "2"),
//!     Instruction::new("END", "0"),
//! ])
//! .with_registers([0, 6, 7]);
//!
//! let mut vm = Machine::new(program, MachineConfig::default());
//! let result = vm.run().unwrap();
//! assert_eq!(result.accumulator, Value::from(42));
//! ```

pub mod error;
pub mod registers;
pub mod decode;
pub mod state;
pub mod execute;
pub mod cost;
pub mod observer;
pub mod vm;

pub use error::RuntimeError;
pub use registers::RegisterStore;
pub use decode::OperandDecoder;
pub use state::{MachineState, Status};
pub use execute::{execute, Executed};
pub use cost::{CostMeter, CostReport};
pub use observer::{NoopObserver, Observer, Snapshot};
pub use vm::{ExecutionResult, Machine, MachineConfig};

/// Simple execution helper
///
/// Runs a program to completion and returns the final accumulator.
pub fn run(program: ram_spec::Program) -> Result<ram_spec::Value, RuntimeError> {
    let mut vm = Machine::new(program, MachineConfig::default());
    Ok(vm.run()?.accumulator)
}
