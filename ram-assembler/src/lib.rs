//! RAM Program Loader
//!
//! Load line-oriented RAM program text into a [`ram_spec::Program`].
//!
//! ## Format
//!
//! - Lines whose first non-blank character is `#` are comments.
//! - The first remaining line holds the initial register values, starting
//!   with the accumulator.
//! - Every later line is `NUM COMMAND ARG`. `NUM` is free-form (usually the
//!   line number), anything after `ARG` is ignored.
//!
//! ## Example
//!
//! ```rust
//! use ram_assembler::assemble;
//!
//! let source = r#"
//! ## multiply R1 and R2
//! 0 3 6
//! 1 LOAD 1
//! 2 MULT 2
//! 3 END 0
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.len(), 3);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::{assemble, load};
pub use parser::{parse_instruction, parse_registers};
