//! Program loading

use crate::error::{AssemblerError, Result};
use crate::parser::{parse_instruction, parse_registers};
use ram_spec::Program;
use std::path::Path;

/// Load program text into a [`Program`]
pub fn assemble(source: &str) -> Result<Program> {
    let mut registers = None;
    let mut program = Program::default();

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        if registers.is_none() {
            registers = Some(parse_registers(line_no, text)?);
        } else {
            program.push(parse_instruction(line_no, text)?);
        }
    }

    program.registers = registers.ok_or(AssemblerError::MissingRegisters)?;
    Ok(program)
}

/// Read and load a program file
pub fn load(path: impl AsRef<Path>) -> Result<Program> {
    let source = std::fs::read_to_string(path)?;
    assemble(&source)
}
