//! Program line parser

use crate::error::{AssemblerError, Result};
use crate::lexer::{words, Token};
use ram_spec::{Instruction, Value};

/// Parse the register initialisation line
pub fn parse_registers(line_no: usize, line: &str) -> Result<Vec<Value>> {
    lex(line_no, line)?
        .into_iter()
        .map(|(token, raw)| match token {
            Token::Number(value) => Ok(value),
            Token::Word(_) => Err(AssemblerError::InvalidRegisterValue {
                line: line_no,
                token: raw.to_string(),
            }),
        })
        .collect()
}

/// Parse a `NUM COMMAND ARG` line
///
/// `NUM` is not interpreted. A missing `ARG` yields an empty operand, which
/// only END accepts at run time. Words after `ARG` are ignored.
pub fn parse_instruction(line_no: usize, line: &str) -> Result<Instruction> {
    let tokens = lex(line_no, line)?;
    let mut raw = tokens.iter().map(|(_, text)| *text).skip(1);

    let mnemonic = raw.next().ok_or_else(|| AssemblerError::SyntaxError {
        line: line_no,
        message: "expected `NUM COMMAND ARG`".to_string(),
    })?;
    let operand = raw.next().unwrap_or_default();

    Ok(Instruction::new(mnemonic, operand))
}

fn lex(line_no: usize, line: &str) -> Result<Vec<(Token, &str)>> {
    words(line).map_err(|column| AssemblerError::SyntaxError {
        line: line_no,
        message: format!("unexpected character at column {}", column),
    })
}
