//! # Lexer for RAM program lines
//!
//! Lines are lexed one at a time. Comment lines are dropped before lexing,
//! so a `#` here always starts an operand token (`#5`).

use logos::Logos;
use num_bigint::BigInt;

/// Tokens of one program line
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    /// Signed decimal integer
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<BigInt>().ok(), priority = 3)]
    Number(BigInt),

    /// Any other whitespace-delimited word (mnemonics, operand tokens)
    #[regex(r"[^ \t\r\n]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

/// Split a line into raw token slices
///
/// Returns `Err(column)` at the first byte the lexer cannot match.
pub fn words(line: &str) -> std::result::Result<Vec<(Token, &str)>, usize> {
    let mut lex = Token::lexer(line);
    let mut out = Vec::new();
    while let Some(token) = lex.next() {
        match token {
            Ok(token) => out.push((token, lex.slice())),
            Err(()) => return Err(lex.span().start + 1),
        }
    }
    Ok(out)
}
