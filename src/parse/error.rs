use crate::span::Span;
use crate::token::TokenType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("Character `{0}` on line {1} at position {2} is not recognized")]
    UnrecognizedCharacter(char, usize, Span),
}

impl LexError {
    pub fn get_source_start(&self, input: &str) -> (usize, usize) {
        match self {
            LexError::UnrecognizedCharacter(_, _, s) => s.to_start_row_col(input),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected token `{0}` at position {1}, expected a number or `(`")]
    UnexpectedToken(TokenType, Span),

    #[error("Missing closing paren for `(` at position {0}, found `{1}` at position {2}")]
    MissingClosingParen(Span, TokenType, Span),

    #[error("Number token at position {0} carries no value")]
    ParseToNumber(Span),

    #[error("Parentheses nested too deep at position {0}")]
    NestingTooDeep(Span),

    #[error("Unable to parse the next value because the tokens ended without EOF")]
    Eof,

    #[error("Leftover tokens starting with `{0}` at {1}")]
    Unfinished(TokenType, Span),
}

impl ParseError {
    pub fn get_source_start(&self, input: &str) -> (usize, usize) {
        use ParseError::*;
        match self {
            UnexpectedToken(_, s) => s.to_start_row_col(input),
            MissingClosingParen(_, _, s) => s.to_start_row_col(input),
            ParseToNumber(s) => s.to_start_row_col(input),
            NestingTooDeep(s) => s.to_start_row_col(input),
            Eof => (0, 0),
            Unfinished(_, s) => s.to_start_row_col(input),
        }
    }
}
