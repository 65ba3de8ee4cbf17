use derive_more::Display;

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenType {
    #[display(fmt = "(")]
    LeftParen,
    #[display(fmt = ")")]
    RightParen,

    #[display(fmt = "number")]
    Number,

    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "*")]
    Star,
    #[display(fmt = "/")]
    Slash,

    #[display(fmt = "end of input")]
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenType,
    pub lexeme: &'a str,
    // only set for `TokenType::Number`
    pub literal: Option<f64>,
    pub line: usize,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenType, lexeme: &'a str, line: usize, span: Span) -> Self {
        Token {
            kind,
            lexeme,
            literal: None,
            line,
            span,
        }
    }

    pub fn number(lexeme: &'a str, literal: Option<f64>, line: usize, span: Span) -> Self {
        Token {
            literal,
            ..Token::new(TokenType::Number, lexeme, line, span)
        }
    }
}
