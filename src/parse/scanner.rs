use log::warn;
use phf::phf_map;

use super::error::LexError;
use crate::span::Span;
use crate::token::{Token, TokenType};

static PUNCTUATION: phf::Map<char, TokenType> = phf_map! {
    '-' => TokenType::Minus,
    '+' => TokenType::Plus,
    '(' => TokenType::LeftParen,
    ')' => TokenType::RightParen,
    '*' => TokenType::Star,
    '/' => TokenType::Slash,
};

#[derive(Debug)]
pub struct ScanOutput<'a> {
    pub tokens: Vec<Token<'a>>,
    pub warnings: Vec<LexError>,
}

/// Scans the whole input. Never fails: unrecognized characters are logged,
/// collected into `warnings` and skipped. The returned tokens always end with
/// exactly one `TokenType::Eof`.
pub fn scan(input: &str) -> ScanOutput<'_> {
    Scanner::new(input).scan_tokens()
}

struct Scanner<'a> {
    input: &'a str,
    tokens: Vec<Token<'a>>,
    warnings: Vec<LexError>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            tokens: vec![],
            warnings: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    fn scan_tokens(mut self) -> ScanOutput<'a> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        let end = self.input.len();
        self.tokens
            .push(Token::new(TokenType::Eof, "", self.line, Span::empty(end)));

        ScanOutput {
            tokens: self.tokens,
            warnings: self.warnings,
        }
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        if let Some(kind) = PUNCTUATION.get(&c) {
            self.add_token(*kind);
            return;
        }

        match c {
            '0'..='9' => self.lex_number(),
            '\n' => self.line += 1,
            // '\r' of CRLF line endings
            ' ' | '\t' | '\r' => {
                // skip
            }
            _ => {
                let err = LexError::UnrecognizedCharacter(c, self.line, self.current_span());
                warn!("{}", err);
                self.warnings.push(err);
            }
        }
    }

    fn lex_number(&mut self) {
        self.skip_digits();

        // a trailing '.' without digits is not part of the number
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.skip_digits();
        }

        let span = self.current_span();
        let lexeme = span.str_from_source(self.input);
        self.tokens.push(Token::number(
            lexeme,
            lexeme.parse::<f64>().ok(),
            self.line,
            span,
        ));
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn add_token(&mut self, kind: TokenType) {
        let span = self.current_span();
        self.tokens.push(Token::new(
            kind,
            span.str_from_source(self.input),
            self.line,
            span,
        ));
    }

    fn current_span(&self) -> Span {
        Span::new(self.start, self.current)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.input.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.input[self.current..].chars().nth(1)
    }
}
