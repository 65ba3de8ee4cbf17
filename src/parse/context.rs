use crate::token::{Token, TokenType};

use super::error::ParseError;

const MAX_NESTING: usize = 256;

pub struct Context<'a> {
    items: &'a [Token<'a>],
    curr_pos: usize,
    depth: usize,
}

impl<'a> Context<'a> {
    pub fn new(items: &'a [Token<'a>]) -> Self {
        Self {
            items,
            curr_pos: 0,
            depth: 0,
        }
    }

    pub fn get_curr(&self) -> Result<Token<'a>, ParseError> {
        match self.items.get(self.curr_pos) {
            Some(li) => Ok(*li),
            None => Err(ParseError::Eof),
        }
    }

    pub fn advance(&mut self) {
        self.curr_pos += 1;
    }

    /// Consumes and returns the current token if its type is one of
    /// `match_tokens`; the cursor does not move otherwise.
    pub fn match_any(&mut self, match_tokens: &'static [TokenType]) -> Option<Token<'a>> {
        let li = self
            .items
            .get(self.curr_pos)
            .filter(|li| match_tokens.contains(&li.kind))
            .copied()?;
        self.advance();
        Some(li)
    }

    pub fn enter_group(&mut self, open: Token<'a>) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep(open.span));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
