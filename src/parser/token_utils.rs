use std::collections::VecDeque;

use errors::{expected, Error, Span};

use super::Token;

/// Tokens of one nesting level. `end` is where "expected ..." errors point
/// once the level runs out of tokens.
pub struct TokenStream {
    tokens: VecDeque<Token>,
    end: Span,
}

impl TokenStream {
    pub fn new(tokens: VecDeque<Token>, end: Span) -> Self {
        Self { tokens, end }
    }

    fn skip_comments(&mut self) {
        while matches!(self.tokens.front(), Some(Token::Comment(..))) {
            self.tokens.pop_front();
        }
    }

    pub fn at_end(&mut self) -> bool {
        self.skip_comments();
        self.tokens.is_empty()
    }

    pub fn get_token(&mut self) -> Option<Token> {
        self.skip_comments();
        self.tokens.pop_front()
    }

    pub fn expect_token(&mut self, what: &str) -> Result<Token, Error> {
        match self.get_token() {
            Some(token) => Ok(token),
            None => Err(expected(&self.end, what, "the end of the block")),
        }
    }
}

pub fn unexpected(token: &Token, what: &str) -> Error {
    expected(token.span(), what, &token.describe())
}
