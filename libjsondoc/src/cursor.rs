//! Phase 2: Token Cursor
//!
//! Wraps the token sequence with a single forward-only read position. The
//! parser consumes tokens exclusively through [`TokenCursor::expect`].

use crate::error::{Error, Result};
use crate::lexer::{Tag, Token};

/// Read position over an owned token sequence.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// The token under the cursor.
    pub fn current(&self) -> Result<&Token> {
        self.tokens.get(self.index).ok_or(Error::CursorOutOfRange {
            index: self.index,
            len: self.tokens.len(),
        })
    }

    /// Move to the next token. Range is checked by the next `current()`.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Consume the current token if it has the given tag.
    pub fn expect(&mut self, tag: Tag) -> Result<&Token> {
        let found = self.current()?.tag();
        if found != tag {
            return Err(Error::UnexpectedToken {
                expected: tag,
                found,
            });
        }
        let index = self.index;
        self.advance();
        Ok(&self.tokens[index])
    }

    /// Tag of the current token, without consuming it.
    pub fn peek_tag(&self) -> Result<Tag> {
        Ok(self.current()?.tag())
    }

    /// Consume an `Integer` token and return its value.
    pub fn expect_integer(&mut self) -> Result<i64> {
        match self.expect(Tag::Integer)? {
            Token::Integer(n) => Ok(*n),
            other => Err(Error::UnexpectedToken {
                expected: Tag::Integer,
                found: other.tag(),
            }),
        }
    }

    /// Consume a `String` token and return its text.
    pub fn expect_string(&mut self) -> Result<String> {
        match self.expect(Tag::String)? {
            Token::String(s) => Ok(s.clone()),
            other => Err(Error::UnexpectedToken {
                expected: Tag::String,
                found: other.tag(),
            }),
        }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
