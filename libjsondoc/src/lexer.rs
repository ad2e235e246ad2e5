//! Phase 1: Tokenizer
//!
//! The tokenizer scans source text once, left to right, and emits:
//! - Structural tokens for `{ } [ ] , :`
//! - `Integer` for runs of decimal digits
//! - `String` for double-quoted literals, with escapes resolved
//! - A final `EndOfInput`
//!
//! Everything else outside a string literal (whitespace, line breaks,
//! letters, signs) is skipped without producing a token.

use std::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::trace;

use crate::error::{Error, ParseContext, Result};

/// Token discriminant without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
    Comma,
    Colon,
    Integer,
    String,
    EndOfInput,
}

impl Tag {
    /// The source character for structural tags.
    pub fn symbol(self) -> Option<char> {
        match self {
            Tag::ObjectOpen => Some('{'),
            Tag::ObjectClose => Some('}'),
            Tag::ArrayOpen => Some('['),
            Tag::ArrayClose => Some(']'),
            Tag::Comma => Some(','),
            Tag::Colon => Some(':'),
            Tag::Integer | Tag::String | Tag::EndOfInput => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(c) => write!(f, "'{}'", c),
            None => match self {
                Tag::Integer => write!(f, "integer"),
                Tag::String => write!(f, "string"),
                _ => write!(f, "end of input"),
            },
        }
    }
}

/// A single token in the token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
    Comma,
    Colon,
    Integer(i64),
    /// Unescaped string contents.
    String(String),
    EndOfInput,
}

impl Token {
    pub fn tag(&self) -> Tag {
        match self {
            Token::ObjectOpen => Tag::ObjectOpen,
            Token::ObjectClose => Tag::ObjectClose,
            Token::ArrayOpen => Tag::ArrayOpen,
            Token::ArrayClose => Tag::ArrayClose,
            Token::Comma => Tag::Comma,
            Token::Colon => Tag::Colon,
            Token::Integer(_) => Tag::Integer,
            Token::String(_) => Tag::String,
            Token::EndOfInput => Tag::EndOfInput,
        }
    }
}

/// Tokenize source text with the default (permissive) context.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    tokenize_with(source, &ParseContext::default())
}

/// Tokenize source text. The returned sequence always ends with `EndOfInput`.
pub fn tokenize_with(source: &str, ctx: &ParseContext) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_ascii_digit() {
            let mut end = start + 1;
            while let Some(&(i, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                end = i + 1;
                chars.next();
            }
            tokens.push(Token::Integer(integer_literal(&source[start..end])?));
        } else if c == '"' {
            tokens.push(Token::String(string_literal(&mut chars, ctx)?));
        } else if let Some(token) = symbol_token(c) {
            tokens.push(token);
        }
    }

    tokens.push(Token::EndOfInput);
    trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

/// Map a structural character to its token.
fn symbol_token(c: char) -> Option<Token> {
    match c {
        '{' => Some(Token::ObjectOpen),
        '}' => Some(Token::ObjectClose),
        '[' => Some(Token::ArrayOpen),
        ']' => Some(Token::ArrayClose),
        ',' => Some(Token::Comma),
        ':' => Some(Token::Colon),
        _ => None,
    }
}

/// Convert a run of ASCII digits to an `i64`.
///
/// The run is read exactly, whatever its length, so literals past
/// `i64::MAX` are reported rather than wrapped.
fn integer_literal(digits: &str) -> Result<i64> {
    let n = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| Error::IntegerOutOfRange(digits.to_string()))?;
    n.to_i64().ok_or_else(|| Error::IntegerOutOfRange(n.to_string()))
}

/// Read a string literal after its opening quote.
fn string_literal<I>(chars: &mut I, ctx: &ParseContext) -> Result<String>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut text = String::new();
    loop {
        match chars.next() {
            None if ctx.strict => return Err(Error::UnterminatedString),
            None => return Ok(text),
            Some((_, '"')) => return Ok(text),
            Some((_, '\\')) => match chars.next() {
                Some((_, esc)) => text.push(unescape(esc)?),
                None => return Err(Error::DanglingEscape),
            },
            Some((_, c)) => text.push(c),
        }
    }
}

fn unescape(esc: char) -> Result<char> {
    match esc {
        'r' => Ok('\r'),
        'n' => Ok('\n'),
        't' => Ok('\t'),
        '\\' | '"' | '\'' => Ok(esc),
        other => Err(Error::BadEscape(other)),
    }
}
