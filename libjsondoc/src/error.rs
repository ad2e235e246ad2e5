//! Error types for JSON document reading and access.

use thiserror::Error;

use crate::lexer::Tag;

/// Result type for tokenizing, parsing, and value access.
pub type Result<T> = std::result::Result<T, Error>;

/// Default container nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse context carrying the filename and parser settings.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub filename: Option<String>,
    /// Reject unterminated strings and content after the root value.
    pub strict: bool,
    pub max_depth: usize,
}

impl ParseContext {
    /// Create a new permissive parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Switch to strict mode.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Override the container nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed string or integer literal.
    Lex,
    /// Token cursor dereferenced past the end of the sequence.
    CursorRange,
    /// Token does not fit the grammar.
    Syntax,
    /// Typed accessor used on the wrong variant.
    TypeMismatch,
    /// Object lookup with an absent key.
    KeyNotFound,
    /// Array lookup past the last element.
    IndexOutOfRange,
}

/// Error type for JSON documents.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown character after a backslash.
    #[error("Invalid escape sequence \\{0} in string literal")]
    BadEscape(char),

    /// Backslash as the last character of the input.
    #[error("Unterminated escape sequence at end of input")]
    DanglingEscape,

    /// String literal without a closing quote.
    #[error("Unterminated string literal")]
    UnterminatedString,

    /// Integer literal larger than `i64::MAX`.
    #[error("Integer literal {0} does not fit in 64 bits")]
    IntegerOutOfRange(String),

    /// Cursor read at or past the end of the token sequence.
    #[error("Token cursor at {index} is past the end of {len} tokens")]
    CursorOutOfRange { index: usize, len: usize },

    /// A required token was not found.
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: Tag, found: Tag },

    /// No value production starts with this token.
    #[error("Unexpected {0} while parsing a value")]
    UnexpectedValueToken(Tag),

    /// Content after the root value.
    #[error("Unexpected {0} after top-level value")]
    TrailingContent(Tag),

    /// Containers nested beyond the configured limit.
    #[error("Nesting deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("Expected {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Key {0:?} not found in object")]
    KeyNotFound(String),

    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Error raised while reading a named source.
    #[error("{source} in <{filename}>")]
    InFile {
        filename: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BadEscape(_)
            | Error::DanglingEscape
            | Error::UnterminatedString
            | Error::IntegerOutOfRange(_) => ErrorKind::Lex,
            Error::CursorOutOfRange { .. } => ErrorKind::CursorRange,
            Error::UnexpectedToken { .. }
            | Error::UnexpectedValueToken(_)
            | Error::TrailingContent(_)
            | Error::NestingTooDeep(_) => ErrorKind::Syntax,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::KeyNotFound(_) => ErrorKind::KeyNotFound,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::InFile { source, .. } => source.kind(),
        }
    }

    /// Attach the context's filename, if any, to this error.
    pub fn in_file(self, ctx: &ParseContext) -> Self {
        match &ctx.filename {
            Some(name) => Error::InFile {
                filename: name.clone(),
                source: Box::new(self),
            },
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::BadEscape('q').to_string(),
            "Invalid escape sequence \\q in string literal"
        );
        assert_eq!(
            Error::UnexpectedToken {
                expected: Tag::ArrayClose,
                found: Tag::EndOfInput,
            }
            .to_string(),
            "Expected ']', found end of input"
        );
        assert_eq!(
            Error::KeyNotFound("port".into()).to_string(),
            "Key \"port\" not found in object"
        );
    }

    #[test]
    fn test_in_file() {
        let ctx = ParseContext::new(Some("config.json"));
        let err = Error::UnexpectedValueToken(Tag::Comma).in_file(&ctx);
        assert_eq!(
            err.to_string(),
            "Unexpected ',' while parsing a value in <config.json>"
        );
        assert_eq!(err.kind(), ErrorKind::Syntax);

        let err = Error::DanglingEscape.in_file(&ParseContext::default());
        assert!(matches!(err, Error::DanglingEscape));
    }

    #[test]
    fn test_context_builder() {
        let ctx = ParseContext::new(None).strict().with_max_depth(4);
        assert!(ctx.strict);
        assert_eq!(ctx.max_depth, 4);
        assert!(!ParseContext::default().strict);
    }
}
