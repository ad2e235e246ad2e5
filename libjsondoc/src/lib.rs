//! Minimal JSON document reader.
//!
//! Reads objects, arrays, strings, and non-negative integers into an owned
//! value tree with typed accessors. Floats, booleans, null, and `\u`
//! escapes are not part of the grammar.
//!
//! # Parsing Pipeline
//!
//! The reader operates in three phases:
//!
//! 1. **Tokenizer**: Scans source text into tokens, resolving string
//!    escapes and skipping whitespace and stray characters.
//!
//! 2. **Token Cursor**: Wraps the token sequence with a single read
//!    position and the `expect` / `peek_tag` operations.
//!
//! 3. **Value Parser**: Recursively parses the token stream into a
//!    [`Value`] tree owned by a [`Document`].

mod cursor;
mod document;
mod encode;
mod error;
mod lexer;
mod parser;
mod value;

pub use cursor::TokenCursor;
pub use document::Document;
pub use encode::{encode, Format};
pub use error::{Error, ErrorKind, ParseContext, Result, DEFAULT_MAX_DEPTH};
pub use lexer::{tokenize, tokenize_with, Tag, Token};
pub use value::{Value, ValueIndex};

use tracing::debug;

/// Parse a JSON document from a string.
///
/// # Example
///
/// ```
/// use libjsondoc::parse_document;
///
/// let doc = parse_document(r#"{"db": {"port": 5432}}"#).unwrap();
/// assert_eq!(doc.path("db.port").unwrap().as_integer().unwrap(), 5432);
/// ```
pub fn parse_document(input: &str) -> Result<Document> {
    parse_with_context(input, &ParseContext::default())
}

/// Parse a JSON document from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Document> {
    parse_with_context(input, &ParseContext::new(filename))
}

/// Parse a JSON document with explicit settings.
pub fn parse_with_context(input: &str, ctx: &ParseContext) -> Result<Document> {
    // Phase 1: Scan source into tokens
    let tokens = lexer::tokenize_with(input, ctx).map_err(|e| e.in_file(ctx))?;

    // Phase 2: Wrap tokens in a cursor
    let mut cursor = TokenCursor::new(tokens);

    // Phase 3: Parse tokens into a value tree
    let root = parser::parse_root(&mut cursor, ctx).map_err(|e| e.in_file(ctx))?;

    debug!(
        filename = ctx.filename.as_deref().unwrap_or("<input>"),
        kind = root.kind(),
        tokens = cursor.len(),
        "parsed document"
    );
    Ok(Document::new(root))
}
