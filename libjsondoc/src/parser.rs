//! Phase 3: Value Parser
//!
//! Recursive descent over the token cursor:
//!
//! ```text
//! value   := integer | string | array | object
//! array   := '[' value (',' value)* ']'
//! object  := '{' member (',' member)* '}'
//! member  := string ':' value
//! ```
//!
//! Arrays and objects need at least one element, so `[]` and `{}` are
//! rejected.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::cursor::TokenCursor;
use crate::error::{Error, ParseContext, Result};
use crate::lexer::Tag;
use crate::value::Value;

/// Parse the root value of a document.
///
/// In strict mode the root must be followed by `EndOfInput`; otherwise any
/// remaining tokens are ignored.
pub fn parse_root(cursor: &mut TokenCursor, ctx: &ParseContext) -> Result<Value> {
    let value = parse_value(cursor, ctx, 0)?;

    let next = cursor.peek_tag()?;
    if next != Tag::EndOfInput {
        if ctx.strict {
            return Err(Error::TrailingContent(next));
        }
        debug!(
            remaining = cursor.len() - cursor.position() - 1,
            "ignoring tokens after top-level value"
        );
    }
    Ok(value)
}

/// Parse a single value at the cursor.
pub fn parse_value(cursor: &mut TokenCursor, ctx: &ParseContext, depth: usize) -> Result<Value> {
    let tag = cursor.peek_tag()?;
    trace!(?tag, depth, "parsing value");

    match tag {
        Tag::Integer => Ok(Value::Integer(cursor.expect_integer()?)),
        Tag::String => Ok(Value::String(cursor.expect_string()?)),
        Tag::ArrayOpen => parse_array(cursor, ctx, depth),
        Tag::ObjectOpen => parse_object(cursor, ctx, depth),
        other => Err(Error::UnexpectedValueToken(other)),
    }
}

fn enter(ctx: &ParseContext, depth: usize) -> Result<usize> {
    if depth >= ctx.max_depth {
        return Err(Error::NestingTooDeep(ctx.max_depth));
    }
    Ok(depth + 1)
}

fn parse_array(cursor: &mut TokenCursor, ctx: &ParseContext, depth: usize) -> Result<Value> {
    let depth = enter(ctx, depth)?;
    cursor.expect(Tag::ArrayOpen)?;

    let mut items = Vec::new();
    loop {
        items.push(parse_value(cursor, ctx, depth)?);
        if cursor.peek_tag()? != Tag::Comma {
            break;
        }
        cursor.advance();
    }

    cursor.expect(Tag::ArrayClose)?;
    Ok(Value::Array(items))
}

fn parse_object(cursor: &mut TokenCursor, ctx: &ParseContext, depth: usize) -> Result<Value> {
    let depth = enter(ctx, depth)?;
    cursor.expect(Tag::ObjectOpen)?;

    let mut obj = HashMap::new();
    loop {
        let key = cursor.expect_string()?;
        cursor.expect(Tag::Colon)?;
        let value = parse_value(cursor, ctx, depth)?;
        // Duplicate keys: last one wins.
        obj.insert(key, value);
        if cursor.peek_tag()? != Tag::Comma {
            break;
        }
        cursor.advance();
    }

    cursor.expect(Tag::ObjectClose)?;
    Ok(Value::Object(obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::lexer::tokenize;

    fn parse(source: &str) -> Result<Value> {
        parse_with(source, &ParseContext::default())
    }

    fn parse_with(source: &str, ctx: &ParseContext) -> Result<Value> {
        let mut cursor = TokenCursor::new(tokenize(source)?);
        parse_root(&mut cursor, ctx)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse("42").unwrap(), Value::Integer(42));
        assert_eq!(parse("\"hey\"").unwrap(), Value::String("hey".into()));
    }

    #[test]
    fn test_array() {
        assert_eq!(
            parse("[12, [1, 23]]").unwrap(),
            Value::from(vec![
                Value::from(12),
                Value::from(vec![Value::from(1), Value::from(23)]),
            ])
        );
    }

    #[test]
    fn test_object() {
        let value = parse("{\"db\": {\"host\": \"localhost\", \"port\": 5432}}").unwrap();
        let db = value.get("db").unwrap();
        assert_eq!(db.as_object().unwrap().len(), 2);
        assert_eq!(db.get("port").unwrap().as_integer().unwrap(), 5432);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let value = parse("{\"a\": 1, \"a\": 2}").unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
        assert_eq!(value.get("a").unwrap().as_integer().unwrap(), 2);
    }

    #[test]
    fn test_empty_containers_rejected() {
        let err = parse("[]").unwrap_err();
        assert!(matches!(err, Error::UnexpectedValueToken(Tag::ArrayClose)));

        let err = parse("{}").unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedToken {
                expected: Tag::String,
                found: Tag::ObjectClose
            }
        ));
    }

    #[test]
    fn test_unbalanced() {
        let err = parse("[1,2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.to_string(), "Expected ']', found end of input");

        let err = parse("{\"a\": [1}").unwrap_err();
        assert_eq!(err.to_string(), "Expected ']', found '}'");
    }

    #[test]
    fn test_trailing_comma() {
        let err = parse("[1,]").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected ']' while parsing a value");
    }

    #[test]
    fn test_missing_colon() {
        let err = parse("{\"a\" 1}").unwrap_err();
        assert_eq!(err.to_string(), "Expected ':', found integer");
    }

    #[test]
    fn test_empty_input() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, Error::UnexpectedValueToken(Tag::EndOfInput)));
    }

    #[test]
    fn test_trailing_tokens() {
        assert_eq!(
            parse("[12, [1, 23]]]").unwrap(),
            parse("[12, [1, 23]]").unwrap()
        );
        assert_eq!(parse("1 2 3").unwrap(), Value::Integer(1));

        let strict = ParseContext::default().strict();
        let err = parse_with("[1]]", &strict).unwrap_err();
        assert!(matches!(err, Error::TrailingContent(Tag::ArrayClose)));
        assert!(parse_with("[1]", &strict).is_ok());
    }

    #[test]
    fn test_nesting_limit() {
        let ctx = ParseContext::default().with_max_depth(2);
        assert!(parse_with("[[1]]", &ctx).is_ok());

        let err = parse_with("[[[1]]]", &ctx).unwrap_err();
        assert!(matches!(err, Error::NestingTooDeep(2)));

        let deep = format!("{}1{}", "[".repeat(10_000), "]".repeat(10_000));
        assert!(matches!(parse(&deep), Err(Error::NestingTooDeep(_))));
    }
}
