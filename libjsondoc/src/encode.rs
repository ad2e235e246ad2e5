//! Encode values back to JSON text.
//!
//! The output only uses the escapes the tokenizer understands, so anything
//! written here reads back to an equal value.

use crate::Value;

/// Output layout for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Single line, no whitespace.
    Compact,
    /// Two-space indentation, one member per line.
    Pretty,
}

/// Encode a value to a string. Object keys are written in sorted order.
pub fn encode(value: &Value, format: Format) -> String {
    match format {
        Format::Compact => encode_compact(value),
        Format::Pretty => encode_pretty(value, 0),
    }
}

fn sorted_keys(obj: &std::collections::HashMap<String, Value>) -> Vec<&String> {
    let mut keys: Vec<&String> = obj.keys().collect();
    keys.sort();
    keys
}

fn encode_compact(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::String(s) => encode_string(s),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(encode_compact).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(obj) => {
            let items: Vec<String> = sorted_keys(obj)
                .iter()
                .map(|k| format!("{}:{}", encode_string(k), encode_compact(&obj[*k])))
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }
}

fn encode_pretty(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let pad1 = "  ".repeat(indent + 1);

    match value {
        Value::Integer(n) => n.to_string(),
        Value::String(s) => encode_string(s),
        Value::Array(arr) => {
            if arr.is_empty() {
                return "[]".to_string();
            }
            let items: Vec<String> = arr
                .iter()
                .map(|v| format!("{}{}", pad1, encode_pretty(v, indent + 1)))
                .collect();
            format!("[\n{}\n{}]", items.join(",\n"), pad)
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                return "{}".to_string();
            }
            let items: Vec<String> = sorted_keys(obj)
                .iter()
                .map(|k| {
                    format!(
                        "{}{}: {}",
                        pad1,
                        encode_string(k),
                        encode_pretty(&obj[*k], indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", items.join(",\n"), pad)
        }
    }
}

fn encode_string(s: &str) -> String {
    let mut result = String::from("\"");
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample() -> Value {
        Value::Object(HashMap::from([
            ("port".to_string(), Value::from(5432)),
            (
                "hosts".to_string(),
                Value::from(vec![Value::from("a"), Value::from("b")]),
            ),
        ]))
    }

    #[test]
    fn test_encode_compact() {
        assert_eq!(
            encode(&sample(), Format::Compact),
            r#"{"hosts":["a","b"],"port":5432}"#
        );
    }

    #[test]
    fn test_encode_pretty() {
        assert_eq!(
            encode(&sample(), Format::Pretty),
            "{\n  \"hosts\": [\n    \"a\",\n    \"b\"\n  ],\n  \"port\": 5432\n}"
        );
    }

    #[test]
    fn test_encode_string_escapes() {
        let value = Value::from("say \"hi\"\n\\\t\r'");
        assert_eq!(
            encode(&value, Format::Compact),
            r#""say \"hi\"\n\\\t\r'""#
        );
    }

    #[test]
    fn test_display_is_compact() {
        assert_eq!(sample().to_string(), encode(&sample(), Format::Compact));
    }
}
