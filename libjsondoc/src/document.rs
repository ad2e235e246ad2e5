//! Owning handle for a parsed value tree.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::value::{Value, ValueIndex};

/// A fully parsed JSON document. Dropping it frees the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The root value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Take ownership of the root value.
    pub fn into_root(self) -> Value {
        self.root
    }

    pub fn get(&self, key: &str) -> Result<&Value> {
        self.root.get(key)
    }

    pub fn at(&self, position: usize) -> Result<&Value> {
        self.root.at(position)
    }

    pub fn index<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        self.root.index(index)
    }

    /// See [`Value::path`].
    pub fn path(&self, path: &str) -> Result<&Value> {
        self.root.path(path)
    }
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_document(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let doc: Document = "{\"db\": {\"host\": \"localhost\"}}".parse().unwrap();
        assert_eq!(doc.path("db.host").unwrap().as_str().unwrap(), "localhost");
        assert_eq!(doc.index("db").unwrap(), doc.get("db").unwrap());
        assert!("[1,".parse::<Document>().is_err());
    }

    #[test]
    fn test_into_root() {
        let doc = Document::new(Value::from(vec![Value::from(7)]));
        assert_eq!(doc.at(0).unwrap().as_integer().unwrap(), 7);
        assert_eq!(doc.into_root(), Value::from(vec![Value::from(7)]));
    }
}
