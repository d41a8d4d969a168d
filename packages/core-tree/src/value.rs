//! The Value type - the tree every namespace stores.

use std::collections::BTreeMap;

/// A tree-shaped value held inside a namespace.
///
/// `Map` and `Array` are the structured kinds that nest; everything else is
/// a leaf. A slot can hold `Null` and still count as present, which is why
/// `Null` is a value and not an absence marker.
///
/// # Design Notes
///
/// - Uses `BTreeMap` for deterministic ordering (snapshots compare stably)
/// - Uses `i64` for integers, `f64` for floats
/// - Includes `Bytes` so binary leaves don't have to masquerade as strings
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence of a value. Distinct from "key doesn't exist".
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Binary data.
    Bytes(Vec<u8>),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// Key-value map with string keys.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(BTreeMap::new())
    }

    /// Create an empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Check if this value is a leaf, i.e. anything that cannot nest.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::Map(_) | Value::Array(_))
    }

    /// Short name of this value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
        }
    }
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert!(Value::default().is_null());
    }

    #[test]
    fn kind_predicates() {
        assert!(Value::map().is_map());
        assert!(Value::array().is_array());
        assert!(!Value::map().is_leaf());
        assert!(!Value::array().is_leaf());
        assert!(Value::Null.is_leaf());
        assert!(Value::from("text").is_leaf());
        assert!(Value::from(vec![0u8, 1u8]).is_leaf());
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(true).kind(), "bool");
        assert_eq!(Value::from(1).kind(), "integer");
        assert_eq!(Value::from(1.5).kind(), "float");
        assert_eq!(Value::from("x").kind(), "string");
        assert_eq!(Value::from(vec![0u8]).kind(), "bytes");
        assert_eq!(Value::array().kind(), "array");
        assert_eq!(Value::map().kind(), "map");
    }

    #[test]
    fn from_conversions() {
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from("hello"), Value::String("hello".to_string()));
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
    }

    #[test]
    fn byte_vectors_stay_bytes() {
        // Vec<u8> must hit the Bytes conversion, not the generic array one
        assert_eq!(Value::from(vec![1u8, 2u8]), Value::Bytes(vec![1, 2]));
    }
}
