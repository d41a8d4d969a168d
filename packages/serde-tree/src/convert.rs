//! Conversions between tree values and serde types.
//!
//! serde_json is the intermediary in both directions; everything the tree
//! can hold has a JSON rendition.

use serde::de::DeserializeOwned;
use serde::Serialize;

use cubby_core_tree::Value;

use crate::error::Error;

/// Build a [`Value`] from any serializable type.
pub fn to_value<T: Serialize>(data: &T) -> Result<Value, Error> {
    let json = serde_json::to_value(data).map_err(Error::Serialize)?;
    Ok(json_to_tree(json))
}

/// Deserialize a [`Value`] into a concrete type.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(tree_to_json(value)).map_err(Error::Deserialize)
}

fn tree_to_json(value: Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(b),
        Value::Integer(i) => serde_json::Value::Number(i.into()),
        Value::Float(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s),
        // JSON has no bytes, so base64 them into a string
        Value::Bytes(b) => {
            use base64::Engine;
            serde_json::Value::String(base64::engine::general_purpose::STANDARD.encode(b))
        }
        Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(tree_to_json).collect())
        }
        Value::Map(entries) => serde_json::Value::Object(
            entries
                .into_iter()
                .map(|(key, child)| (key, tree_to_json(child)))
                .collect(),
        ),
    }
}

fn json_to_tree(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                // fallback for numbers neither i64 nor f64 can carry
                Value::String(n.to_string())
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(json_to_tree).collect())
        }
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, child)| (key, json_to_tree(child)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Account {
        name: String,
        logins: u32,
        active: bool,
    }

    #[test]
    fn structs_round_trip() {
        let original = Account {
            name: "Ann".to_string(),
            logins: 3,
            active: true,
        };

        let value = to_value(&original).unwrap();
        assert!(value.is_map());

        let recovered: Account = from_value(value).unwrap();
        assert_eq!(recovered, original);
    }

    #[test]
    fn nested_collections_round_trip() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Group {
            members: Vec<String>,
            quota: Option<i64>,
        }

        let original = Group {
            members: vec!["ann".to_string(), "bo".to_string()],
            quota: None,
        };

        let recovered: Group = from_value(to_value(&original).unwrap()).unwrap();
        assert_eq!(recovered, original);
    }

    #[test]
    fn primitives_map_onto_leaf_kinds() {
        assert_eq!(to_value(&42i32).unwrap(), Value::Integer(42));
        assert_eq!(to_value(&-7i64).unwrap(), Value::Integer(-7));
        assert_eq!(to_value(&true).unwrap(), Value::Bool(true));
        assert_eq!(to_value(&"hi").unwrap(), Value::String("hi".to_string()));

        match to_value(&2.75f64).unwrap() {
            Value::Float(f) => assert!((f - 2.75).abs() < 1e-9),
            other => panic!("expected a float, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_floats_bridge_to_null() {
        let recovered: Option<f64> = from_value(Value::Float(f64::NAN)).unwrap();
        assert!(recovered.is_none());

        let recovered: Option<f64> = from_value(Value::Float(f64::INFINITY)).unwrap();
        assert!(recovered.is_none());
    }

    #[test]
    fn bytes_bridge_to_base64_strings() {
        let recovered: String = from_value(Value::Bytes(vec![1, 2, 3, 4])).unwrap();
        assert_eq!(recovered, "AQIDBA==");
    }

    #[test]
    fn decode_mismatch_is_an_error() {
        let result: Result<Account, _> = from_value(Value::String("not a map".to_string()));
        assert!(matches!(result, Err(Error::Deserialize(_))));
    }

    #[test]
    fn unencodable_map_keys_are_an_error() {
        use std::collections::BTreeMap;

        let mut sizes: BTreeMap<Vec<u8>, i64> = BTreeMap::new();
        sizes.insert(vec![1], 10);

        assert!(matches!(to_value(&sizes), Err(Error::Serialize(_))));
    }

    #[test]
    fn tree_values_survive_the_json_hop() {
        let tree = Value::Map(
            [
                ("flag".to_string(), Value::Bool(false)),
                ("count".to_string(), Value::Integer(12)),
                (
                    "items".to_string(),
                    Value::Array(vec![Value::Integer(1), Value::Null]),
                ),
            ]
            .into_iter()
            .collect(),
        );

        let recovered: Value = json_to_tree(tree_to_json(tree.clone()));
        assert_eq!(recovered, tree);
    }
}
