/*
 * Copyright (c) 2025 Imgur API Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Navigable wrapper around decoded API responses.
//!
//! Imgur responses are not deserialized into fixed structs. Instead the decoded
//! JSON is wrapped in a [`ResponseEnvelope`] which can be walked one field or
//! index at a time:
//!
//! ```rust
//! use imgurapi::v3::ResponseEnvelope;
//! use serde_json::json;
//!
//! let resp = ResponseEnvelope::new(json!({"data": {"id": "3MvMVho", "tags": []}}));
//! let data = resp.get("data").unwrap();
//! assert_eq!(data.get("id").unwrap(), json!("3MvMVho"));
//! assert!(resp.get("missing").is_err());
//! ```
//!
//! Nested objects and arrays come back wrapped in a new envelope named after the
//! accessor. Scalars come back as plain [`serde_json::Value`]s, still tagged
//! with the accessor so errors can name them.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Default name of the root envelope
pub const ROOT_NAME: &str = "data";

/// Invalid navigation into an envelope
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("'{name}' object represents an array, use index access (`at`) instead")]
    NotAnObject { name: String },

    #[error("'{name}' object does not have '{field}' attribute")]
    NoSuchField { field: String, name: String },

    #[error("Unable to get item by index '{index}' of array '{name}'")]
    IndexOutOfRange { index: usize, name: String },

    #[error("'{name}' is a scalar value and cannot be navigated with '{accessor}'")]
    NotNavigable { accessor: String, name: String },
}

/// Key used by [`ResponseEnvelope::at`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name.as_str())
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Wraps a decoded JSON value together with a name used in error messages.
#[derive(Clone, PartialEq)]
pub struct ResponseEnvelope {
    value: Value,
    name: String,
}

impl ResponseEnvelope {
    /// Wraps `value` under the default `"data"` name
    pub fn new(value: Value) -> Self {
        Self::with_name(value, ROOT_NAME)
    }

    pub fn with_name(value: Value, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_array(&self) -> bool {
        self.value.is_array()
    }

    pub fn is_object(&self) -> bool {
        self.value.is_object()
    }

    /// Attribute style access to an object field
    pub fn get(&self, field: &str) -> Result<Navigated, EnvelopeError> {
        match &self.value {
            Value::Array(_) => Err(EnvelopeError::NotAnObject {
                name: self.name.clone(),
            }),
            Value::Object(map) => map
                .get(field)
                .map(|v| Navigated::descend(v, field))
                .ok_or_else(|| EnvelopeError::NoSuchField {
                    field: field.to_string(),
                    name: self.name.clone(),
                }),
            _ => Err(EnvelopeError::NotNavigable {
                accessor: field.to_string(),
                name: self.name.clone(),
            }),
        }
    }

    /// Index access for arrays, key access for objects
    pub fn at<'k>(&self, key: impl Into<Key<'k>>) -> Result<Navigated, EnvelopeError> {
        let key = key.into();
        match (&self.value, key) {
            (Value::Array(items), Key::Index(index)) => items
                .get(index)
                .map(|v| Navigated::descend(v, &key.to_string()))
                .ok_or_else(|| EnvelopeError::IndexOutOfRange {
                    index,
                    name: self.name.clone(),
                }),
            (Value::Array(_), Key::Name(_)) => Err(EnvelopeError::NotAnObject {
                name: self.name.clone(),
            }),
            (Value::Object(map), _) => {
                let field = key.to_string();
                match map.get(&field) {
                    Some(v) => Ok(Navigated::descend(v, &field)),
                    None => Err(EnvelopeError::NoSuchField {
                        field,
                        name: self.name.clone(),
                    }),
                }
            }
            _ => Err(EnvelopeError::NotNavigable {
                accessor: key.to_string(),
                name: self.name.clone(),
            }),
        }
    }

    /// Top level keys of an object, in the order received. Empty for arrays.
    pub fn keys(&self) -> Vec<&str> {
        match &self.value {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Number of items of an array or fields of an object
    pub fn len(&self) -> usize {
        match &self.value {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The wrapped value without any further indirection
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl fmt::Display for ResponseEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(&self.value).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Debug for ResponseEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseEnvelope")
            .field("name", &self.name)
            .field("content", &format_args!("{}", self.value))
            .finish()
    }
}

impl From<ResponseEnvelope> for Value {
    fn from(envelope: ResponseEnvelope) -> Self {
        envelope.value
    }
}

/// Result of a navigation step
#[derive(Debug, Clone, PartialEq)]
pub enum Navigated {
    Object(ResponseEnvelope),
    Array(ResponseEnvelope),
    /// A raw JSON value along with the field or index it was read from
    Scalar { value: Value, name: String },
}

impl Navigated {
    fn descend(value: &Value, name: &str) -> Self {
        match value {
            Value::Object(_) => Navigated::Object(ResponseEnvelope::with_name(value.clone(), name)),
            Value::Array(_) => Navigated::Array(ResponseEnvelope::with_name(value.clone(), name)),
            _ => Navigated::Scalar {
                value: value.clone(),
                name: name.to_string(),
            },
        }
    }

    /// Continues navigation with [`ResponseEnvelope::get`]
    pub fn get(&self, field: &str) -> Result<Navigated, EnvelopeError> {
        match self {
            Navigated::Object(env) | Navigated::Array(env) => env.get(field),
            Navigated::Scalar { name, .. } => Err(EnvelopeError::NotNavigable {
                accessor: field.to_string(),
                name: name.clone(),
            }),
        }
    }

    /// Continues navigation with [`ResponseEnvelope::at`]
    pub fn at<'k>(&self, key: impl Into<Key<'k>>) -> Result<Navigated, EnvelopeError> {
        match self {
            Navigated::Object(env) | Navigated::Array(env) => env.at(key),
            Navigated::Scalar { name, .. } => Err(EnvelopeError::NotNavigable {
                accessor: Into::<Key>::into(key).to_string(),
                name: name.clone(),
            }),
        }
    }

    pub fn envelope(&self) -> Option<&ResponseEnvelope> {
        match self {
            Navigated::Object(env) | Navigated::Array(env) => Some(env),
            Navigated::Scalar { .. } => None,
        }
    }

    pub fn into_envelope(self) -> Option<ResponseEnvelope> {
        match self {
            Navigated::Object(env) | Navigated::Array(env) => Some(env),
            Navigated::Scalar { .. } => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Navigated::Scalar { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Value::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Value::as_i64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Value::as_bool)
    }

    /// The underlying JSON regardless of variant
    pub fn as_value(&self) -> &Value {
        match self {
            Navigated::Object(env) | Navigated::Array(env) => env.as_value(),
            Navigated::Scalar { value, .. } => value,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Navigated::Object(env) | Navigated::Array(env) => env.into_value(),
            Navigated::Scalar { value, .. } => value,
        }
    }
}

impl PartialEq<Value> for Navigated {
    fn eq(&self, other: &Value) -> bool {
        self.as_value() == other
    }
}

impl fmt::Display for Navigated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Navigated::Object(env) | Navigated::Array(env) => fmt::Display::fmt(env, f),
            Navigated::Scalar { value, .. } => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_field_and_index_access() {
        let env = ResponseEnvelope::new(json!({"a": {"b": 1}}));
        let a = env.get("a").unwrap();
        assert!(matches!(a, Navigated::Object(_)));
        assert_eq!(a.envelope().unwrap().name(), "a");
        assert_eq!(a.get("b").unwrap(), json!(1));
        assert_eq!(a.at("b").unwrap(), json!(1));
        assert_eq!(a.get("b").unwrap().as_i64(), Some(1));
    }

    #[test]
    fn missing_field_names_field_and_envelope() {
        let env = ResponseEnvelope::new(json!({"a": {"b": 1}}));
        let err = env.get("missing").unwrap_err();
        assert_eq!(
            err,
            EnvelopeError::NoSuchField {
                field: "missing".into(),
                name: "data".into()
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("missing") && msg.contains("data"));

        let err = env.at("missing").unwrap_err();
        assert!(matches!(err, EnvelopeError::NoSuchField { .. }));
    }

    #[test]
    fn arrays_reject_field_access() {
        let env = ResponseEnvelope::new(json!([1, 2, 3]));
        let err = env.get("x").unwrap_err();
        assert_eq!(err, EnvelopeError::NotAnObject { name: "data".into() });
        assert!(err.to_string().contains("index access"));
        assert!(matches!(env.at("x"), Err(EnvelopeError::NotAnObject { .. })));
    }

    #[test]
    fn array_index_bounds() {
        let env = ResponseEnvelope::new(json!([1, 2, 3]));
        assert_eq!(env.at(2).unwrap(), json!(3));
        let err = env.at(5).unwrap_err();
        assert_eq!(
            err,
            EnvelopeError::IndexOutOfRange {
                index: 5,
                name: "data".into()
            }
        );
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn nested_values_are_wrapped_and_scalars_are_not() {
        let env = ResponseEnvelope::new(json!({
            "data": {"tags": ["cat", {"name": "dog"}], "views": 0, "vote": null}
        }));
        let data = env.get("data").unwrap();
        let tags = data.get("tags").unwrap();
        assert!(matches!(tags, Navigated::Array(_)));
        assert_eq!(tags.envelope().unwrap().name(), "tags");
        assert_eq!(tags.at(0).unwrap().as_str(), Some("cat"));

        let second = tags.at(1).unwrap();
        assert!(matches!(second, Navigated::Object(_)));
        assert_eq!(second.envelope().unwrap().name(), "1");
        assert_eq!(second.get("name").unwrap(), json!("dog"));

        assert_eq!(data.get("vote").unwrap(), Value::Null);
        assert_eq!(
            data.get("views").unwrap().get("x"),
            Err(EnvelopeError::NotNavigable {
                accessor: "x".into(),
                name: "views".into(),
            })
        );
        assert_eq!(
            tags.at(0).unwrap().at(2),
            Err(EnvelopeError::NotNavigable {
                accessor: "2".into(),
                name: "0".into(),
            })
        );
    }

    #[test]
    fn scalar_root_cannot_be_navigated() {
        let env = ResponseEnvelope::new(json!(true));
        assert!(matches!(env.get("x"), Err(EnvelopeError::NotNavigable { .. })));
        assert!(matches!(env.at(0), Err(EnvelopeError::NotNavigable { .. })));
        assert!(env.keys().is_empty());
    }

    #[test]
    fn keys_keep_received_order() {
        let env = ResponseEnvelope::new(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        assert_eq!(env.keys(), vec!["zeta", "alpha", "mid"]);
        assert!(ResponseEnvelope::new(json!([1, 2])).keys().is_empty());
    }

    #[test]
    fn display_renders_whole_subtree_indented() {
        let env = ResponseEnvelope::new(json!({"b": {"c": [1]}, "a": true}));
        assert_eq!(
            env.to_string(),
            "{\n  \"b\": {\n    \"c\": [\n      1\n    ]\n  },\n  \"a\": true\n}"
        );
    }

    #[test]
    fn unwrap_matches_direct_extraction() {
        let original = json!({"data": {"images": [{"id": "x1", "size": 10}]}, "success": true});
        let env = ResponseEnvelope::new(original.clone());
        assert_eq!(env.as_value(), &original);

        let image = env
            .get("data")
            .and_then(|d| d.get("images"))
            .and_then(|i| i.at(0))
            .unwrap();
        assert_eq!(image.as_value(), &original["data"]["images"][0]);
        assert_eq!(image.into_envelope().unwrap().into_value(), original["data"]["images"][0]);
        assert_eq!(Value::from(env), original);
    }

    #[test]
    fn debug_shows_name_and_content() {
        let env = ResponseEnvelope::with_name(json!({"id": 1}), "comment");
        let rendered = format!("{env:?}");
        assert!(rendered.contains("comment"));
        assert!(rendered.contains("{\"id\":1}"));
    }
}
