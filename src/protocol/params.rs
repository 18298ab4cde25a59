//! Call parameters and the options that populate them.
//!
//! Parameters are a flat string-keyed map whose values are restricted to
//! JSON-representable kinds. Options are applied in order, so a later
//! option for the same key overwrites an earlier one.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ChainError, ChainResult};

/// A value allowed inside call parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
    Object(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Reject values JSON cannot carry (non-finite floats, at any depth).
    fn validate(&self, key: &str) -> ChainResult<()> {
        match self {
            ParamValue::Float(f) if !f.is_finite() => Err(ChainError::EnvelopeEncode {
                key: key.to_string(),
                reason: format!("non-finite number {}", f),
            }),
            ParamValue::List(items) => items.iter().try_for_each(|item| item.validate(key)),
            ParamValue::Object(fields) => fields
                .iter()
                .try_for_each(|(name, value)| value.validate(&format!("{}.{}", key, name))),
            _ => Ok(()),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::UInt(v.into())
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        ParamValue::UInt(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Str(v.clone())
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        ParamValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, ParamValue>> for ParamValue {
    fn from(v: BTreeMap<String, ParamValue>) -> Self {
        ParamValue::Object(v)
    }
}

/// Request parameters for a single call. Never shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CallParams(BTreeMap<String, ParamValue>);

impl CallParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// String value of `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    /// Apply options in order (last write wins).
    pub fn apply(&mut self, options: impl IntoIterator<Item = CallOption>) {
        for option in options {
            option.apply(self);
        }
    }

    /// Serialize to the wire body, a UTF-8 JSON object.
    pub fn encode(&self) -> ChainResult<Vec<u8>> {
        for (key, value) in &self.0 {
            value.validate(key)?;
        }
        serde_json::to_vec(&self.0).map_err(|e| ChainError::EnvelopeEncode {
            key: "<params>".to_string(),
            reason: e.to_string(),
        })
    }
}

/// A deferred mutation of [`CallParams`].
pub struct CallOption(Box<dyn FnOnce(&mut CallParams) + Send>);

impl CallOption {
    pub fn new(f: impl FnOnce(&mut CallParams) + Send + 'static) -> Self {
        Self(Box::new(f))
    }

    pub fn apply(self, params: &mut CallParams) {
        (self.0)(params)
    }
}

impl fmt::Debug for CallOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallOption(..)")
    }
}

/// Option that sets `key` to `value`.
pub fn with_param(key: impl Into<String>, value: impl Into<ParamValue>) -> CallOption {
    let key = key.into();
    let value = value.into();
    CallOption::new(move |params| {
        params.set(key, value);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut params = CallParams::new();
        params.apply(vec![
            with_param("gas", "100"),
            with_param("content", "hello"),
            with_param("gas", "200"),
        ]);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get_str("gas"), Some("200"));
        assert_eq!(params.get_str("content"), Some("hello"));
    }

    #[test]
    fn test_custom_option() {
        let mut params = CallParams::new();
        params.apply(vec![
            with_param("a", 1i64),
            CallOption::new(|p| {
                p.set("b", true);
            }),
        ]);
        assert_eq!(params.get("a"), Some(&ParamValue::Int(1)));
        assert_eq!(params.get("b"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn test_encode_mixed_kinds() {
        let mut nested = BTreeMap::new();
        nested.insert("data".to_string(), ParamValue::from("abc"));

        let mut params = CallParams::new();
        params.set("s", "text");
        params.set("n", -3i64);
        params.set("u", 7u64);
        params.set("list", vec!["x", "y"]);
        params.set("obj", nested);

        let body: serde_json::Value = serde_json::from_slice(&params.encode().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "s": "text",
                "n": -3,
                "u": 7,
                "list": ["x", "y"],
                "obj": {"data": "abc"}
            })
        );
    }

    #[test]
    fn test_encode_rejects_non_finite() {
        let mut inner = BTreeMap::new();
        inner.insert("ratio".to_string(), ParamValue::Float(f64::NAN));

        let mut params = CallParams::new();
        params.set("ok", 1.5);
        params.set("nested", inner);

        match params.encode() {
            Err(ChainError::EnvelopeEncode { key, .. }) => assert_eq!(key, "nested.ratio"),
            other => panic!("expected encode error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_encodes_to_object() {
        assert_eq!(CallParams::new().encode().unwrap(), b"{}");
    }
}
