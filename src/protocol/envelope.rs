//! Response envelope codec.

use serde_json::Value;

use crate::error::{ChainError, ChainResult};

/// Content type of every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Decoded response wrapper.
///
/// `data` is the ledger payload when `success` is true and the error
/// detail otherwise; callers must branch on `success` first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub success: bool,
    pub code: String,
    pub data: String,
}

impl Envelope {
    /// Parse a response body.
    ///
    /// Only `success`, `code` and `data` are read; other fields are
    /// ignored. A missing `success` counts as false.
    pub fn decode(status: u16, body: &[u8]) -> ChainResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| ChainError::EnvelopeDecode {
            status,
            reason: e.to_string(),
        })?;

        let Value::Object(fields) = value else {
            return Err(ChainError::EnvelopeDecode {
                status,
                reason: "expected a JSON object".to_string(),
            });
        };

        Ok(Self {
            success: truthy(fields.get("success")),
            code: project(fields.get("code")),
            data: project(fields.get("data")),
        })
    }

    /// The payload on success, `ChainError::Remote` otherwise.
    pub fn into_payload(self) -> ChainResult<String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ChainError::Remote {
                code: self.code,
                message: self.data,
            })
        }
    }
}

/// Loose boolean reading of `success`: `true`, `"true"`, `"t"`, `"1"`
/// (any case) and non-zero numbers count as set.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.to_ascii_lowercase().as_str(), "true" | "t" | "1"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

/// String projection of a JSON field; objects and numbers keep their JSON text.
fn project(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
