//! Response message type.
//!
//! # Format
//!
//! Success:
//! ```json
//! { "type": "success", "result": { "elementIds": ["..."] } }
//! ```
//!
//! Error:
//! ```json
//! { "type": "error", "error": "script error", "message": "..." }
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::identifiers::ElementId;

// ============================================================================
// Constants
// ============================================================================

/// Error code the remote end uses for failed script evaluation.
const SCRIPT_ERROR_CODE: &str = "script error";

// ============================================================================
// Response
// ============================================================================

/// A response from the remote end.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// Response type.
    #[serde(rename = "type")]
    pub response_type: ResponseType,

    /// Result data (if success).
    #[serde(default)]
    pub result: Option<Value>,

    /// Error code (if error).
    #[serde(default)]
    pub error: Option<String>,

    /// Error message (if error).
    #[serde(default)]
    pub message: Option<String>,
}

impl Response {
    /// Creates a success response.
    #[must_use]
    pub fn success(result: Value) -> Self {
        Self {
            response_type: ResponseType::Success,
            result: Some(result),
            error: None,
            message: None,
        }
    }

    /// Creates an error response.
    #[must_use]
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            result: None,
            error: Some(code.into()),
            message: Some(message.into()),
        }
    }

    /// Returns `true` if this is a success response.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response_type == ResponseType::Success
    }

    /// Extracts the result value.
    ///
    /// # Errors
    ///
    /// [`Error::ScriptError`] for failed script evaluation, otherwise
    /// [`Error::Protocol`].
    pub fn into_result(self) -> Result<Value> {
        match self.response_type {
            ResponseType::Success => Ok(self.result.unwrap_or(Value::Null)),
            ResponseType::Error => {
                let error_code = self.error.unwrap_or_else(|| "unknown error".to_string());
                let message = self.message.unwrap_or_else(|| error_code.clone());
                if error_code == SCRIPT_ERROR_CODE {
                    Err(Error::script_error(message))
                } else {
                    Err(Error::protocol(message))
                }
            }
        }
    }
}

// ============================================================================
// ResponseType
// ============================================================================

/// Response type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    /// Successful response.
    Success,
    /// Error response.
    Error,
}

// ============================================================================
// Result Parsing
// ============================================================================

/// Extracts element ids from a find or evaluate result.
///
/// Accepts `{"elementIds": [...]}`, a bare array, or either form holding
/// element references (`{"elementId": "..."}`). Entries that are neither are
/// skipped; any other shape yields no ids.
#[must_use]
pub fn parse_element_ids(result: &Value) -> Vec<ElementId> {
    let items = match result {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("elementIds") {
            Some(Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(id) => Some(ElementId::new(id.as_str())),
            Value::Object(map) => map
                .get("elementId")
                .and_then(Value::as_str)
                .map(ElementId::new),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
