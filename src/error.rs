//! Error types for ng-locators.
//!
//! Locators themselves add no error handling: anything the driver reports
//! (script failures, transport failures) is passed through untouched. The
//! variants here cover the few things this crate can detect on its own.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Registry | [`Error::UnknownStrategy`], [`Error::InvalidChain`] |
//! | Lookup | [`Error::ElementNotFound`] |
//! | Scripts | [`Error::ScriptNotFound`], [`Error::ScriptError`] |
//! | Driver | [`Error::Protocol`], [`Error::Config`] |
//! | External | [`Error::Io`], [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Registry Errors
    // ========================================================================
    /// No strategy is registered under the requested name.
    #[error("Unknown locator strategy: {name}")]
    UnknownStrategy {
        /// The name that was looked up.
        name: String,
    },

    /// A chain step was requested on a locator that does not offer it.
    ///
    /// Only repeater locators chain: `row`/`column` on the root,
    /// `column` on a row and `row` on a column.
    #[error("Cannot call .{step}() on {locator}")]
    InvalidChain {
        /// Label of the locator the step was called on.
        locator: String,
        /// The requested step (`row` or `column`).
        step: &'static str,
    },

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// The driver returned no elements for a single-element lookup.
    #[error("No element found using locator: {locator}")]
    ElementNotFound {
        /// Label of the locator used.
        locator: String,
    },

    // ========================================================================
    // Script Errors
    // ========================================================================
    /// The script catalog has no source for a referenced script.
    #[error("Script not found in catalog: {name}")]
    ScriptNotFound {
        /// Catalog name of the missing script.
        name: String,
    },

    /// Script evaluation failed in the browser.
    #[error("Script error: {message}")]
    ScriptError {
        /// Error message reported by the browser.
        message: String,
    },

    // ========================================================================
    // Driver Errors
    // ========================================================================
    /// Unexpected response shape from the driver.
    #[error("Protocol error: {message}")]
    Protocol {
        /// Description of the protocol violation.
        message: String,
    },

    /// Invalid configuration (e.g. a malformed script catalog).
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates an unknown strategy error.
    #[inline]
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::UnknownStrategy { name: name.into() }
    }

    /// Creates an invalid chain error.
    #[inline]
    pub fn invalid_chain(locator: impl Into<String>, step: &'static str) -> Self {
        Self::InvalidChain {
            locator: locator.into(),
            step,
        }
    }

    /// Creates an element not found error.
    #[inline]
    pub fn element_not_found(locator: impl Into<String>) -> Self {
        Self::ElementNotFound {
            locator: locator.into(),
        }
    }

    /// Creates a script not found error.
    #[inline]
    pub fn script_not_found(name: impl Into<String>) -> Self {
        Self::ScriptNotFound { name: name.into() }
    }

    /// Creates a script error.
    #[inline]
    pub fn script_error(message: impl Into<String>) -> Self {
        Self::ScriptError {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if a lookup found nothing (element or script).
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ElementNotFound { .. } | Self::ScriptNotFound { .. }
        )
    }

    /// Returns `true` if this is a misuse of the registry API.
    #[inline]
    #[must_use]
    pub fn is_registry_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownStrategy { .. } | Self::InvalidChain { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::ErrorKind;

    #[test]
    fn test_element_not_found_display() {
        let err = Error::element_not_found(r#"by.binding("{{status}}")"#);
        assert_eq!(
            err.to_string(),
            r#"No element found using locator: by.binding("{{status}}")"#
        );
    }

    #[test]
    fn test_invalid_chain_display() {
        let err = Error::invalid_chain(r#"by.model("user")"#, "row");
        assert_eq!(err.to_string(), r#"Cannot call .row() on by.model("user")"#);
    }

    #[test]
    fn test_predicates() {
        assert!(Error::element_not_found("x").is_not_found());
        assert!(Error::script_not_found("findBindings").is_not_found());
        assert!(!Error::config("bad").is_not_found());

        assert!(Error::unknown_strategy("foo").is_registry_error());
        assert!(!Error::protocol("bad").is_registry_error());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = IoError::new(ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
