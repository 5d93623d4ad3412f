//! Primitive locator strategies.
//!
//! These are the strategies every WebDriver understands natively. The
//! framework-aware registry ([`NgBy`](super::NgBy)) keeps all of them
//! available next to its own script-backed strategies.
//!
//! # Example
//!
//! ```ignore
//! use ng_locators::By;
//!
//! let submit = By::css("#submit");
//! let rows = By::xpath("//tr[@class='row']");
//! assert_eq!(submit.label(), r##"by.css("#submit")"##);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Protocol names of every primitive strategy, in declaration order.
pub const STRATEGIES: &[&str] = &[
    "css",
    "xpath",
    "text",
    "partialText",
    "id",
    "tag",
    "name",
    "class",
    "linkText",
    "partialLinkText",
];

// ============================================================================
// By Enum
// ============================================================================

/// Primitive element locator strategy.
///
/// Serialized as `{"strategy": "<name>", "value": "<value>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "value")]
pub enum By {
    /// CSS selector.
    #[serde(rename = "css")]
    Css(String),

    /// XPath expression.
    #[serde(rename = "xpath")]
    XPath(String),

    /// Exact text content match (`textContent.trim() === value`).
    #[serde(rename = "text")]
    Text(String),

    /// Partial text content match.
    #[serde(rename = "partialText")]
    PartialText(String),

    /// Element ID.
    #[serde(rename = "id")]
    Id(String),

    /// Tag name.
    #[serde(rename = "tag")]
    Tag(String),

    /// Name attribute.
    #[serde(rename = "name")]
    Name(String),

    /// Single class name.
    #[serde(rename = "class")]
    Class(String),

    /// Exact link text (`<a>` only).
    #[serde(rename = "linkText")]
    LinkText(String),

    /// Partial link text (`<a>` only).
    #[serde(rename = "partialLinkText")]
    PartialLinkText(String),
}

impl By {
    /// Creates a CSS selector.
    #[inline]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Creates an XPath selector.
    #[inline]
    pub fn xpath(expr: impl Into<String>) -> Self {
        Self::XPath(expr.into())
    }

    /// Creates a text content selector.
    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a partial text content selector.
    #[inline]
    pub fn partial_text(text: impl Into<String>) -> Self {
        Self::PartialText(text.into())
    }

    /// Creates an ID selector.
    #[inline]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Creates a tag name selector.
    #[inline]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// Creates a name attribute selector.
    #[inline]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a class name selector.
    #[inline]
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// Creates a link text selector.
    #[inline]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// Creates a partial link text selector.
    #[inline]
    pub fn partial_link_text(text: impl Into<String>) -> Self {
        Self::PartialLinkText(text.into())
    }

    /// Builds a strategy from its protocol name and value.
    ///
    /// Returns `None` for names not in [`STRATEGIES`].
    pub fn from_parts(strategy: &str, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let by = match strategy {
            "css" => Self::Css(value),
            "xpath" => Self::XPath(value),
            "text" => Self::Text(value),
            "partialText" => Self::PartialText(value),
            "id" => Self::Id(value),
            "tag" => Self::Tag(value),
            "name" => Self::Name(value),
            "class" => Self::Class(value),
            "linkText" => Self::LinkText(value),
            "partialLinkText" => Self::PartialLinkText(value),
            _ => return None,
        };
        Some(by)
    }

    /// Returns the strategy name for the protocol.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::Css(_) => "css",
            Self::XPath(_) => "xpath",
            Self::Text(_) => "text",
            Self::PartialText(_) => "partialText",
            Self::Id(_) => "id",
            Self::Tag(_) => "tag",
            Self::Name(_) => "name",
            Self::Class(_) => "class",
            Self::LinkText(_) => "linkText",
            Self::PartialLinkText(_) => "partialLinkText",
        }
    }

    /// Returns the selector value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Css(v)
            | Self::XPath(v)
            | Self::Text(v)
            | Self::PartialText(v)
            | Self::Id(v)
            | Self::Tag(v)
            | Self::Name(v)
            | Self::Class(v)
            | Self::LinkText(v)
            | Self::PartialLinkText(v) => v,
        }
    }

    /// Diagnostic label, e.g. `by.css("#submit")`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("by.{}(\"{}\")", self.strategy(), self.value())
    }
}

impl fmt::Display for By {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ============================================================================
// From implementations for ergonomics
// ============================================================================

impl From<&str> for By {
    /// Converts a string to CSS selector (default).
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}

impl From<String> for By {
    /// Converts a string to CSS selector (default).
    fn from(s: String) -> Self {
        Self::Css(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
