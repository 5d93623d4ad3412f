//! Search scripts evaluated in the browser.
//!
//! Built-in locators refer to catalog scripts by identity ([`ClientScript`]);
//! custom locators carry their own source. Either way the script receives the
//! locator arguments followed by the scoping element, and returns an array of
//! matched elements.
//!
//! The JavaScript bodies are not part of this crate. A [`ScriptCatalog`] maps
//! each [`ClientScript`] to its source and is loaded from JSON:
//!
//! ```json
//! {
//!   "findBindings": "var using = arguments[1] || document; ...",
//!   "findByModel": "..."
//! }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

// ============================================================================
// ClientScript
// ============================================================================

/// A named script from the search-script catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientScript {
    /// Elements whose binding matches the descriptor.
    FindBindings,
    /// `<select>` elements bound to a model.
    FindSelects,
    /// Selected `<option>`s of a model-bound `<select>`.
    FindSelectedOptions,
    /// `<input>` elements bound to a model.
    FindInputs,
    /// Any element bound to a model.
    FindByModel,
    /// Buttons whose text equals the search text.
    FindByButtonText,
    /// Buttons whose text contains the search text.
    FindByPartialButtonText,
    /// `<textarea>` elements bound to a model.
    FindTextareas,
    /// Every row of a repeater.
    FindAllRepeaterRows,
    /// One row of a repeater, by index.
    FindRepeaterRows,
    /// One cell of a repeater, by row index and column binding.
    FindRepeaterElement,
    /// One column of a repeater, by binding, across all rows.
    FindRepeaterColumn,
}

impl ClientScript {
    /// Every catalog script.
    pub const ALL: &'static [ClientScript] = &[
        Self::FindBindings,
        Self::FindSelects,
        Self::FindSelectedOptions,
        Self::FindInputs,
        Self::FindByModel,
        Self::FindByButtonText,
        Self::FindByPartialButtonText,
        Self::FindTextareas,
        Self::FindAllRepeaterRows,
        Self::FindRepeaterRows,
        Self::FindRepeaterElement,
        Self::FindRepeaterColumn,
    ];

    /// Returns the catalog name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::FindBindings => "findBindings",
            Self::FindSelects => "findSelects",
            Self::FindSelectedOptions => "findSelectedOptions",
            Self::FindInputs => "findInputs",
            Self::FindByModel => "findByModel",
            Self::FindByButtonText => "findByButtonText",
            Self::FindByPartialButtonText => "findByPartialButtonText",
            Self::FindTextareas => "findTextareas",
            Self::FindAllRepeaterRows => "findAllRepeaterRows",
            Self::FindRepeaterRows => "findRepeaterRows",
            Self::FindRepeaterElement => "findRepeaterElement",
            Self::FindRepeaterColumn => "findRepeaterColumn",
        }
    }

    /// Looks a script up by catalog name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for ClientScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// ScriptSource
// ============================================================================

/// The script a locator asks the driver to evaluate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "script", rename_all = "camelCase")]
pub enum ScriptSource {
    /// A catalog script, referenced by identity.
    Catalog(ClientScript),
    /// Caller-supplied JavaScript.
    Inline(String),
}

impl ScriptSource {
    /// Short name for logging: the catalog name, or `inline`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Catalog(script) => script.name(),
            Self::Inline(_) => "inline",
        }
    }
}

impl From<ClientScript> for ScriptSource {
    fn from(script: ClientScript) -> Self {
        Self::Catalog(script)
    }
}

impl From<&str> for ScriptSource {
    fn from(source: &str) -> Self {
        Self::Inline(source.to_string())
    }
}

impl From<String> for ScriptSource {
    fn from(source: String) -> Self {
        Self::Inline(source)
    }
}

// ============================================================================
// ScriptCatalog
// ============================================================================

/// JavaScript sources for the catalog scripts.
#[derive(Debug, Clone, Default)]
pub struct ScriptCatalog {
    scripts: FxHashMap<ClientScript, String>,
}

impl ScriptCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a script source (builder style).
    #[must_use]
    pub fn with(mut self, script: ClientScript, source: impl Into<String>) -> Self {
        self.insert(script, source);
        self
    }

    /// Sets the source of `script`, returning the previous one.
    pub fn insert(&mut self, script: ClientScript, source: impl Into<String>) -> Option<String> {
        self.scripts.insert(script, source.into())
    }

    /// Parses a catalog from a JSON object of `name -> source`.
    ///
    /// Unknown names are rejected so that typos surface at load time.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: FxHashMap<String, String> = serde_json::from_str(text)?;
        let mut catalog = Self::new();

        for (name, source) in raw {
            let script = ClientScript::from_name(&name)
                .ok_or_else(|| Error::config(format!("unknown catalog script '{name}'")))?;
            trace!(script = %script, len = source.len(), "Loaded catalog script");
            catalog.insert(script, source);
        }

        Ok(catalog)
    }

    /// Reads a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Returns the source of a catalog script, if loaded.
    #[inline]
    #[must_use]
    pub fn get(&self, script: ClientScript) -> Option<&str> {
        self.scripts.get(&script).map(String::as_str)
    }

    /// Resolves a [`ScriptSource`] to JavaScript.
    ///
    /// Inline sources resolve to themselves.
    pub fn source<'a>(&'a self, script: &'a ScriptSource) -> Result<&'a str> {
        match script {
            ScriptSource::Catalog(name) => self
                .get(*name)
                .ok_or_else(|| Error::script_not_found(name.name())),
            ScriptSource::Inline(source) => Ok(source),
        }
    }

    /// Catalog scripts with no loaded source.
    #[must_use]
    pub fn missing(&self) -> Vec<ClientScript> {
        ClientScript::ALL
            .iter()
            .copied()
            .filter(|s| !self.scripts.contains_key(s))
            .collect()
    }

    /// Number of loaded scripts.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Returns `true` if no scripts are loaded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
