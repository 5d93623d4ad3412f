//! Locator descriptors.
//!
//! A [`Locator`] describes how to find elements without finding them. It is
//! plain data: a driver turns it into a search via [`Locator::invocation`],
//! and the label is used for diagnostics.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::driver::LocatorDriver;
use crate::error::{Error, Result};
use crate::identifiers::ElementId;

use super::by::By;
use super::repeater::{Repeater, RepeaterCell, RepeaterColumn, RepeaterRow};
use super::script::ScriptSource;

// ============================================================================
// NativeLocator
// ============================================================================

/// A primitive strategy invoked under a registry name.
///
/// The name only shows up in the label; the driver always receives `by`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeLocator {
    /// Name the strategy was invoked under.
    pub name: String,
    /// Primitive strategy sent to the driver.
    pub by: By,
}

impl NativeLocator {
    /// Creates a native locator labelled `name`.
    pub fn new(name: impl Into<String>, by: By) -> Self {
        Self {
            name: name.into(),
            by,
        }
    }

    /// Diagnostic label, e.g. `by.css("main")`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("by.{}(\"{}\")", self.name, self.by.value())
    }
}

impl From<By> for NativeLocator {
    fn from(by: By) -> Self {
        Self::new(by.strategy(), by)
    }
}

// ============================================================================
// ScriptLocator
// ============================================================================

/// A locator backed by a single script and an argument list.
///
/// Built-ins such as `binding` or `model` and every custom strategy produce
/// this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLocator {
    /// Name the strategy was invoked under (used in the label).
    pub name: String,
    /// Script to evaluate.
    pub script: ScriptSource,
    /// Arguments passed before the scoping element.
    pub args: Vec<Value>,
}

impl ScriptLocator {
    /// Creates a script locator.
    pub fn new(
        name: impl Into<String>,
        script: impl Into<ScriptSource>,
        args: Vec<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            args,
        }
    }

    /// Diagnostic label, e.g. `by.binding("{{status}}")`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("by.{}(\"{}\")", self.name, join_args(&self.args))
    }
}

/// Renders an argument list the way a script engine stringifies an array:
/// comma separated, strings unquoted, `null` empty.
pub(crate) fn join_args(args: &[Value]) -> String {
    args.iter().map(display_arg).collect::<Vec<_>>().join(",")
}

fn display_arg(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => join_args(items),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

// ============================================================================
// Invocation
// ============================================================================

/// What the driver must do for a locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Use a primitive strategy.
    Native(By),
    /// Evaluate `script` with `args`, then the scoping element.
    Script {
        /// Script to evaluate.
        script: ScriptSource,
        /// Arguments passed before the scoping element.
        args: Vec<Value>,
    },
}

// ============================================================================
// Locator
// ============================================================================

/// Description of how to locate elements.
///
/// Immutable; chain steps ([`row`](Self::row), [`column`](Self::column))
/// return new locators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "locator", rename_all = "camelCase")]
pub enum Locator {
    /// Primitive driver strategy.
    Native(NativeLocator),
    /// Script-backed strategy.
    Script(ScriptLocator),
    /// All rows of a repeater.
    Repeater(Repeater),
    /// One repeater row.
    RepeaterRow(RepeaterRow),
    /// One repeater column.
    RepeaterColumn(RepeaterColumn),
    /// One repeater cell.
    RepeaterCell(RepeaterCell),
}

impl Locator {
    /// Diagnostic label used in logs and error messages.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Native(native) => native.label(),
            Self::Script(locator) => locator.label(),
            Self::Repeater(rows) => rows.label(),
            Self::RepeaterRow(row) => row.label(),
            Self::RepeaterColumn(column) => column.label(),
            Self::RepeaterCell(cell) => cell.label(),
        }
    }

    /// Maps this locator to the search the driver has to run.
    #[must_use]
    pub fn invocation(&self) -> Invocation {
        let (script, args) = match self {
            Self::Native(native) => return Invocation::Native(native.by.clone()),
            Self::Script(locator) => (locator.script.clone(), locator.args.clone()),
            Self::Repeater(rows) => (rows.script().into(), rows.args()),
            Self::RepeaterRow(row) => (row.script().into(), row.args()),
            Self::RepeaterColumn(column) => (column.script().into(), column.args()),
            Self::RepeaterCell(cell) => (cell.script().into(), cell.args()),
        };
        Invocation::Script { script, args }
    }

    /// Narrows a repeater or repeater column to a row.
    pub fn row(&self, index: usize) -> Result<Locator> {
        match self {
            Self::Repeater(rows) => Ok(rows.row(index).into()),
            Self::RepeaterColumn(column) => Ok(column.row(index).into()),
            _ => Err(Error::invalid_chain(self.label(), "row")),
        }
    }

    /// Narrows a repeater or repeater row to a column.
    pub fn column(&self, binding: impl Into<String>) -> Result<Locator> {
        match self {
            Self::Repeater(rows) => Ok(rows.column(binding).into()),
            Self::RepeaterRow(row) => Ok(row.column(binding).into()),
            _ => Err(Error::invalid_chain(self.label(), "column")),
        }
    }

    /// Finds every element matching this locator within `scope`.
    ///
    /// `None` scopes the search to the whole document. Driver errors are
    /// returned unchanged.
    pub async fn find_elements<D>(
        &self,
        driver: &D,
        scope: Option<&ElementId>,
    ) -> Result<Vec<ElementId>>
    where
        D: LocatorDriver + ?Sized,
    {
        match self.invocation() {
            Invocation::Native(by) => {
                debug!(locator = %self, "Finding elements");
                driver.find_elements(&by, scope).await
            }
            Invocation::Script { script, args } => {
                debug!(
                    locator = %self,
                    script = script.name(),
                    arg_count = args.len(),
                    "Finding elements by script"
                );
                driver.find_elements_by_script(&script, &args, scope).await
            }
        }
    }

    /// Finds the first element matching this locator within `scope`.
    ///
    /// Fails with [`Error::ElementNotFound`] when nothing matches.
    pub async fn find_element<D>(&self, driver: &D, scope: Option<&ElementId>) -> Result<ElementId>
    where
        D: LocatorDriver + ?Sized,
    {
        self.find_elements(driver, scope)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::element_not_found(self.label()))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ============================================================================
// From implementations
// ============================================================================

impl From<By> for Locator {
    fn from(by: By) -> Self {
        Self::Native(by.into())
    }
}

impl From<NativeLocator> for Locator {
    fn from(native: NativeLocator) -> Self {
        Self::Native(native)
    }
}

impl From<ScriptLocator> for Locator {
    fn from(locator: ScriptLocator) -> Self {
        Self::Script(locator)
    }
}

impl From<Repeater> for Locator {
    fn from(rows: Repeater) -> Self {
        Self::Repeater(rows)
    }
}

impl From<RepeaterRow> for Locator {
    fn from(row: RepeaterRow) -> Self {
        Self::RepeaterRow(row)
    }
}

impl From<RepeaterColumn> for Locator {
    fn from(column: RepeaterColumn) -> Self {
        Self::RepeaterColumn(column)
    }
}

impl From<RepeaterCell> for Locator {
    fn from(cell: RepeaterCell) -> Self {
        Self::RepeaterCell(cell)
    }
}

// ============================================================================
// Tests
// ============================================================================
