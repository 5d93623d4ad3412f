//! Chainable repeater locators.
//!
//! A repeater is a template stamped out once per item of a bound collection.
//! Rows are addressed by zero-based index and columns by binding:
//!
//! ```ignore
//! // <div ng-repeat="cat in pets">
//! //   <span>{{cat.name}}</span>
//! //   <span>{{cat.age}}</span>
//! // </div>
//! let rows = Repeater::new("cat in pets");
//! let second_cat = rows.row(1);
//! let first_name = rows.row(0).column("{{cat.name}}");
//! let ages = rows.column("{{cat.age}}");
//! ```
//!
//! Every step returns a new value. A cell reached via `row().column()` and one
//! reached via `column().row()` evaluate the same script with the same
//! arguments; only their labels differ.
//!
//! Labels start with the name the repeater was invoked under, `repeater`
//! unless it was registered under another name.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::script::ClientScript;

/// Strategy name used when a repeater is built directly.
pub const REPEATER: &str = "repeater";

fn default_name() -> String {
    REPEATER.to_string()
}

// ============================================================================
// Repeater (all rows)
// ============================================================================

/// All rows of a repeater.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repeater {
    /// Strategy name shown in labels.
    #[serde(default = "default_name")]
    pub name: String,
    /// Repeat expression, e.g. `cat in pets`.
    pub descriptor: String,
}

impl Repeater {
    /// Creates a locator for every row matching `descriptor`.
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self::named(REPEATER, descriptor)
    }

    /// Like [`new`](Self::new), labelled with the strategy `name`.
    pub fn named(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    /// Narrows to the row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> RepeaterRow {
        RepeaterRow {
            name: self.name.clone(),
            descriptor: self.descriptor.clone(),
            index,
        }
    }

    /// Narrows to the elements bound to `binding` in every row.
    #[must_use]
    pub fn column(&self, binding: impl Into<String>) -> RepeaterColumn {
        RepeaterColumn {
            name: self.name.clone(),
            descriptor: self.descriptor.clone(),
            binding: binding.into(),
        }
    }

    pub(crate) fn script(&self) -> ClientScript {
        ClientScript::FindAllRepeaterRows
    }

    pub(crate) fn args(&self) -> Vec<Value> {
        vec![json!(self.descriptor)]
    }

    /// Diagnostic label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("by.{}(\"{}\")", self.name, self.descriptor)
    }
}

// ============================================================================
// RepeaterRow
// ============================================================================

/// A single repeater row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepeaterRow {
    /// Strategy name shown in labels.
    #[serde(default = "default_name")]
    pub name: String,
    /// Repeat expression.
    pub descriptor: String,
    /// Zero-based row index.
    pub index: usize,
}

impl RepeaterRow {
    /// Narrows to the cell bound to `binding` in this row.
    #[must_use]
    pub fn column(&self, binding: impl Into<String>) -> RepeaterCell {
        RepeaterCell {
            name: self.name.clone(),
            descriptor: self.descriptor.clone(),
            index: self.index,
            binding: binding.into(),
            order: ChainOrder::RowFirst,
        }
    }

    pub(crate) fn script(&self) -> ClientScript {
        ClientScript::FindRepeaterRows
    }

    pub(crate) fn args(&self) -> Vec<Value> {
        vec![json!(self.descriptor), json!(self.index)]
    }

    /// Diagnostic label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("by.{}(\"{}\").row(\"{}\")", self.name, self.descriptor, self.index)
    }
}

// ============================================================================
// RepeaterColumn
// ============================================================================

/// One binding across every repeater row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepeaterColumn {
    /// Strategy name shown in labels.
    #[serde(default = "default_name")]
    pub name: String,
    /// Repeat expression.
    pub descriptor: String,
    /// Column binding, e.g. `{{cat.age}}`.
    pub binding: String,
}

impl RepeaterColumn {
    /// Narrows to the cell of this column in the row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> RepeaterCell {
        RepeaterCell {
            name: self.name.clone(),
            descriptor: self.descriptor.clone(),
            index,
            binding: self.binding.clone(),
            order: ChainOrder::ColumnFirst,
        }
    }

    pub(crate) fn script(&self) -> ClientScript {
        ClientScript::FindRepeaterColumn
    }

    pub(crate) fn args(&self) -> Vec<Value> {
        vec![json!(self.descriptor), json!(self.binding)]
    }

    /// Diagnostic label.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "by.{}(\"{}\").column(\"{}\")",
            self.name, self.descriptor, self.binding
        )
    }
}

// ============================================================================
// RepeaterCell
// ============================================================================

/// Which chain step came first when a cell was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChainOrder {
    /// `row(i).column(b)`
    RowFirst,
    /// `column(b).row(i)`
    ColumnFirst,
}

/// A single repeater cell. Terminal: no further chaining.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepeaterCell {
    /// Strategy name shown in labels.
    #[serde(default = "default_name")]
    pub name: String,
    /// Repeat expression.
    pub descriptor: String,
    /// Zero-based row index.
    pub index: usize,
    /// Column binding.
    pub binding: String,
    /// Chain order; affects the label only.
    pub order: ChainOrder,
}

impl RepeaterCell {
    pub(crate) fn script(&self) -> ClientScript {
        ClientScript::FindRepeaterElement
    }

    // Same argument order on both chain paths.
    pub(crate) fn args(&self) -> Vec<Value> {
        vec![
            json!(self.descriptor),
            json!(self.index),
            json!(self.binding),
        ]
    }

    /// Diagnostic label.
    #[must_use]
    pub fn label(&self) -> String {
        match self.order {
            ChainOrder::RowFirst => format!(
                "by.{}(\"{}\").row(\"{}\").column(\"{}\")",
                self.name, self.descriptor, self.index, self.binding
            ),
            ChainOrder::ColumnFirst => format!(
                "by.{}(\"{}\").column(\"{}\").row(\"{}\")",
                self.name, self.descriptor, self.binding, self.index
            ),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
