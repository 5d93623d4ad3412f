//! Command definitions organized by module.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `element` | Find by primitive strategy |
//! | `script` | Evaluate a search script |

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::identifiers::ElementId;

// ============================================================================
// Command Wrapper
// ============================================================================

/// All protocol commands organized by module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Command {
    /// Element module commands.
    Element(ElementCommand),
    /// Script module commands.
    Script(ScriptCommand),
}

// ============================================================================
// Element Commands
// ============================================================================

/// Element module commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum ElementCommand {
    /// Find all elements matching a primitive strategy.
    #[serde(rename = "element.findAll")]
    FindAll {
        /// Strategy protocol name (`css`, `xpath`, ...).
        strategy: String,
        /// Selector value.
        value: String,
        /// Scoping element (optional).
        #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
        parent_id: Option<ElementId>,
    },
}

// ============================================================================
// Script Commands
// ============================================================================

/// Script module commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum ScriptCommand {
    /// Evaluate a synchronous script with arguments.
    #[serde(rename = "script.evaluate")]
    Evaluate {
        /// JavaScript code.
        script: String,
        /// Script arguments.
        #[serde(default)]
        args: Vec<Value>,
    },
}

// ============================================================================
// Helpers
// ============================================================================

/// Encodes an element as a script argument.
///
/// `None` encodes as `null`, which search scripts treat as "whole document".
#[must_use]
pub fn element_reference(element: Option<&ElementId>) -> Value {
    match element {
        Some(id) => json!({ "elementId": id }),
        None => Value::Null,
    }
}

// ============================================================================
// Tests
// ============================================================================
