//! Driver and transport traits.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::identifiers::ElementId;
use crate::locator::{By, ScriptSource};
use crate::protocol::{Command, Response};

// ============================================================================
// LocatorDriver
// ============================================================================

/// The element search primitive locators delegate to.
///
/// Implementations own scheduling, retries and timeouts; errors they return
/// reach the caller unchanged.
#[async_trait]
pub trait LocatorDriver: Send + Sync {
    /// Evaluates `script` in the browser with `args` followed by `scope`
    /// (`None` meaning the document) and returns the matched elements.
    async fn find_elements_by_script(
        &self,
        script: &ScriptSource,
        args: &[Value],
        scope: Option<&ElementId>,
    ) -> Result<Vec<ElementId>>;

    /// Finds elements with a primitive strategy within `scope`.
    async fn find_elements(&self, by: &By, scope: Option<&ElementId>) -> Result<Vec<ElementId>>;
}

// ============================================================================
// Transport
// ============================================================================

/// Sends a single command to the remote end.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `command` and waits for its response.
    async fn send(&self, command: Command) -> Result<Response>;
}
