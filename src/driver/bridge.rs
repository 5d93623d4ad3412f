//! Protocol-backed [`LocatorDriver`].
//!
//! [`CommandDriver`] resolves script sources through a [`ScriptCatalog`],
//! turns each search into a protocol [`Command`] and parses the element ids
//! out of the response.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::identifiers::ElementId;
use crate::locator::{By, ScriptCatalog, ScriptSource};
use crate::protocol::{
    Command, ElementCommand, ScriptCommand, element_reference, parse_element_ids,
};

use super::core::{LocatorDriver, Transport};

// ============================================================================
// CommandDriver
// ============================================================================

/// A [`LocatorDriver`] that speaks the command protocol over a [`Transport`].
///
/// Cheap to clone; the catalog is shared.
#[derive(Clone)]
pub struct CommandDriver<T> {
    transport: T,
    catalog: Arc<ScriptCatalog>,
}

impl<T> fmt::Debug for CommandDriver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDriver")
            .field("scripts", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

impl<T: Transport> CommandDriver<T> {
    /// Creates a driver over `transport` using `catalog` for built-in scripts.
    pub fn new(transport: T, catalog: impl Into<Arc<ScriptCatalog>>) -> Self {
        Self {
            transport,
            catalog: catalog.into(),
        }
    }

    /// Returns the script catalog.
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ScriptCatalog {
        &self.catalog
    }

    /// Returns the underlying transport.
    #[inline]
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the evaluate command for a script search.
    ///
    /// The scoping element is appended after `args`.
    pub fn script_command(
        &self,
        script: &ScriptSource,
        args: &[Value],
        scope: Option<&ElementId>,
    ) -> Result<Command> {
        let source = self.catalog.source(script)?;

        let mut call_args = Vec::with_capacity(args.len() + 1);
        call_args.extend_from_slice(args);
        call_args.push(element_reference(scope));

        Ok(Command::Script(ScriptCommand::Evaluate {
            script: source.to_string(),
            args: call_args,
        }))
    }

    /// Builds the find command for a primitive strategy.
    #[must_use]
    pub fn find_command(by: &By, scope: Option<&ElementId>) -> Command {
        Command::Element(ElementCommand::FindAll {
            strategy: by.strategy().to_string(),
            value: by.value().to_string(),
            parent_id: scope.cloned(),
        })
    }

    async fn run(&self, command: Command) -> Result<Vec<ElementId>> {
        let value = self.transport.send(command).await?.into_result()?;
        let elements = parse_element_ids(&value);
        debug!(count = elements.len(), "Elements found");
        Ok(elements)
    }
}

#[async_trait]
impl<T: Transport> LocatorDriver for CommandDriver<T> {
    async fn find_elements_by_script(
        &self,
        script: &ScriptSource,
        args: &[Value],
        scope: Option<&ElementId>,
    ) -> Result<Vec<ElementId>> {
        debug!(script = script.name(), scoped = scope.is_some(), "Sending script search");
        let command = self.script_command(script, args, scope)?;
        self.run(command).await
    }

    async fn find_elements(&self, by: &By, scope: Option<&ElementId>) -> Result<Vec<ElementId>> {
        debug!(strategy = by.strategy(), scoped = scope.is_some(), "Sending find");
        self.run(Self::find_command(by, scope)).await
    }
}

// ============================================================================
// Tests
// ============================================================================
