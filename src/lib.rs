//! ng-locators - Framework-aware element locators for WebDriver clients.
//!
//! Adds locator strategies that understand template bindings: find elements
//! by binding, by model, by button text, or by position inside a repeater.
//! Every strategy produces a [`Locator`]: plain data that asks a driver to
//! evaluate a search script in the browser with the locator arguments
//! followed by the scoping element.
//!
//! # Architecture
//!
//! ```text
//! NgBy::binding("{{status}}")  ──►  Locator  ──►  LocatorDriver  ──►  browser
//!        (registry)               (descriptor)    (find_elements)     (script)
//! ```
//!
//! - The registry ([`NgBy`]) is configured once and then shared.
//! - Locators are immutable; chaining (`row`, `column`) returns new values.
//! - This crate adds no retries, timeouts or error translation. Whatever the
//!   driver reports is returned as is.
//!
//! # Quick Start
//!
//! ```ignore
//! use ng_locators::{NgBy, Result};
//!
//! async fn example(driver: &impl ng_locators::LocatorDriver) -> Result<()> {
//!     let mut by = NgBy::new();
//!     by.register_strategy("dataTest", "var using = arguments[1] || document; ...");
//!
//!     let status = by.binding("{{status}}").find_element(driver, None).await?;
//!     let first_name = by
//!         .repeater("cat in pets")
//!         .row(0)?
//!         .column("{{cat.name}}")?
//!         .find_element(driver, None)
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`locator`] | Registry, descriptors, repeater chaining, script catalog |
//! | [`driver`] | Driver boundary and a protocol-backed driver |
//! | [`protocol`] | Command and response message types |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |

// ============================================================================
// Modules
// ============================================================================

/// Driver boundary.
///
/// Implement [`LocatorDriver`] directly, or implement [`Transport`] and wrap
/// it in a [`CommandDriver`].
pub mod driver;

/// Error types and result aliases.
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Locator strategies and descriptors.
pub mod locator;

/// Command and response message types.
pub mod protocol;

// ============================================================================
// Re-exports
// ============================================================================

// Driver types
pub use driver::{CommandDriver, LocatorDriver, Transport};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::ElementId;

// Locator types
pub use locator::{
    By, ChainOrder, ClientScript, Invocation, Locator, NativeLocator, NgBy, Repeater,
    RepeaterCell, RepeaterColumn, RepeaterRow, ScriptCatalog, ScriptLocator, ScriptSource,
    Strategy,
};
