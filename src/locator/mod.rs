//! Locator strategies.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`NgBy`] | Strategy registry (built-ins plus custom strategies) |
//! | [`Locator`] | Descriptor produced by a strategy |
//! | [`By`] | Primitive driver strategies |
//! | [`Repeater`] | Chainable repeater row/column/cell locators |
//! | [`ScriptCatalog`] | JavaScript sources for the catalog scripts |
//!
//! # Example
//!
//! ```ignore
//! use ng_locators::NgBy;
//!
//! let by = NgBy::new();
//! let status = by.binding("{{status}}");
//! let ages = by.repeater("cat in pets").column("{{cat.age}}")?;
//!
//! let elements = ages.find_elements(&driver, None).await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Primitive driver strategies.
pub mod by;

/// Locator descriptors and dispatch.
pub mod descriptor;

/// Strategy registry.
pub mod registry;

/// Chainable repeater locators.
pub mod repeater;

/// Catalog scripts and sources.
pub mod script;

// ============================================================================
// Re-exports
// ============================================================================

pub use by::By;
pub use descriptor::{Invocation, Locator, NativeLocator, ScriptLocator};
pub use registry::{NgBy, Strategy};
pub use repeater::{ChainOrder, Repeater, RepeaterCell, RepeaterColumn, RepeaterRow};
pub use script::{ClientScript, ScriptCatalog, ScriptSource};
