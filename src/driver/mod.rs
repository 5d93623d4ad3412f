//! Driver boundary.
//!
//! Locators never talk to a browser themselves. They hand an
//! [`Invocation`](crate::locator::Invocation) to a [`LocatorDriver`], which
//! runs it and returns element handles.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LocatorDriver`] | The find-elements primitive a locator needs |
//! | [`Transport`] | Sends one protocol [`Command`](crate::protocol::Command) |
//! | [`CommandDriver`] | [`LocatorDriver`] over any [`Transport`] |
//!
//! # Example
//!
//! ```ignore
//! use ng_locators::{CommandDriver, NgBy, ScriptCatalog};
//!
//! let catalog = ScriptCatalog::from_file("scripts.json")?;
//! let driver = CommandDriver::new(my_transport, catalog);
//!
//! let by = NgBy::new();
//! let names = by
//!     .repeater("cat in pets")
//!     .column("{{cat.name}}")?
//!     .find_elements(&driver, None)
//!     .await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Protocol-backed driver.
pub mod bridge;

/// Driver and transport traits.
pub mod core;

// ============================================================================
// Re-exports
// ============================================================================

pub use bridge::CommandDriver;
pub use self::core::{LocatorDriver, Transport};
