//! Driver protocol message types.
//!
//! Payloads a [`CommandDriver`](crate::driver::CommandDriver) exchanges with
//! the remote end when it runs a locator.
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | [`Command`] | Local → Remote | Find or evaluate request |
//! | [`Response`] | Remote → Local | Matched elements or error |
//!
//! Commands follow `module.methodName` format:
//!
//! - `element.findAll`
//! - `script.evaluate`

// ============================================================================
// Submodules
// ============================================================================

/// Command definitions organized by module.
pub mod command;

/// Response message type and result parsing.
pub mod response;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::{Command, ElementCommand, ScriptCommand, element_reference};
pub use response::{Response, ResponseType, parse_element_ids};
