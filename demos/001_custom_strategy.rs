//! Custom strategy demonstration.
//!
//! Demonstrates:
//! - Building the script catalog
//! - Registering a custom script strategy
//! - Registering a primitive strategy under a new name
//! - Repeater chaining
//! - Dispatch through `CommandDriver` over a stub transport
//!
//! Usage:
//!   cargo run --example 001_custom_strategy
//!   RUST_LOG=debug cargo run --example 001_custom_strategy

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use serde_json::{Value, json};

use ng_locators::protocol::{Command, ElementCommand, Response, ScriptCommand};
use ng_locators::{
    By, ClientScript, CommandDriver, ElementId, NgBy, Result, ScriptCatalog, Strategy, Transport,
};

// ============================================================================
// Constants
// ============================================================================

const DATA_TEST_SCRIPT: &str = "\
var using = arguments[1] || document;
return using.querySelectorAll('[data-test=\"' + arguments[0] + '\"]');";

// ============================================================================
// Stub Transport
// ============================================================================

/// Answers every command with two fresh element ids and prints what it got.
struct StubTransport;

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, command: Command) -> Result<Response> {
        match &command {
            Command::Script(ScriptCommand::Evaluate { args, .. }) => {
                println!("    -> script.evaluate args={}", Value::from(args.clone()));
            }
            Command::Element(ElementCommand::FindAll { strategy, value, .. }) => {
                println!("    -> element.findAll {strategy}={value}");
            }
        }

        let ids = [ElementId::generate(), ElementId::generate()];
        Ok(Response::success(json!({ "elementIds": ids })))
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("\n[ERROR] {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    println!("=== 001: Custom Strategy ===\n");

    // ========================================================================
    // Setup
    // ========================================================================

    println!("[Setup] Loading catalog and driver...");

    let catalog = ScriptCatalog::new()
        .with(ClientScript::FindBindings, "return bindings(arguments[0], arguments[1]);")
        .with(ClientScript::FindRepeaterElement, "return cell.apply(null, arguments);");
    let driver = CommandDriver::new(StubTransport, catalog);
    println!("        ✓ {} catalog scripts\n", driver.catalog().len());

    let mut by = NgBy::new();

    // ========================================================================
    // Custom script strategy
    // ========================================================================

    println!("[1] register_strategy('dataTest')");
    by.register_strategy("dataTest", DATA_TEST_SCRIPT);

    let save = by.locate("dataTest", vec![json!("save")])?;
    let found = save.find_elements(&driver, None).await?;
    println!("    ✓ {save} matched {} elements\n", found.len());

    // ========================================================================
    // Primitive strategy under a new name
    // ========================================================================

    println!("[2] register('button', Native(By::Css))");
    by.register("button", Strategy::Native(By::Css));

    let button = by.locate("button", vec![json!("button.primary")])?;
    let first = button.find_element(&driver, None).await?;
    println!("    ✓ {button} -> {first}\n");

    // ========================================================================
    // Built-ins scoped to an element
    // ========================================================================

    println!("[3] binding inside {first}");
    let status = by.binding("{{status}}");
    let found = status.find_elements(&driver, Some(&first)).await?;
    println!("    ✓ {status} matched {} elements\n", found.len());

    println!("[4] repeater cell");
    let cell = by.repeater("cat in pets").row(0)?.column("{{cat.name}}")?;
    let name = cell.find_element(&driver, None).await?;
    println!("    ✓ {cell} -> {name}\n");

    println!("=== Done ===");
    Ok(())
}
