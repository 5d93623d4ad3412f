//! Locator dispatch against a recording driver.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Value, json};

use ng_locators::{
    By, ClientScript, ElementId, Error, Locator, LocatorDriver, NgBy, Result, ScriptSource,
};

// ============================================================================
// Recording Driver
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Script {
        script: ScriptSource,
        args: Vec<Value>,
        scope: Option<ElementId>,
    },
    Native {
        by: By,
        scope: Option<ElementId>,
    },
}

/// Captures every call and returns a fixed element list.
#[derive(Default)]
struct RecordingDriver {
    calls: Mutex<Vec<Call>>,
    matches: Vec<ElementId>,
}

impl RecordingDriver {
    fn returning(ids: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            matches: ids.iter().map(|id| ElementId::new(*id)).collect(),
        }
    }

    fn last_call(&self) -> Call {
        self.calls.lock().last().cloned().expect("driver was called")
    }
}

#[async_trait]
impl LocatorDriver for RecordingDriver {
    async fn find_elements_by_script(
        &self,
        script: &ScriptSource,
        args: &[Value],
        scope: Option<&ElementId>,
    ) -> Result<Vec<ElementId>> {
        self.calls.lock().push(Call::Script {
            script: script.clone(),
            args: args.to_vec(),
            scope: scope.cloned(),
        });
        Ok(self.matches.clone())
    }

    async fn find_elements(&self, by: &By, scope: Option<&ElementId>) -> Result<Vec<ElementId>> {
        self.calls.lock().push(Call::Native {
            by: by.clone(),
            scope: scope.cloned(),
        });
        Ok(self.matches.clone())
    }
}

/// Always fails, like a driver that lost its session.
struct FailingDriver;

#[async_trait]
impl LocatorDriver for FailingDriver {
    async fn find_elements_by_script(
        &self,
        _script: &ScriptSource,
        _args: &[Value],
        _scope: Option<&ElementId>,
    ) -> Result<Vec<ElementId>> {
        Err(Error::script_error("angular is not defined"))
    }

    async fn find_elements(&self, _by: &By, _scope: Option<&ElementId>) -> Result<Vec<ElementId>> {
        Err(Error::protocol("session closed"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_binding_dispatch() {
    let by = NgBy::new();
    let driver = RecordingDriver::returning(&["span-1"]);
    let scope = ElementId::new("body");

    let locator = by.binding("{{status}}");
    assert_eq!(locator.label(), r#"by.binding("{{status}}")"#);

    let found = locator
        .find_elements(&driver, Some(&scope))
        .await
        .expect("driver succeeds");
    assert_eq!(found, vec![ElementId::new("span-1")]);

    assert_eq!(
        driver.last_call(),
        Call::Script {
            script: ClientScript::FindBindings.into(),
            args: vec![json!("{{status}}")],
            scope: Some(scope),
        }
    );
}

#[tokio::test]
async fn test_custom_strategy_dispatch() {
    let mut by = NgBy::new();
    by.register_strategy("custom", "return arguments[1].querySelectorAll('[x]');");
    let driver = RecordingDriver::returning(&[]);
    let scope = ElementId::new("form");

    let locator = by.locate("custom", vec![json!("x")]).expect("registered");
    assert_eq!(locator.label(), r#"by.custom("x")"#);

    locator
        .find_elements(&driver, Some(&scope))
        .await
        .expect("driver succeeds");

    assert_eq!(
        driver.last_call(),
        Call::Script {
            script: ScriptSource::Inline(
                "return arguments[1].querySelectorAll('[x]');".to_string()
            ),
            args: vec![json!("x")],
            scope: Some(scope),
        }
    );
}

#[tokio::test]
async fn test_overridden_builtin_is_unreachable() {
    let mut by = NgBy::new();
    by.register_strategy("model", "override();");
    let driver = RecordingDriver::returning(&[]);

    by.model("user").find_elements(&driver, None).await.expect("ok");

    match driver.last_call() {
        Call::Script { script, .. } => {
            assert_eq!(script, ScriptSource::Inline("override();".to_string()));
            assert_ne!(script, ScriptSource::Catalog(ClientScript::FindByModel));
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[tokio::test]
async fn test_repeater_cell_paths_invoke_identically() {
    let by = NgBy::new();
    let driver = RecordingDriver::returning(&["cell"]);

    let row_first = by
        .repeater("cat in pets")
        .row(1)
        .and_then(|row| row.column("{{cat.name}}"))
        .expect("chain");
    let column_first = by
        .repeater("cat in pets")
        .column("{{cat.name}}")
        .and_then(|column| column.row(1))
        .expect("chain");

    assert_eq!(
        row_first.label(),
        r#"by.repeater("cat in pets").row("1").column("{{cat.name}}")"#
    );
    assert_eq!(
        column_first.label(),
        r#"by.repeater("cat in pets").column("{{cat.name}}").row("1")"#
    );

    row_first.find_elements(&driver, None).await.expect("ok");
    let first = driver.last_call();
    column_first.find_elements(&driver, None).await.expect("ok");
    let second = driver.last_call();

    assert_eq!(first, second);
    assert_eq!(
        first,
        Call::Script {
            script: ClientScript::FindRepeaterElement.into(),
            args: vec![json!("cat in pets"), json!(1), json!("{{cat.name}}")],
            scope: None,
        }
    );
}

#[tokio::test]
async fn test_repeater_scripts_per_state() {
    let by = NgBy::new();
    let driver = RecordingDriver::returning(&[]);
    let root = by.repeater("x in xs");

    let cases: Vec<(Locator, ClientScript, Vec<Value>)> = vec![
        (root.clone(), ClientScript::FindAllRepeaterRows, vec![json!("x in xs")]),
        (
            root.row(4).expect("row"),
            ClientScript::FindRepeaterRows,
            vec![json!("x in xs"), json!(4)],
        ),
        (
            root.column("{{x.a}}").expect("column"),
            ClientScript::FindRepeaterColumn,
            vec![json!("x in xs"), json!("{{x.a}}")],
        ),
    ];

    for (locator, expected_script, expected_args) in cases {
        locator.find_elements(&driver, None).await.expect("ok");
        assert_eq!(
            driver.last_call(),
            Call::Script {
                script: expected_script.into(),
                args: expected_args,
                scope: None,
            }
        );
    }
}

#[tokio::test]
async fn test_native_strategies_remain_available() {
    let by = NgBy::new();
    let driver = RecordingDriver::returning(&["btn"]);

    by.css("button.save").find_elements(&driver, None).await.expect("ok");
    assert_eq!(
        driver.last_call(),
        Call::Native {
            by: By::css("button.save"),
            scope: None,
        }
    );
}

#[tokio::test]
async fn test_find_element_reports_label_when_empty() {
    let by = NgBy::new();
    let driver = RecordingDriver::returning(&[]);

    let err = by
        .button_text("Save")
        .find_element(&driver, None)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"No element found using locator: by.buttonText("Save")"#
    );
}

#[tokio::test]
async fn test_find_element_returns_first_match() {
    let by = NgBy::new();
    let driver = RecordingDriver::returning(&["a", "b"]);

    let first = by
        .partial_button_text("Sa")
        .find_element(&driver, None)
        .await
        .expect("match");
    assert_eq!(first, ElementId::new("a"));
}

#[tokio::test]
async fn test_driver_errors_pass_through() {
    let by = NgBy::new();

    let err = by
        .binding("{{x}}")
        .find_elements(&FailingDriver, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ScriptError { ref message } if message == "angular is not defined"
    ));

    let err = by.id("main").find_element(&FailingDriver, None).await.unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[tokio::test]
async fn test_shared_registry_across_tasks() {
    let mut by = NgBy::new();
    by.register_strategy("dataTest", "return [];");
    let by = Arc::new(by);
    let driver = Arc::new(RecordingDriver::returning(&["el"]));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let by = Arc::clone(&by);
            let driver = Arc::clone(&driver);
            tokio::spawn(async move {
                let locator = by.locate("dataTest", vec![json!(i)]).expect("registered");
                locator.find_elements(driver.as_ref(), None).await
            })
        })
        .collect();

    for handle in handles {
        let found = handle.await.expect("task joined").expect("search ok");
        assert_eq!(found, vec![ElementId::new("el")]);
    }
    assert_eq!(driver.calls.lock().len(), 4);
}

#[tokio::test]
async fn test_generated_scope_passes_through() {
    let mut by = NgBy::new();
    by.register("button", ng_locators::Strategy::Native(By::Css));
    let driver = RecordingDriver::returning(&["btn"]);
    let scope = ElementId::generate();

    let locator = by.locate("button", vec![json!(".save")]).expect("registered");
    assert_eq!(locator.label(), r#"by.button(".save")"#);

    locator
        .find_elements(&driver, Some(&scope))
        .await
        .expect("driver succeeds");
    assert_eq!(
        driver.last_call(),
        Call::Native {
            by: By::css(".save"),
            scope: Some(scope),
        }
    );
}

#[tokio::test]
async fn test_dyn_driver() {
    let by = NgBy::new();
    let driver: Box<dyn LocatorDriver> = Box::new(RecordingDriver::returning(&["x"]));

    let found = by.model("q").find_elements(driver.as_ref(), None).await.expect("ok");
    assert_eq!(found.len(), 1);
}

#[test]
fn test_dispatch_without_runtime_macro() {
    let by = NgBy::new();
    let driver = RecordingDriver::returning(&["opt"]);

    let found = tokio_test::block_on(by.selected_option("user").find_elements(&driver, None))
        .expect("driver succeeds");
    assert_eq!(found, vec![ElementId::new("opt")]);
    assert!(matches!(
        driver.last_call(),
        Call::Script { script: ScriptSource::Catalog(ClientScript::FindSelectedOptions), .. }
    ));
}
