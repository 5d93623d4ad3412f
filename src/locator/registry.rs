//! Strategy registry.
//!
//! [`NgBy`] maps strategy names to factories. It starts out with every
//! primitive [`By`] strategy and the framework built-ins, and accepts custom
//! strategies at runtime:
//!
//! ```ignore
//! use ng_locators::NgBy;
//!
//! let mut by = NgBy::new();
//! by.register_strategy("dataTest", "var using = arguments[1] || document; ...");
//!
//! let status = by.binding("{{status}}");
//! let row = by.repeater("cat in pets").row(0)?;
//! let custom = by.locate("dataTest", vec!["save".into()])?;
//! ```
//!
//! Registration overwrites silently, built-ins included, and typed methods
//! such as [`NgBy::binding`] resolve through the map at call time.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashMap;
use serde_json::{Value, json};
use tracing::debug;

use crate::error::{Error, Result};

use super::by::By;
use super::descriptor::{Locator, NativeLocator, ScriptLocator, join_args};
use super::repeater::{REPEATER, Repeater};
use super::script::{ClientScript, ScriptSource};

// ============================================================================
// Built-in Tables
// ============================================================================

/// Primitive strategies, keyed by protocol name.
const NATIVE_STRATEGIES: &[(&str, fn(String) -> By)] = &[
    ("css", By::Css),
    ("xpath", By::XPath),
    ("text", By::Text),
    ("partialText", By::PartialText),
    ("id", By::Id),
    ("tag", By::Tag),
    ("name", By::Name),
    ("class", By::Class),
    ("linkText", By::LinkText),
    ("partialLinkText", By::PartialLinkText),
];

/// Framework strategies backed by a single catalog script.
///
/// `select`, `input` and `textarea` are deprecated in favour of `model` but
/// dispatch to their own scripts.
const SCRIPT_STRATEGIES: &[(&str, ClientScript)] = &[
    ("binding", ClientScript::FindBindings),
    ("select", ClientScript::FindSelects),
    ("selectedOption", ClientScript::FindSelectedOptions),
    ("input", ClientScript::FindInputs),
    ("model", ClientScript::FindByModel),
    ("buttonText", ClientScript::FindByButtonText),
    ("partialButtonText", ClientScript::FindByPartialButtonText),
    ("textarea", ClientScript::FindTextareas),
];

// ============================================================================
// Strategy
// ============================================================================

/// A locator factory stored in the registry.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Primitive driver strategy; the first argument is the selector value.
    Native(fn(String) -> By),
    /// Evaluate a script with the call arguments.
    Script(ScriptSource),
    /// Chainable repeater; the first argument is the repeat expression.
    Repeater,
}

impl Strategy {
    /// Produces a locator for a call made under `name`.
    ///
    /// The label always starts with `name`, whichever kind of strategy is
    /// registered under it.
    #[must_use]
    pub fn build(&self, name: &str, args: Vec<Value>) -> Locator {
        match self {
            Self::Native(construct) => NativeLocator::new(name, construct(first_arg(&args))).into(),
            Self::Script(script) => ScriptLocator::new(name, script.clone(), args).into(),
            Self::Repeater => Repeater::named(name, first_arg(&args)).into(),
        }
    }

    /// Returns `true` for script-backed strategies.
    #[inline]
    #[must_use]
    pub fn is_script(&self) -> bool {
        matches!(self, Self::Script(_))
    }

    fn describe(&self) -> &str {
        match self {
            Self::Native(_) => "native",
            Self::Script(script) => script.name(),
            Self::Repeater => REPEATER,
        }
    }
}

fn first_arg(args: &[Value]) -> String {
    join_args(args.get(..1).unwrap_or_default())
}

// ============================================================================
// NgBy
// ============================================================================

/// Registry of locator strategies.
///
/// Configure once, then share immutably (e.g. behind an `Arc`). Mutation
/// takes `&mut self`, so concurrent registration must be serialized by the
/// owner.
#[derive(Debug, Clone)]
pub struct NgBy {
    strategies: FxHashMap<String, Strategy>,
}

impl Default for NgBy {
    fn default() -> Self {
        Self::new()
    }
}

impl NgBy {
    /// Creates a registry with every primitive and built-in strategy.
    #[must_use]
    pub fn new() -> Self {
        let mut strategies = FxHashMap::default();

        for (name, construct) in NATIVE_STRATEGIES {
            strategies.insert((*name).to_string(), Strategy::Native(*construct));
        }
        for (name, script) in SCRIPT_STRATEGIES {
            strategies.insert((*name).to_string(), Strategy::Script((*script).into()));
        }
        strategies.insert(REPEATER.to_string(), Strategy::Repeater);

        Self { strategies }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Installs `strategy` under `name`, returning whatever it replaced.
    pub fn register(&mut self, name: impl Into<String>, strategy: Strategy) -> Option<Strategy> {
        let name = name.into();
        debug!(
            name = %name,
            kind = strategy.describe(),
            script = strategy.is_script(),
            "Registering locator strategy"
        );

        let previous = self.strategies.insert(name, strategy);
        if let Some(previous) = &previous {
            debug!(replaced = previous.describe(), "Locator strategy overwritten");
        }
        previous
    }

    /// Installs a script-backed strategy under `name`.
    ///
    /// The script receives the call arguments followed by the scoping
    /// element and must return an array of elements. Neither `name` nor
    /// `script` is validated.
    pub fn register_strategy(
        &mut self,
        name: impl Into<String>,
        script: impl Into<ScriptSource>,
    ) -> Option<Strategy> {
        self.register(name, Strategy::Script(script.into()))
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns the strategy registered under `name`.
    #[inline]
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Strategy> {
        self.strategies.get(name)
    }

    /// Returns `true` if a strategy is registered under `name`.
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Registered strategy names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Invokes the strategy registered under `name` with `args`.
    pub fn locate(&self, name: &str, args: Vec<Value>) -> Result<Locator> {
        self.resolve(name)
            .map(|strategy| strategy.build(name, args))
            .ok_or_else(|| Error::unknown_strategy(name))
    }

    // Built-in names are inserted in `new` and never removed; `fallback`
    // only keeps the typed methods total.
    fn invoke(&self, name: &'static str, fallback: Strategy, value: impl Into<String>) -> Locator {
        let args = vec![json!(value.into())];
        self.resolve(name).unwrap_or(&fallback).build(name, args)
    }

    // ========================================================================
    // Framework Strategies
    // ========================================================================

    /// Elements bound to an expression.
    ///
    /// ```ignore
    /// // <span>{{status}}</span>
    /// let status = by.binding("{{status}}");
    /// ```
    pub fn binding(&self, descriptor: impl Into<String>) -> Locator {
        self.invoke("binding", Strategy::Script(ClientScript::FindBindings.into()), descriptor)
    }

    /// Elements bound to a model (`<input ng-model="user">`).
    pub fn model(&self, model: impl Into<String>) -> Locator {
        self.invoke("model", Strategy::Script(ClientScript::FindByModel.into()), model)
    }

    /// `<select>` bound to a model.
    #[deprecated(note = "use `model` instead")]
    pub fn select(&self, model: impl Into<String>) -> Locator {
        self.invoke("select", Strategy::Script(ClientScript::FindSelects.into()), model)
    }

    /// Selected option of a model-bound `<select>`.
    pub fn selected_option(&self, model: impl Into<String>) -> Locator {
        let fallback = Strategy::Script(ClientScript::FindSelectedOptions.into());
        self.invoke("selectedOption", fallback, model)
    }

    /// `<input>` bound to a model.
    #[deprecated(note = "use `model` instead")]
    pub fn input(&self, model: impl Into<String>) -> Locator {
        self.invoke("input", Strategy::Script(ClientScript::FindInputs.into()), model)
    }

    /// Buttons whose text equals `text`.
    pub fn button_text(&self, text: impl Into<String>) -> Locator {
        self.invoke("buttonText", Strategy::Script(ClientScript::FindByButtonText.into()), text)
    }

    /// Buttons whose text contains `text`.
    pub fn partial_button_text(&self, text: impl Into<String>) -> Locator {
        let fallback = Strategy::Script(ClientScript::FindByPartialButtonText.into());
        self.invoke("partialButtonText", fallback, text)
    }

    /// `<textarea>` bound to a model.
    #[deprecated(note = "use `model` instead")]
    pub fn textarea(&self, model: impl Into<String>) -> Locator {
        self.invoke("textarea", Strategy::Script(ClientScript::FindTextareas.into()), model)
    }

    /// Rows of a repeater.
    ///
    /// Chain with [`Locator::row`] and [`Locator::column`]:
    ///
    /// ```ignore
    /// // <div ng-repeat="cat in pets"><span>{{cat.name}}</span></div>
    /// let rows = by.repeater("cat in pets");
    /// let second = rows.row(1)?;
    /// let first_name = rows.row(0)?.column("{{cat.name}}")?;
    /// ```
    pub fn repeater(&self, descriptor: impl Into<String>) -> Locator {
        self.invoke(REPEATER, Strategy::Repeater, descriptor)
    }

    // ========================================================================
    // Primitive Strategies
    // ========================================================================

    /// CSS selector.
    pub fn css(&self, selector: impl Into<String>) -> Locator {
        self.invoke("css", Strategy::Native(By::Css), selector)
    }

    /// XPath expression.
    pub fn xpath(&self, expr: impl Into<String>) -> Locator {
        self.invoke("xpath", Strategy::Native(By::XPath), expr)
    }

    /// Exact text content.
    pub fn text(&self, text: impl Into<String>) -> Locator {
        self.invoke("text", Strategy::Native(By::Text), text)
    }

    /// Partial text content.
    pub fn partial_text(&self, text: impl Into<String>) -> Locator {
        self.invoke("partialText", Strategy::Native(By::PartialText), text)
    }

    /// Element ID.
    pub fn id(&self, id: impl Into<String>) -> Locator {
        self.invoke("id", Strategy::Native(By::Id), id)
    }

    /// Tag name.
    pub fn tag(&self, tag: impl Into<String>) -> Locator {
        self.invoke("tag", Strategy::Native(By::Tag), tag)
    }

    /// Name attribute.
    pub fn name(&self, name: impl Into<String>) -> Locator {
        self.invoke("name", Strategy::Native(By::Name), name)
    }

    /// Class name.
    pub fn class(&self, class: impl Into<String>) -> Locator {
        self.invoke("class", Strategy::Native(By::Class), class)
    }

    /// Exact link text.
    pub fn link_text(&self, text: impl Into<String>) -> Locator {
        self.invoke("linkText", Strategy::Native(By::LinkText), text)
    }

    /// Partial link text.
    pub fn partial_link_text(&self, text: impl Into<String>) -> Locator {
        self.invoke("partialLinkText", Strategy::Native(By::PartialLinkText), text)
    }
}

// ============================================================================
// Tests
// ============================================================================
