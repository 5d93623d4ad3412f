//! Label format properties.

use proptest::prelude::*;
use serde_json::json;

use ng_locators::{Invocation, NgBy};

/// Descriptor strings without quotes or commas, so labels stay unambiguous.
fn descriptor() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .{}|_-]{0,24}"
}

proptest! {
    #[test]
    #[allow(deprecated)]
    fn builtin_labels_wrap_argument(arg in descriptor()) {
        let by = NgBy::new();
        let cases = [
            ("binding", by.binding(arg.clone())),
            ("model", by.model(arg.clone())),
            ("select", by.select(arg.clone())),
            ("selectedOption", by.selected_option(arg.clone())),
            ("input", by.input(arg.clone())),
            ("buttonText", by.button_text(arg.clone())),
            ("partialButtonText", by.partial_button_text(arg.clone())),
            ("textarea", by.textarea(arg.clone())),
            ("repeater", by.repeater(arg.clone())),
        ];
        for (name, locator) in cases {
            prop_assert_eq!(locator.label(), format!("by.{name}(\"{arg}\")"));
        }
    }

    #[test]
    fn repeater_chain_labels(d in descriptor(), i in 0usize..1000, b in descriptor()) {
        let root = NgBy::new().repeater(d.clone());

        let row = root.row(i).unwrap();
        prop_assert_eq!(row.label(), format!("by.repeater(\"{d}\").row(\"{i}\")"));
        prop_assert_eq!(
            row.column(b.clone()).unwrap().label(),
            format!("by.repeater(\"{d}\").row(\"{i}\").column(\"{b}\")")
        );

        let column = root.column(b.clone()).unwrap();
        prop_assert_eq!(column.label(), format!("by.repeater(\"{d}\").column(\"{b}\")"));
        prop_assert_eq!(
            column.row(i).unwrap().label(),
            format!("by.repeater(\"{d}\").column(\"{b}\").row(\"{i}\")")
        );
    }

    #[test]
    fn cell_invocation_ignores_chain_order(
        d in descriptor(),
        i in 0usize..1000,
        b in descriptor(),
    ) {
        let root = NgBy::new().repeater(d.clone());
        let a = root.row(i).and_then(|r| r.column(b.clone())).unwrap();
        let c = root.column(b.clone()).and_then(|c| c.row(i)).unwrap();

        prop_assert_eq!(a.invocation(), c.invocation());
        match a.invocation() {
            Invocation::Script { args, .. } => {
                prop_assert_eq!(args, vec![json!(d), json!(i), json!(b)]);
            }
            Invocation::Native(_) => prop_assert!(false, "cell must be script-backed"),
        }
    }

    #[test]
    fn custom_strategy_label(name in "[a-zA-Z]{1,12}", arg in descriptor()) {
        let mut by = NgBy::new();
        by.register_strategy(name.clone(), "return [];");

        let locator = by.locate(&name, vec![json!(arg.clone())]).unwrap();
        prop_assert_eq!(locator.label(), format!("by.{name}(\"{arg}\")"));
    }
}
