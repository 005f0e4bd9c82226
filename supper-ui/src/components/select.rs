//! Native `<select>` styled to match the form inputs
//!
//! ```ignore
//! Select {
//!     value: "Vegan",
//!     onchange: move |val: String| { ... },
//!     options: vec![("".into(), "No preference".into()), ("Vegan".into(), "Vegan".into())],
//! }
//! ```

use dioxus::prelude::*;

#[component]
pub fn Select(
    /// Currently selected value
    value: String,
    /// Called with the newly selected value
    onchange: EventHandler<String>,
    /// `(value, label)` pairs in display order
    options: Vec<(String, String)>,
    #[props(default)] id: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        select {
            class: "w-full px-3 py-2 bg-gray-700 border border-gray-600 rounded box-border text-white",
            id: id.as_deref(),
            disabled,
            onchange: move |e| onchange.call(e.value()),
            for (option_value , label) in options {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}
