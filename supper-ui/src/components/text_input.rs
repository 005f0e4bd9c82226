//! Text input component

use dioxus::prelude::*;

/// The HTML input type
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputType {
    #[default]
    Text,
    Email,
    Password,
    /// Whole minutes; the browser offers a numeric keypad
    Number,
}

impl TextInputType {
    fn as_str(&self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Email => "email",
            TextInputType::Password => "password",
            TextInputType::Number => "number",
        }
    }
}

/// Styled input reporting every keystroke through `on_input`
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] input_type: TextInputType,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] autofocus: bool,
) -> Element {
    let base = "w-full px-3 py-2 bg-gray-700 border border-gray-600 rounded box-border focus:outline-none focus:ring-1 focus:ring-purple-500/50 text-white placeholder-gray-400";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    let class = format!("{base} {disabled_class}");
    let min = (input_type == TextInputType::Number).then_some("1");

    rsx! {
        input {
            r#type: input_type.as_str(),
            class: "{class}",
            id: id.as_deref(),
            value: "{value}",
            min,
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}

/// A labelled form row
#[component]
pub fn FormField(label: &'static str, #[props(default)] id: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            label { class: "block mb-1 text-purple-300", r#for: id.as_deref(), "{label}" }
            {children}
        }
    }
}
