//! Dismissible notice toast

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// A notice shown over the page until dismissed
#[component]
pub fn NoticeToast(
    /// The notice to display
    message: String,
    /// Called when the user dismisses the notice
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed bottom-4 right-4 bg-gray-700 border border-gray-600 text-white px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
            role: "alert",
            div { class: "flex items-center justify-between gap-4",
                span { class: "flex-1", "{message}" }
                ChromelessButton {
                    class: Some("text-gray-300 hover:text-white".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
