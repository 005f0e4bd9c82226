use dioxus::prelude::*;
use supper_ui::PageCard;

/// Shown instead of the app when the build carries no usable configuration
#[component]
pub fn ConfigErrorPage(message: String) -> Element {
    rsx! {
        PageCard {
            div { class: "text-center",
                p { class: "text-gray-300 text-lg mb-2", "Supper Ideas is not configured" }
                p { class: "text-gray-500 text-sm select-text", "{message}" }
            }
        }
    }
}
