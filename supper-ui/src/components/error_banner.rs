//! Inline banner for a failed action

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Amber warning banner with an icon, a heading and the failure detail.
///
/// Shown on the sign-in card when the identity provider rejects a sign-in.
#[component]
pub fn ErrorBanner(heading: String, detail: String) -> Element {
    rsx! {
        div { class: "bg-amber-900/30 border border-amber-700/50 rounded-lg p-4 mb-4",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-500 flex-shrink-0 mt-0.5" }
                div { class: "flex-1",
                    p { class: "text-sm font-medium text-amber-200 mb-1", "{heading}" }
                    p { class: "text-sm text-gray-400 select-text break-words", "{detail}" }
                }
            }
        }
    }
}
