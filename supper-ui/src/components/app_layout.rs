//! App layout view component
//!
//! Centers the active card on a dark page, with a slot for overlays.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// The active page's card
    children: Element,
    /// Optional overlays (notices)
    #[props(default)]
    extra: Option<Element>,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center min-h-screen bg-gray-900 text-white p-4",
            {children}
            if let Some(ex) = extra {
                {ex}
            }
        }
    }
}

/// Rounded card holding one page
#[component]
pub fn PageCard(#[props(default)] wide: bool, children: Element) -> Element {
    let width = if wide { "max-w-2xl" } else { "max-w-md" };
    rsx! {
        div { class: "w-full {width} p-6 bg-gray-800 rounded-lg shadow-md", {children} }
    }
}
