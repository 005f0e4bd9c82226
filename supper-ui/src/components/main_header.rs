//! Heading row of the main page

use crate::components::icons::LogOutIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn MainHeaderView(
    /// Signed-in user's email, when the provider reports one
    email: Option<String>,
    on_sign_out: EventHandler<()>,
) -> Element {
    rsx! {
        h1 { class: "text-2xl font-bold mb-6 text-center text-purple-500", "Get Supper Ideas" }
        div { class: "flex items-center justify-end gap-4 mb-6",
            if let Some(email) = email {
                span { class: "text-sm text-gray-400 truncate", "{email}" }
            }
            Button {
                variant: ButtonVariant::Danger,
                size: ButtonSize::Small,
                onclick: move |_| on_sign_out.call(()),
                LogOutIcon {}
                "Sign Out"
            }
        }
    }
}
