//! Generated image for the selected meal

use crate::components::icons::{ImageIcon, LoaderIcon};
use dioxus::prelude::*;

#[component]
pub fn MealImageView(meal: String, image_url: Option<String>, loading: bool) -> Element {
    rsx! {
        div { class: "mt-4",
            h4 { class: "text-lg font-semibold mb-2 text-purple-300", "{meal}" }
            if let Some(url) = image_url {
                img {
                    class: "w-full rounded-lg border border-gray-600",
                    src: "{url}",
                    alt: "{meal}",
                }
            } else if loading {
                div { class: "flex items-center justify-center gap-2 h-48 rounded-lg bg-gray-800 text-gray-400",
                    LoaderIcon { class: "w-5 h-5 animate-spin" }
                    span { "Generating image..." }
                }
            } else {
                div { class: "flex items-center justify-center h-48 rounded-lg bg-gray-800 text-gray-500",
                    ImageIcon { class: "w-8 h-8" }
                }
            }
        }
    }
}
