//! Supper ideas result panel
//!
//! Free-text results are rendered as markdown. Meal lists render one button
//! per meal; choosing one asks for its image.

use crate::components::icons::{DownloadIcon, ShareIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton, MealImageView};
use crate::markdown::render_markdown;
use dioxus::prelude::*;
use supper_common::IdeaResult;

#[component]
pub fn IdeasPanelView(
    ideas: IdeaResult,
    selected_meal: Option<String>,
    image_url: Option<String>,
    /// An image request is outstanding; further selections are ignored
    image_loading: bool,
    on_select_meal: EventHandler<String>,
    on_export: EventHandler<()>,
    on_share: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "mt-6 p-4 bg-gray-700 rounded-lg border border-gray-600",
            h3 { class: "text-xl font-semibold mb-2 text-purple-300", "Your Supper Ideas:" }
            {
                match ideas {
                    IdeaResult::Text(text) => rsx! {
                        div {
                            class: "text-white prose prose-invert",
                            dangerous_inner_html: render_markdown(&text),
                        }
                    },
                    IdeaResult::List(meals) => rsx! {
                        ul { class: "space-y-2",
                            for (i , meal) in meals.into_iter().enumerate() {
                                MealRow {
                                    key: "{i}",
                                    selected: selected_meal.as_deref() == Some(meal.as_str()),
                                    meal,
                                    disabled: image_loading,
                                    on_select: on_select_meal,
                                }
                            }
                        }
                    },
                }
            }
            if let Some(meal) = selected_meal.clone() {
                MealImageView { meal, image_url, loading: image_loading }
            }
            div { class: "flex gap-4 mt-4",
                Button {
                    variant: ButtonVariant::Export,
                    size: ButtonSize::Medium,
                    class: "flex-1".to_string(),
                    onclick: move |_| on_export.call(()),
                    DownloadIcon {}
                    "Save as Word"
                }
                Button {
                    variant: ButtonVariant::Share,
                    size: ButtonSize::Medium,
                    class: "flex-1".to_string(),
                    onclick: move |_| on_share.call(()),
                    ShareIcon {}
                    "Share"
                }
            }
        }
    }
}

#[component]
fn MealRow(meal: String, selected: bool, disabled: bool, on_select: EventHandler<String>) -> Element {
    let class = if selected {
        "w-full text-left px-3 py-2 rounded bg-purple-600/40 text-white"
    } else {
        "w-full text-left px-3 py-2 rounded hover:bg-gray-600 text-white"
    };
    let label = format!("Show a picture of {meal}");

    rsx! {
        li {
            ChromelessButton {
                class: class.to_string(),
                aria_label: label,
                disabled,
                onclick: {
                    let meal = meal.clone();
                    move |_| on_select.call(meal.clone())
                },
                "{meal}"
            }
        }
    }
}
