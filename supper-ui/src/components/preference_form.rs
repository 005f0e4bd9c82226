//! Supper preference form
//!
//! Five independent fields with no cross-field validation. The cuisine and
//! time fields report raw text; parsing happens in the page state.

use crate::components::{Button, ButtonSize, ButtonVariant, FormField, Select, TextInput, TextInputType};
use dioxus::prelude::*;
use supper_common::DietaryPreference;

#[component]
pub fn PreferenceFormView(
    diet: DietaryPreference,
    /// Comma-separated cuisines as typed
    cuisines: String,
    include: String,
    exclude: String,
    /// Minutes as typed
    time_budget: String,
    /// An idea request is outstanding; the submit control is disabled
    loading: bool,
    on_diet: EventHandler<DietaryPreference>,
    on_cuisines: EventHandler<String>,
    on_include: EventHandler<String>,
    on_exclude: EventHandler<String>,
    on_time_budget: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let diet_options: Vec<(String, String)> = DietaryPreference::ALL
        .iter()
        .map(|d| (d.value().to_string(), d.label().to_string()))
        .collect();

    rsx! {
        form {
            class: "space-y-4",
            onsubmit: move |evt| {
                evt.prevent_default();
                if !loading {
                    on_submit.call(());
                }
            },
            FormField { label: "Dietary Preference", id: "diet".to_string(),
                Select {
                    id: "diet".to_string(),
                    value: diet.value().to_string(),
                    options: diet_options,
                    onchange: move |v: String| on_diet.call(DietaryPreference::from_value(&v)),
                }
            }
            FormField { label: "Preferred Cuisines", id: "cuisines".to_string(),
                TextInput {
                    id: "cuisines".to_string(),
                    value: cuisines,
                    placeholder: "e.g., Italian, Chinese, Mexican",
                    on_input: move |v| on_cuisines.call(v),
                }
            }
            FormField { label: "Ingredients to Include", id: "include".to_string(),
                TextInput {
                    id: "include".to_string(),
                    value: include,
                    placeholder: "e.g., chicken, broccoli",
                    on_input: move |v| on_include.call(v),
                }
            }
            FormField { label: "Ingredients to Exclude", id: "exclude".to_string(),
                TextInput {
                    id: "exclude".to_string(),
                    value: exclude,
                    placeholder: "e.g., nuts, dairy",
                    on_input: move |v| on_exclude.call(v),
                }
            }
            FormField { label: "Cooking Time Available (minutes)", id: "time".to_string(),
                TextInput {
                    id: "time".to_string(),
                    input_type: TextInputType::Number,
                    value: time_budget,
                    placeholder: "e.g., 30",
                    on_input: move |v| on_time_budget.call(v),
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                r#type: "submit",
                class: "w-full".to_string(),
                loading,
                onclick: |_| {},
                if loading {
                    "Loading..."
                } else {
                    "Get Supper Ideas"
                }
            }
        }
    }
}
