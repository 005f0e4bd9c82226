//! Sign-in card

use crate::components::{
    Button, ButtonSize, ButtonVariant, ErrorBanner, FormField, PageCard, TextInput, TextInputType,
};
use dioxus::prelude::*;

/// The hosted platform the sign-in runs through
const PLATFORM_URL: &str = "https://www.zapt.ai";

/// A third-party identity provider offered on the sign-in card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProviderOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Email/password sign-in plus one button per third-party provider
#[component]
pub fn SignInView(
    email: String,
    password: String,
    /// A sign-in request is outstanding
    busy: bool,
    /// Why the last attempt failed
    error: Option<String>,
    providers: Vec<ProviderOption>,
    on_email: EventHandler<String>,
    on_password: EventHandler<String>,
    on_submit: EventHandler<()>,
    /// Called with the provider id
    on_provider: EventHandler<&'static str>,
) -> Element {
    let can_submit = !busy && !email.trim().is_empty() && !password.is_empty();

    rsx! {
        PageCard {
            h2 { class: "text-2xl font-bold mb-4 text-center text-purple-500",
                "Sign in with ZAPT"
            }
            a {
                href: PLATFORM_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                class: "text-purple-300 hover:underline mb-4 block text-center",
                "Learn more about ZAPT"
            }
            if let Some(detail) = error {
                ErrorBanner { heading: "Could not sign in".to_string(), detail }
            }
            form {
                class: "space-y-4",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if can_submit {
                        on_submit.call(());
                    }
                },
                FormField { label: "Email address", id: "sign-in-email".to_string(),
                    TextInput {
                        id: "sign-in-email".to_string(),
                        input_type: TextInputType::Email,
                        value: email,
                        placeholder: "you@example.com",
                        autofocus: true,
                        on_input: move |v| on_email.call(v),
                    }
                }
                FormField { label: "Password", id: "sign-in-password".to_string(),
                    TextInput {
                        id: "sign-in-password".to_string(),
                        input_type: TextInputType::Password,
                        value: password,
                        on_input: move |v| on_password.call(v),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    class: "w-full".to_string(),
                    disabled: !can_submit,
                    loading: busy,
                    onclick: |_| {},
                    if busy {
                        "Signing in..."
                    } else {
                        "Sign in"
                    }
                }
            }
            if !providers.is_empty() {
                div { class: "mt-6 space-y-2",
                    p { class: "text-sm text-gray-400 text-center", "or continue with" }
                    for provider in providers {
                        Button {
                            key: "{provider.id}",
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Medium,
                            class: "w-full".to_string(),
                            disabled: busy,
                            onclick: move |_| on_provider.call(provider.id),
                            "{provider.label}"
                        }
                    }
                }
            }
        }
    }
}
