use crate::browser;
use dioxus::prelude::*;
use supper_core::{OAuthProvider, SupperClient};
use supper_ui::{ProviderOption, SignInView};
use tracing::warn;

/// Sign-in page. A successful sign-in notifies the session listener, which
/// routes to the main page; nothing here touches the page state.
#[component]
pub fn SignInPage() -> Element {
    let client = use_context::<SupperClient>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let providers: Vec<ProviderOption> = OAuthProvider::ALL
        .iter()
        .map(|p| ProviderOption {
            id: p.id(),
            label: p.label(),
        })
        .collect();

    let submit_client = client.clone();
    let on_submit = move |_: ()| {
        let client = submit_client.clone();
        let email_value = email();
        let password_value = password();
        busy.set(true);
        error.set(None);
        spawn(async move {
            if let Err(e) = client.sign_in(&email_value, &password_value).await {
                warn!("Sign-in failed: {}", e);
                error.set(Some(e.to_string()));
                busy.set(false);
            }
        });
    };

    let on_provider = move |id: &'static str| {
        let Some(provider) = OAuthProvider::ALL.into_iter().find(|p| p.id() == id) else {
            return;
        };
        let Some(here) = browser::current_url() else {
            warn!("Cannot read the page URL for the {} redirect", id);
            return;
        };
        match client.authorize_url(provider, &here) {
            Ok(url) => browser::navigate_to(&url),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        SignInView {
            email: email(),
            password: password(),
            busy: busy(),
            error: error(),
            providers,
            on_email: move |v: String| email.set(v),
            on_password: move |v: String| password.set(v),
            on_submit,
            on_provider,
        }
    }
}
