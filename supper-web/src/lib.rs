pub mod browser;
pub mod pages;

use browser::{BlobDownloadSaver, LocalStorageSessionStore, NavigatorShare};
use dioxus::prelude::*;
use pages::{ConfigErrorPage, MainPage, SignInPage};
use std::rc::Rc;
use supper_common::{ClientState, Page};
use supper_core::{
    Boundaries, ClientConfig, ConfigError, EventApiClient, SupabaseAuth, SupperClient,
};
use supper_ui::{AppLayoutView, NoticeToast};
use tracing::{debug, error, info};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Wire the browser boundaries into a client for `config`
pub fn build_client(config: ClientConfig) -> SupperClient {
    let boundaries = Boundaries {
        auth: Rc::new(SupabaseAuth::new(&config.auth_url, &config.anon_key)),
        sessions: Rc::new(LocalStorageSessionStore),
        generation: Rc::new(EventApiClient::new(
            &config.functions_url,
            &config.anon_key,
            &config.app_id,
        )),
        saver: Rc::new(BlobDownloadSaver),
        share: Rc::new(NavigatorShare),
    };
    SupperClient::new(config, boundaries)
}

/// Runs once per page load; a bad config is reported here rather than on
/// every render of the error page
fn start_client(config: Result<ClientConfig, ConfigError>) -> Result<SupperClient, String> {
    config.map(build_client).map_err(|e| {
        error!("Cannot start: {}", e);
        e.to_string()
    })
}

#[component]
pub fn App() -> Element {
    let client = use_hook(|| start_client(ClientConfig::load()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        match client {
            Ok(client) => rsx! {
                SupperApp { client }
            },
            Err(message) => rsx! {
                AppLayoutView {
                    ConfigErrorPage { message }
                }
            },
        }
    }
}

/// Owns the page state for one page session
#[component]
fn SupperApp(client: SupperClient) -> Element {
    let state = use_signal(ClientState::new);
    use_context_provider(|| client.clone());

    // The page's only session listener; dropped with this scope
    use_hook(|| {
        let subscription = client.subscribe(move |identity| {
            let mut state = state;
            let next = state.peek().clone().with_identity(identity);
            state.set(next);
        });
        Rc::new(subscription)
    });

    let bootstrap_client = client.clone();
    use_future(move || {
        let client = bootstrap_client.clone();
        async move {
            debug!("Share sheet available: {}", client.share_supported());
            if let Some(fragment) = browser::url_fragment() {
                browser::clear_url_fragment();
                match client.complete_redirect(&fragment).await {
                    Ok(Some(_)) => return,
                    Ok(None) => {}
                    Err(e) => error!("Third-party sign-in failed: {}", e),
                }
            }
            if client.bootstrap().await.is_none() {
                info!("No session, showing sign-in");
            }
        }
    });

    let page = state.read().page();
    let notice = state.read().notice.clone();
    rsx! {
        AppLayoutView {
            extra: rsx! {
                if let Some(message) = notice {
                    NoticeToast {
                        message,
                        on_dismiss: move |_| {
                            let mut state = state;
                            let next = state.peek().clone().dismiss_notice();
                            state.set(next);
                        },
                    }
                }
            },
            match page {
                Page::SignIn => rsx! {
                    SignInPage {}
                },
                Page::Main => rsx! {
                    MainPage { state }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bad_config_is_reported_once() {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let message = start_client(Err(ConfigError::Missing("SUPPER_APP_ID"))).err();
        assert_eq!(
            message.as_deref(),
            Some("missing required setting SUPPER_APP_ID")
        );

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("Cannot start").count(), 1);
    }
}
