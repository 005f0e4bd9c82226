//! The supper idea client service
//!
//! Owns the configuration and one implementation of each boundary. Page
//! handlers call into it around `ClientState` transitions:
//!
//! ```ignore
//! let (next, ticket) = state.begin_ideas();
//! set_state(next);
//! let outcome = client.request_ideas(&prefs).await.map_err(|e| e.to_string());
//! set_state(current_state().finish_ideas(ticket, outcome));
//! ```

use crate::auth::{AuthError, AuthProvider, OAuthProvider, SessionStore, StoredSession};
use crate::config::ClientConfig;
use crate::export::{strip_tags, ExportDocument, ExportError, FileSaver, DOCX_MIME};
use crate::generation::{
    decode_ideas, decode_image, ideas_payload, image_payload, GenerationBackend, GenerationError,
    IDEAS_EVENT, IMAGE_EVENT,
};
use crate::session::{SessionListeners, SessionSubscription};
use crate::share::{ShareError, ShareOutcome, ShareTarget};
use std::rc::Rc;
use supper_common::{
    build_idea_prompt, build_image_prompt, ClientState, Identity, IdeaResult, PreferenceSet,
};
use tracing::{debug, error, info, warn};

/// Boundary implementations the client talks through
#[derive(Clone)]
pub struct Boundaries {
    pub auth: Rc<dyn AuthProvider>,
    pub sessions: Rc<dyn SessionStore>,
    pub generation: Rc<dyn GenerationBackend>,
    pub saver: Rc<dyn FileSaver>,
    pub share: Rc<dyn ShareTarget>,
}

#[derive(Clone)]
pub struct SupperClient {
    config: ClientConfig,
    boundaries: Boundaries,
    listeners: SessionListeners,
}

impl PartialEq for SupperClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl SupperClient {
    pub fn new(config: ClientConfig, boundaries: Boundaries) -> Self {
        Self {
            config,
            boundaries,
            listeners: SessionListeners::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -- Session --

    /// Register for identity changes until the returned guard is dropped
    pub fn subscribe(&self, listener: impl Fn(Option<Identity>) + 'static) -> SessionSubscription {
        self.listeners.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn access_token(&self) -> Option<String> {
        self.boundaries.sessions.load().map(|s| s.access_token)
    }

    fn set_identity(&self, identity: Option<&Identity>) {
        self.listeners.notify(identity);
    }

    /// Look up the identity for the stored session, if any. A stale token is
    /// discarded. Listeners hear about a restored identity.
    pub async fn bootstrap(&self) -> Option<Identity> {
        let token = self.access_token()?;
        match self.boundaries.auth.current_user(&token).await {
            Ok(identity) => {
                info!("Restored session for {}", identity.id);
                self.set_identity(Some(&identity));
                Some(identity)
            }
            Err(e) => {
                warn!("Stored session is no longer valid: {}", e);
                self.boundaries.sessions.clear();
                None
            }
        }
    }

    /// Finish a third-party sign-in from the redirect's URL fragment
    pub async fn complete_redirect(&self, fragment: &str) -> Result<Option<Identity>, AuthError> {
        let Some(session) = StoredSession::from_redirect_fragment(fragment)? else {
            return Ok(None);
        };
        let identity = self.boundaries.auth.current_user(&session.access_token).await?;
        self.boundaries.sessions.save(&session);
        info!("Signed in {} via redirect", identity.id);
        self.set_identity(Some(&identity));
        Ok(Some(identity))
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let (session, identity) = self
            .boundaries
            .auth
            .sign_in_with_password(email.trim(), password)
            .await?;
        self.boundaries.sessions.save(&session);
        info!("Signed in {}", identity.id);
        self.set_identity(Some(&identity));
        Ok(identity)
    }

    pub fn authorize_url(&self, provider: OAuthProvider, current_url: &str) -> Result<String, AuthError> {
        let redirect_to = self.config.redirect_url.as_deref().unwrap_or(current_url);
        self.boundaries.auth.authorize_url(provider, redirect_to)
    }

    /// Sign out. The local session is dropped even if the provider call fails.
    pub async fn sign_out(&self) {
        if let Some(token) = self.access_token() {
            if let Err(e) = self.boundaries.auth.sign_out(&token).await {
                error!("Sign-out request failed: {}", e);
            }
        }
        self.boundaries.sessions.clear();
        info!("Signed out");
        self.set_identity(None);
    }

    // -- Generation --

    /// Ask for supper ideas in the configured contract
    pub async fn request_ideas(&self, prefs: &PreferenceSet) -> Result<IdeaResult, GenerationError> {
        let contract = self.config.contract;
        let prompt = build_idea_prompt(prefs, contract);
        let token = self.access_token();
        let result = self
            .boundaries
            .generation
            .create_event(IDEAS_EVENT, ideas_payload(&prompt, contract), token.as_deref())
            .await;
        match result {
            Ok(value) => {
                let ideas = decode_ideas(contract, value);
                match &ideas {
                    IdeaResult::Text(text) => info!("Received supper ideas ({} chars)", text.len()),
                    IdeaResult::List(meals) => info!("Received supper ideas ({} meals)", meals.len()),
                }
                Ok(ideas)
            }
            Err(e) => {
                error!("Error getting supper ideas: {}", e);
                Err(e)
            }
        }
    }

    /// Ask for an image of `meal`
    pub async fn request_image(&self, meal: &str) -> Result<String, GenerationError> {
        let prompt = build_image_prompt(meal);
        let token = self.access_token();
        let result = self
            .boundaries
            .generation
            .create_event(IMAGE_EVENT, image_payload(&prompt), token.as_deref())
            .await
            .and_then(decode_image);
        if let Err(e) = &result {
            error!("Error generating image for {}: {}", meal, e);
        }
        result
    }

    /// Submit the form: issue a ticket, fetch, and land the result on the
    /// state current at completion time.
    pub async fn submit_ideas(
        &self,
        state: ClientState,
        current: impl Fn() -> ClientState,
        publish: impl Fn(ClientState),
    ) {
        let prefs = state.preferences.clone();
        let (next, ticket) = state.begin_ideas();
        publish(next);
        let outcome = self.request_ideas(&prefs).await.map_err(|e| e.to_string());
        publish(current().finish_ideas(ticket, outcome));
    }

    /// Whether results in the configured contract offer meal images
    fn images_enabled(&self) -> bool {
        self.config.contract.supports_images()
    }

    /// Select a meal and fetch its image, unless an image request is
    /// already in flight or the contract has no meals to picture.
    pub async fn choose_meal(
        &self,
        state: ClientState,
        meal: String,
        current: impl Fn() -> ClientState,
        publish: impl Fn(ClientState),
    ) {
        if !self.images_enabled() {
            debug!("{:?} results have no meal images, ignoring {}", self.config.contract, meal);
            return;
        }
        let (next, ticket) = state.select_meal(meal.clone());
        let Some(ticket) = ticket else {
            info!("Image request already in flight, ignoring selection of {}", meal);
            return;
        };
        publish(next);
        let outcome = self.request_image(&meal).await.map_err(|e| e.to_string());
        publish(current().finish_image(ticket, outcome));
    }

    // -- Export / share --

    /// Save the current ideas as a one-paragraph document
    pub fn export(&self, state: &ClientState) -> Result<(), ExportError> {
        let text = state.result_text().ok_or(ExportError::Empty)?;
        let bytes = ExportDocument::from_text(&text).to_docx()?;
        let file_name = &self.config.export_file_name;
        self.boundaries.saver.save(file_name, DOCX_MIME, bytes)?;
        info!("Exported supper ideas to {}", file_name);
        Ok(())
    }

    pub fn share_supported(&self) -> bool {
        self.boundaries.share.is_supported()
    }

    /// Share the current ideas through the platform share sheet
    pub async fn share(&self, state: &ClientState) -> ShareOutcome {
        if !self.boundaries.share.is_supported() {
            return ShareOutcome::Unsupported;
        }
        let text = strip_tags(&state.result_text().unwrap_or_default());
        match self
            .boundaries
            .share
            .share(&self.config.share_title, &text)
            .await
        {
            Ok(()) => ShareOutcome::Shared,
            Err(ShareError::Cancelled) => {
                info!("Share cancelled");
                ShareOutcome::Cancelled
            }
            Err(ShareError::Failed(e)) => {
                error!("Error sharing: {}", e);
                ShareOutcome::Failed(e)
            }
        }
    }
}
