//! Identity provider client
//!
//! Speaks the Supabase-compatible auth REST API: user lookup, password
//! sign-in, third-party redirect sign-in and sign-out. The session token
//! itself is kept by a `SessionStore`, which the web app backs with
//! `localStorage`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use supper_common::Identity;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("auth server rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("sign-in redirect failed: {0}")]
    Redirect(String),
    #[error("failed to build URL: {0}")]
    Url(String),
}

/// Third-party sign-in providers offered on the sign-in page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
    Apple,
}

impl OAuthProvider {
    pub const ALL: [OAuthProvider; 3] = [
        OAuthProvider::Google,
        OAuthProvider::Facebook,
        OAuthProvider::Apple,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
            OAuthProvider::Apple => "apple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Facebook => "Facebook",
            OAuthProvider::Apple => "Apple",
        }
    }
}

/// Tokens for the signed-in session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl StoredSession {
    /// Parse the `#access_token=...` fragment a third-party sign-in
    /// redirects back with. Fragments without a token give `Ok(None)`.
    pub fn from_redirect_fragment(fragment: &str) -> Result<Option<Self>, AuthError> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        if fragment.is_empty() {
            return Ok(None);
        }
        let params: HashMap<String, String> = serde_urlencoded::from_str(fragment)
            .map_err(|e| AuthError::Redirect(format!("unreadable fragment: {e}")))?;

        if let Some(error) = params.get("error") {
            let detail = params
                .get("error_description")
                .cloned()
                .unwrap_or_else(|| error.clone());
            return Err(AuthError::Redirect(detail));
        }

        Ok(params.get("access_token").map(|token| StoredSession {
            access_token: token.clone(),
            refresh_token: params.get("refresh_token").cloned(),
        }))
    }
}

/// Holds the current session token between page loads
pub trait SessionStore {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession);
    fn clear(&self);
}

/// Session store that forgets everything when dropped
#[derive(Default)]
pub struct MemorySessionStore {
    session: RefCell<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<StoredSession> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &StoredSession) {
        *self.session.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        self.session.borrow_mut().take();
    }
}

/// Identity provider operations.
///
/// Futures are not `Send`: in the browser they run on the page's event loop.
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Look up the user owning `access_token`
    async fn current_user(&self, access_token: &str) -> Result<Identity, AuthError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(StoredSession, Identity), AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// URL to send the browser to for third-party sign-in
    fn authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> Result<String, AuthError>;
}

// -- REST client --

#[derive(Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl From<UserResponse> for Identity {
    fn from(user: UserResponse) -> Self {
        Identity {
            id: user.id,
            email: user.email.filter(|e| !e.is_empty()),
        }
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: UserResponse,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default, alias = "error_description", alias = "msg")]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// REST client for a Supabase-compatible auth service
pub struct SupabaseAuth {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
}

impl SupabaseAuth {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Map a non-success response to `AuthError::Rejected`
    async fn rejected(resp: reqwest::Response) -> AuthError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message.or(e.error))
            .unwrap_or(body);
        AuthError::Rejected { status, message }
    }
}

#[async_trait(?Send)]
impl AuthProvider for SupabaseAuth {
    async fn current_user(&self, access_token: &str) -> Result<Identity, AuthError> {
        let resp = self
            .client
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::rejected(resp).await);
        }
        let user: UserResponse = resp.json().await?;
        debug!("Resolved current user {}", user.id);
        Ok(user.into())
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(StoredSession, Identity), AuthError> {
        let resp = self
            .client
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::rejected(resp).await);
        }
        let token: TokenResponse = resp.json().await?;
        let session = StoredSession {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
        };
        Ok((session, token.user.into()))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let resp = self
            .client
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::rejected(resp).await);
        }
        Ok(())
    }

    fn authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> Result<String, AuthError> {
        let params = [("provider", provider.id()), ("redirect_to", redirect_to)];
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| AuthError::Url(format!("failed to encode params: {e}")))?;
        Ok(format!("{}?{}", self.endpoint("authorize"), query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_with_token() {
        let session = StoredSession::from_redirect_fragment(
            "#access_token=abc.def&expires_in=3600&refresh_token=r1&token_type=bearer",
        )
        .unwrap()
        .unwrap();
        assert_eq!(session.access_token, "abc.def");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
    }

    #[test]
    fn test_unrelated_fragment_is_ignored() {
        assert_eq!(StoredSession::from_redirect_fragment("#section-2").unwrap(), None);
        assert_eq!(StoredSession::from_redirect_fragment("").unwrap(), None);
    }

    #[test]
    fn test_error_fragment() {
        let err = StoredSession::from_redirect_fragment(
            "error=access_denied&error_description=User+cancelled",
        )
        .unwrap_err();
        assert!(matches!(err, AuthError::Redirect(ref d) if d == "User cancelled"));
    }

    #[test]
    fn test_authorize_url() {
        let auth = SupabaseAuth::new("https://auth.example.com/", "anon");
        let url = auth
            .authorize_url(OAuthProvider::Google, "https://app.example.com/")
            .unwrap();
        assert_eq!(
            url,
            "https://auth.example.com/auth/v1/authorize?provider=google&redirect_to=https%3A%2F%2Fapp.example.com%2F"
        );
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load(), None);
        let session = StoredSession {
            access_token: "t".into(),
            refresh_token: None,
        };
        store.save(&session);
        assert_eq!(store.load(), Some(session));
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_user_without_email() {
        let user: UserResponse = serde_json::from_str(r#"{"id":"u1","email":""}"#).unwrap();
        let identity: Identity = user.into();
        assert_eq!(identity.email, None);
    }
}
