//! supper-core - Boundaries and orchestration for the supper ideas client
//!
//! Talks to the identity provider, the generation event API, the document
//! exporter and the platform share sheet, and turns their results into
//! `supper_common::ClientState` transitions.

pub mod auth;
pub mod client;
pub mod config;
pub mod export;
pub mod generation;
pub mod session;
pub mod share;

pub use auth::{
    AuthError, AuthProvider, MemorySessionStore, OAuthProvider, SessionStore, StoredSession,
    SupabaseAuth,
};
pub use client::{Boundaries, SupperClient};
pub use config::{ClientConfig, ConfigError};
pub use export::{strip_tags, ExportDocument, ExportError, FileSaver, DOCX_MIME};
pub use generation::{EventApiClient, GenerationBackend, GenerationError};
pub use session::{SessionListeners, SessionSubscription};
pub use share::{ShareError, ShareOutcome, ShareTarget, UNSUPPORTED_NOTICE};
