//! supper-ui - View components for the supper ideas app
//!
//! Pure, props-based Dioxus components. State lives in the web shell; these
//! only render it and report user intent through event handlers.

pub mod components;
pub mod markdown;

pub use components::*;
pub use markdown::render_markdown;
