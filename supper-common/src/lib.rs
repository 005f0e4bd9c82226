//! supper-common - Page state and prompt logic shared by the core and UI crates
//!
//! Everything here is pure: no I/O, no async, no framework types. The core
//! crate drives these transitions through its boundaries and the UI crate
//! renders the resulting state.

mod ideas;
mod preferences;
mod prompt;
mod state;

pub use ideas::{IdeaContract, IdeaResult};
pub use preferences::{parse_cuisines, parse_time_budget, DietaryPreference, PreferenceSet};
pub use prompt::{build_idea_prompt, build_image_prompt};
pub use state::{ClientState, Identity, ImageTicket, IdeaTicket, Page};
