//! Page state and its transitions
//!
//! Transitions consume the current state and return the next one, so callers
//! (and tests) never mutate shared cells directly.

use crate::{parse_cuisines, parse_time_budget, DietaryPreference, IdeaResult, PreferenceSet};

/// The signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
}

/// Which view the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    SignIn,
    Main,
}

/// Stamp for an idea request. Only the latest issued ticket may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdeaTicket(u64);

/// Stamp for an image request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTicket(u64);

/// Everything the page shows, for one page session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    pub identity: Option<Identity>,
    pub preferences: PreferenceSet,
    pub ideas: Option<IdeaResult>,
    /// An idea request is outstanding
    pub loading: bool,
    pub selected_meal: Option<String>,
    pub image_url: Option<String>,
    /// In-flight gate for image requests
    pub image_loading: bool,
    /// One-line message for the user, e.g. the share fallback
    pub notice: Option<String>,
    latest_idea: u64,
    latest_image: u64,
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derived from identity presence on every read
    pub fn page(&self) -> Page {
        if self.identity.is_some() {
            Page::Main
        } else {
            Page::SignIn
        }
    }

    /// Apply an identity change. Losing the identity resets the session's
    /// results and invalidates anything still in flight.
    pub fn with_identity(mut self, identity: Option<Identity>) -> Self {
        if identity.is_none() && self.identity.is_some() {
            self.ideas = None;
            self.loading = false;
            self.selected_meal = None;
            self.image_url = None;
            self.image_loading = false;
            self.notice = None;
            self.latest_idea += 1;
            self.latest_image += 1;
        }
        self.identity = identity;
        self
    }

    // -- Preference form --

    pub fn with_diet(mut self, diet: DietaryPreference) -> Self {
        self.preferences.diet = diet;
        self
    }

    pub fn with_cuisines_input(mut self, input: &str) -> Self {
        self.preferences.cuisines = parse_cuisines(input);
        self
    }

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.preferences.include = include.into();
        self
    }

    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.preferences.exclude = exclude.into();
        self
    }

    pub fn with_time_budget_input(mut self, input: &str) -> Self {
        self.preferences.time_budget = parse_time_budget(input);
        self
    }

    // -- Idea requests --

    /// Issue a new idea request. Any earlier request still in flight is
    /// superseded and its completion will be dropped.
    pub fn begin_ideas(mut self) -> (Self, IdeaTicket) {
        self.latest_idea += 1;
        self.loading = true;
        let ticket = IdeaTicket(self.latest_idea);
        (self, ticket)
    }

    pub fn is_latest_idea(&self, ticket: IdeaTicket) -> bool {
        ticket.0 == self.latest_idea
    }

    /// Land an idea request. Superseded tickets leave the state untouched;
    /// failures clear loading and keep the previous result.
    pub fn finish_ideas(mut self, ticket: IdeaTicket, outcome: Result<IdeaResult, String>) -> Self {
        if !self.is_latest_idea(ticket) {
            return self;
        }
        self.loading = false;
        if let Ok(result) = outcome {
            self.ideas = Some(result);
            // A pending image still lands for the meal it was asked for
            if !self.image_loading {
                self.selected_meal = None;
                self.image_url = None;
            }
        }
        self
    }

    // -- Image requests --

    /// Select a meal and open the image gate. Returns no ticket when another
    /// image request is already in flight; the selection is then ignored.
    pub fn select_meal(mut self, meal: impl Into<String>) -> (Self, Option<ImageTicket>) {
        if self.image_loading {
            return (self, None);
        }
        self.latest_image += 1;
        self.selected_meal = Some(meal.into());
        self.image_url = None;
        self.image_loading = true;
        let ticket = ImageTicket(self.latest_image);
        (self, Some(ticket))
    }

    pub fn finish_image(mut self, ticket: ImageTicket, outcome: Result<String, String>) -> Self {
        if ticket.0 != self.latest_image {
            return self;
        }
        self.image_loading = false;
        self.image_url = outcome.ok();
        self
    }

    // -- Export / share --

    /// Text of the current result, if there is anything to export or share
    pub fn result_text(&self) -> Option<String> {
        self.ideas
            .as_ref()
            .filter(|r| !r.is_empty())
            .map(IdeaResult::as_text)
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    pub fn dismiss_notice(mut self) -> Self {
        self.notice = None;
        self
    }
}
