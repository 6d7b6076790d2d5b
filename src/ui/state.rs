//! Search screen state machine.
//!
//! Pure state with no iced types, so transitions can be tested directly.
//!
//! ```text
//! Idle ──begin──▶ Loading ──settle──▶ Found | NotFound | Failed
//!                    ▲                          │
//!                    └──────────begin───────────┘
//! ```
//!
//! Searches are never cancelled. When they overlap, [`ResponsePolicy`]
//! decides which result is shown.

use serde::{Deserialize, Serialize};

use crate::artwork::ImageResult;

/// How results of overlapping searches are applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsePolicy {
    /// Only the most recently issued search may change the screen.
    /// Older results arriving late are dropped.
    #[default]
    LatestRequest,
    /// Every result is applied as it arrives; the last to settle wins.
    LastSettled,
}

/// Identifies one issued search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// Sequence number, starting at 1
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// What the screen currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    /// A search is in flight. `previous` keeps the last found image on screen.
    Loading { previous: Option<String> },
    Found { url: String },
    NotFound,
    Failed { message: String },
}

/// Whether a settled result changed the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Stale,
}

/// State of the search screen
#[derive(Debug, Clone, Default)]
pub struct SearchScreen {
    query: String,
    phase: SearchPhase,
    policy: ResponsePolicy,
    last_issued: u64,
    in_flight: usize,
}

impl SearchScreen {
    pub fn new(policy: ResponsePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Number of searches issued but not yet settled
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Store the text field contents. Never starts a search.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search for the current query.
    ///
    /// Returns `None` (and leaves the phase alone) when the query is blank.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.query.trim().is_empty() {
            return None;
        }

        self.last_issued += 1;
        self.in_flight += 1;
        let previous = self.image_url().map(str::to_string);
        self.phase = SearchPhase::Loading { previous };

        Some(SearchTicket(self.last_issued))
    }

    /// Record the outcome of a search.
    ///
    /// Must be called exactly once per ticket.
    pub fn settle(&mut self, ticket: SearchTicket, result: ImageResult) -> Settlement {
        self.in_flight = self.in_flight.saturating_sub(1);

        if self.policy == ResponsePolicy::LatestRequest && ticket.0 != self.last_issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.last_issued,
                "Dropping stale search result"
            );
            return Settlement::Stale;
        }

        self.phase = match result {
            ImageResult::Found { url } => SearchPhase::Found { url },
            ImageResult::NotFound => SearchPhase::NotFound,
            ImageResult::Error { message } => SearchPhase::Failed { message },
        };
        Settlement::Applied
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading { .. })
    }

    /// Image to display: the found URL, or the previous one while loading
    pub fn image_url(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Found { url } => Some(url),
            SearchPhase::Loading { previous } => previous.as_deref(),
            _ => None,
        }
    }

    /// One-line status for the screen
    pub fn status_line(&self) -> Option<String> {
        match &self.phase {
            SearchPhase::Idle | SearchPhase::Found { .. } => None,
            SearchPhase::Loading { .. } => Some("Searching...".to_string()),
            SearchPhase::NotFound => Some("No artwork found".to_string()),
            SearchPhase::Failed { message } => Some(format!("Search failed: {}", message)),
        }
    }
}
