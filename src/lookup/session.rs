//! Search session: debounce and staleness guard
//!
//! Keystroke-driven lookups are debounced, and each issued lookup carries a
//! token; only the latest token's results are accepted, so a slow response
//! for an old query can never overwrite newer results. Time is passed in,
//! keeping the logic deterministic under test.

use std::time::{Duration, Instant};

use super::FoodCandidate;

/// Minimum query length before a lookup may fire
pub const MIN_QUERY_LEN: usize = 2;
/// Input must pause this long before a lookup fires
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Identifies one issued lookup within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToken(u64);

/// State of the live search box
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    last_input: Option<Instant>,
    issued: u64,
    /// Token of the lookup whose results are currently accepted
    live: Option<u64>,
    results: Vec<FoodCandidate>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[FoodCandidate] {
        &self.results
    }

    /// Record a keystroke. Short queries clear the results immediately and
    /// will never fire a lookup.
    pub fn input(&mut self, query: &str, now: Instant) {
        self.query = query.to_string();
        self.last_input = Some(now);
        if self.query.chars().count() < MIN_QUERY_LEN {
            self.results.clear();
            self.live = None;
        }
    }

    /// Whether the debounce window has elapsed and a lookup should fire
    pub fn ready(&self, now: Instant) -> bool {
        if self.query.chars().count() < MIN_QUERY_LEN {
            return false;
        }
        match self.last_input {
            Some(last) => now.duration_since(last) >= DEBOUNCE,
            None => false,
        }
    }

    /// Issue a lookup: supersedes any in-flight one
    ///
    /// The returned token must accompany the results when they arrive.
    pub fn begin_lookup(&mut self) -> SearchToken {
        self.issued += 1;
        self.live = Some(self.issued);
        SearchToken(self.issued)
    }

    /// Deliver results for a lookup. Stale tokens are dropped and return
    /// false; the current result set is untouched.
    pub fn accept(&mut self, token: SearchToken, results: Vec<FoodCandidate>) -> bool {
        if self.live != Some(token.0) {
            tracing::debug!(token = token.0, "dropping stale search results");
            return false;
        }
        self.results = results;
        true
    }

    /// Deliver a failure for a lookup: surfaced as zero results
    ///
    /// Never an error path; the user retries by typing.
    pub fn fail(&mut self, token: SearchToken) {
        if self.live == Some(token.0) {
            self.results.clear();
        }
    }

    /// A candidate was picked: clear the box and drop pending lookups
    pub fn take_selection(&mut self, code: &str) -> Option<FoodCandidate> {
        let index = self.results.iter().position(|c| c.code == code)?;
        let candidate = self.results.swap_remove(index);
        self.query.clear();
        self.results.clear();
        self.live = None;
        candidate.into()
    }
}
