//! External food lookup
//!
//! OpenFoodFacts search behind a trait, with debounce and stale-response
//! guarding for keystroke-driven queries.

mod client;
mod session;

pub use client::{
    candidate_to_reference, FoodCandidate, FoodLookup, LookupError, OpenFoodFactsClient,
};
pub use session::{SearchSession, SearchToken, DEBOUNCE, MIN_QUERY_LEN};
