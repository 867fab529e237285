//! Domain DTOs for the joke API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! `Joke::text` is `joke` on the wire. Items inside a search envelope come
//! without a `status`, so it defaults to 0.

use serde::{Deserialize, Serialize};

/// A single joke returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Joke {
    pub id: String,
    #[serde(rename = "joke")]
    pub text: String,
    #[serde(default)]
    pub status: i64,
}

/// The envelope returned by a term search.
///
/// `total_jokes` is what the API reports; it is not checked against
/// `results.len()`. See `BoundPolicy` for which one bounds the random draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    pub results: Vec<Joke>,
    pub search_term: String,
    pub status: i64,
    pub total_jokes: i64,
}
