//! I/O-free client core for the dad joke API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, which keeps request shaping, decoding and the
//! random selection fully deterministic under test.
//!
//! # Design
//! - `JokeClient` holds only `base_url`.
//! - Each API call is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Selection takes the RNG as an argument; nothing here reaches for a
//!   global random source.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod select;
pub mod types;

pub use client::{JokeClient, DEFAULT_BASE_URL, USER_AGENT};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use select::{select, BoundPolicy, Selection, NO_RESULTS_MESSAGE};
pub use types::{Joke, SearchResult};
