//! Stateless HTTP request builder and response parser for the joke API.
//!
//! # Design
//! `JokeClient` holds only a `base_url` and carries no mutable state between
//! calls. Each API call is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip.
//!
//! Parsing never branches on the HTTP status first: the body is always
//! decoded, and the status only picks which error to report if that fails.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Joke, SearchResult};

/// Public endpoint of the joke API.
pub const DEFAULT_BASE_URL: &str = "https://icanhazdadjoke.com";

/// Identifying string sent with every request, as the API asks clients to.
pub const USER_AGENT: &str = "dadjoke CLI (https://github.com/example/dadjoke)";

/// Synchronous, stateless client for the joke API.
#[derive(Debug, Clone)]
pub struct JokeClient {
    base_url: String,
}

impl Default for JokeClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl JokeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET <base>/`: one random joke.
    pub fn build_random_joke(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/", self.base_url),
            headers: default_headers(),
        }
    }

    /// `GET <base>/search?term=<term>` with the term form-url-encoded.
    pub fn build_search(&self, term: &str) -> HttpRequest {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("term", term)
            .finish();
        HttpRequest {
            url: format!("{}/search?{query}", self.base_url),
            headers: default_headers(),
        }
    }

    pub fn parse_random_joke(&self, response: &HttpResponse) -> Result<Joke, ApiError> {
        decode(response)
    }

    /// Decode a search envelope in two passes: `results` is first held as
    /// untyped JSON, then decoded as a list of jokes.
    pub fn parse_search(&self, response: &HttpResponse) -> Result<SearchResult, ApiError> {
        let envelope: SearchEnvelope = decode(response)?;
        let results: Vec<Joke> = serde_json::from_value(envelope.results)
            .map_err(|source| decode_error(response, source))?;
        Ok(SearchResult {
            results,
            search_term: envelope.search_term,
            status: envelope.status,
            total_jokes: envelope.total_jokes,
        })
    }
}

#[derive(Deserialize)]
struct SearchEnvelope {
    results: serde_json::Value,
    search_term: String,
    status: i64,
    total_jokes: i64,
}

fn default_headers() -> Vec<(String, String)> {
    vec![
        ("Accept".to_string(), "application/json".to_string()),
        ("User-Agent".to_string(), USER_AGENT.to_string()),
    ]
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(|source| decode_error(response, source))
}

fn decode_error(response: &HttpResponse, source: serde_json::Error) -> ApiError {
    if response.is_success() {
        ApiError::DeserializationError {
            status: response.status,
            source,
        }
    } else {
        ApiError::HttpError {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        }
    }
}
