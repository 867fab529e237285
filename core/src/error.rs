//! Error types for the joke API client.
//!
//! # Design
//! A body that fails to decode is reported as `HttpError` when the status was
//! not 2xx, since the server's own error page is then the useful thing to
//! show. A 2xx body that fails to decode is a `DeserializationError`.
//! "No jokes matched" is not an error; see `Selection::NoResults`.

use thiserror::Error;

/// Errors produced while fetching, decoding or selecting a joke.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or its body could not be read.
    /// Constructed by the host that performs the I/O.
    #[error("request failed: {0}")]
    Network(String),

    /// The server returned a non-2xx status and a body that is not a joke.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not JSON of the expected shape.
    #[error("deserialization failed (HTTP {status}): {source}")]
    DeserializationError {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The random bound exceeded the number of decoded jokes.
    #[error("selected index {index} but only {len} jokes were returned")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        let err = ApiError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "selected index 4 but only 2 jokes were returned"
        );

        let err = ApiError::HttpError {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: down");
    }

    #[test]
    fn deserialization_error_keeps_source() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ApiError::DeserializationError {
            status: 200,
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("deserialization failed (HTTP 200)"));
    }
}
