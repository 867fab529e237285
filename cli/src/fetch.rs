//! Blocking HTTP execution of requests built by `dadjoke_core`.
//!
//! # Design
//! `Fetcher` is the seam between the command and the network, so the
//! command can be driven by canned responses. `UreqFetcher` reads the whole
//! body for every status; only transport and read failures become errors.

use std::time::Duration;

use dadjoke_core::{ApiError, HttpRequest, HttpResponse};
use tracing::{debug, warn};

pub trait Fetcher {
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Fetcher` backed by a single `ureq::Agent`.
#[derive(Clone)]
pub struct UreqFetcher {
    agent: ureq::Agent,
}

impl UreqFetcher {
    /// `timeout` bounds the whole round-trip; `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self::new(Some(Duration::from_secs(10)))
    }
}

impl Fetcher for UreqFetcher {
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %request.url, "sending request");

        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call().map_err(|e| {
            warn!(url = %request.url, error = %e, "request failed");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_vec().map_err(|e| {
            warn!(url = %request.url, status, error = %e, "could not read response body");
            ApiError::Network(format!("could not read response body: {e}"))
        })?;

        debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_refused_is_a_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let request = HttpRequest {
            url: format!("http://{addr}/"),
            headers: Vec::new(),
        };
        let err = UreqFetcher::new(Some(Duration::from_secs(2)))
            .fetch(&request)
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn malformed_url_is_a_network_error() {
        let request = HttpRequest {
            url: "not a url".to_string(),
            headers: Vec::new(),
        };
        let err = UreqFetcher::default().fetch(&request).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
