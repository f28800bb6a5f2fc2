// Torn API HTTP client
//
// Wraps `reqwest::Client` with Torn-specific URL construction, status and
// envelope classification, and failure reporting. The endpoint operations
// live in `endpoints/` as inherent methods to keep this module focused on
// transport mechanics.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, error, trace};
use url::Url;

use crate::auth::ApiKey;
use crate::decode;
use crate::error::Error;
use crate::report::Reporter;
use crate::transport::TransportConfig;

/// HTTP client for the Torn API.
///
/// Every request is a single-shot GET; calls are issued one at a time by
/// the caller and nothing is cached between them.
pub struct TornClient {
    http: reqwest::Client,
    base_url: Url,
    reporter: Arc<dyn Reporter>,
}

impl TornClient {
    /// Create a client from a `TransportConfig`.
    pub fn new(transport: &TransportConfig, reporter: Arc<dyn Reporter>) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: transport.base_url.clone(),
            reporter,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            http,
            base_url,
            reporter,
        }
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The sink failure diagnostics are written to.
    pub fn reporter(&self) -> &Arc<dyn Reporter> {
        &self.reporter
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/{category}/{id}?selections={selection}&key={key}`.
    ///
    /// An absent `id` leaves a trailing slash (`/torn/?selections=...`).
    pub(crate) fn api_url(
        &self,
        category: &str,
        id: Option<u64>,
        selection: &str,
        key: &ApiKey,
    ) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let id = id.map(|id| id.to_string()).unwrap_or_default();
        let mut url = Url::parse(&format!("{base}/{category}/{id}"))?;
        url.query_pairs_mut()
            .append_pair("selections", selection)
            .append_pair("key", key.expose());
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the body.
    ///
    /// A non-2xx status fails before the body is read.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!(path = url.path(), "GET");

        let resp = self.http.get(url).send().await?;
        decode::check_status(resp.status())?;

        let body = resp.text().await?;
        trace!(bytes = body.len(), "response body received");

        decode::decode(&body)
    }

    /// Write the single diagnostic line for a failed operation.
    pub(crate) fn report_failure(&self, operation: &str, err: &Error) {
        if let Error::UnmappedErrorCode { code } = err {
            error!(operation, code, "Torn API returned an error code missing from the table");
        }
        debug!(operation, sentinel = err.sentinel(), "request failed");
        self.reporter
            .failure(&format!("Error while retrieving {operation} - {err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TracingReporter;

    fn client() -> TornClient {
        TornClient::with_client(
            reqwest::Client::new(),
            Url::parse("https://api.torn.com").expect("valid"),
            Arc::new(TracingReporter),
        )
    }

    #[test]
    fn url_without_id_keeps_trailing_slash() {
        let key = ApiKey::new("abcdEFGH12345678").expect("valid key");
        let url = client()
            .api_url("torn", None, "timestamp", &key)
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.torn.com/torn/?selections=timestamp&key=abcdEFGH12345678"
        );
    }

    #[test]
    fn url_with_id_and_empty_selection() {
        let key = ApiKey::new("abcdEFGH12345678").expect("valid key");
        let url = client()
            .api_url("faction", Some(10820), "", &key)
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://api.torn.com/faction/10820?selections=&key=abcdEFGH12345678"
        );
    }
}
