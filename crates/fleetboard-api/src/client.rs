// Inventory service HTTP client
//
// Wraps `reqwest::Client` with service-specific URL construction and
// response decoding. All endpoint groups (environments, nodes, metrics)
// are implemented as inherent methods via separate files to keep this
// module focused on transport mechanics.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the inventory query service.
///
/// Handles base-URL anchoring, the query API's `/v4/` prefix, and the
/// JVM-style `/metrics/v1/mbeans/` prefix. All methods return decoded
/// payloads; HTTP and decoding failures surface as [`Error`].
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl InventoryClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` should be the service root, e.g.
    /// `http://inventory.example.com:8080`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            timeout_secs: transport.timeout.as_secs(),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            timeout_secs: 30,
        }
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a query API path: `{base}/v4/{path}`
    pub(crate) fn query_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/v4/{path}"))?)
    }

    /// Build a full URL for a metric lookup: `{base}/metrics/v1/mbeans/{path}`
    ///
    /// Metric paths carry `:` and `=` (e.g. `inventory.population:name=num-nodes`);
    /// both are valid in a URL path segment and are passed through verbatim.
    pub(crate) fn metric_url(&self, metric_path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/metrics/v1/mbeans/{metric_path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout {
                    timeout_secs: self.timeout_secs,
                }
            } else {
                Error::Transport(e)
            }
        })?;

        self.decode(resp).await
    }

    /// Check the response status and decode the body, returning
    /// `Error::Api` for non-2xx responses and `Error::Deserialization`
    /// (with the raw body) when the payload doesn't match the model.
    async fn decode<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Api {
                message: api_error_message(&body, status),
                status: status.as_u16(),
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Extract a human-readable message from an error body.
///
/// The service reports errors as `{"error": "..."}`; anything else falls
/// back to the HTTP status line.
fn api_error_message(body: &str, status: reqwest::StatusCode) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_owned()
        })
}
