// ── Core error types ──
//
// User-facing errors from fleetboard-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<fleetboard_api::Error>` impl translates transport-layer
// errors into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach inventory service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Inventory query timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Environment not found: {name}")]
    EnvironmentNotFound { name: String },

    #[error("Entity not found: {entity_type} {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Upstream errors (wrapped, not exposed raw) ───────────────────
    #[error("Inventory service error: {message}")]
    Upstream {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<fleetboard_api::Error> for CoreError {
    fn from(err: fleetboard_api::Error) -> Self {
        let not_found = err.is_not_found();
        match err {
            fleetboard_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Upstream {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            fleetboard_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            fleetboard_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            fleetboard_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            fleetboard_api::Error::Api { message, status } => {
                if not_found {
                    CoreError::NotFound {
                        entity_type: "resource".into(),
                        identifier: message,
                    }
                } else {
                    CoreError::Upstream {
                        message,
                        status: Some(status),
                    }
                }
            }
            fleetboard_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
