// ── Runtime connection configuration ──
//
// These types describe *how* to reach the inventory service. They carry
// connection tuning only and never touch disk -- fleetboard-config
// constructs an `InventoryConfig` and hands it in.

use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict). Default.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed deployments).
    DangerAcceptInvalid,
}

/// Configuration for connecting to one inventory service.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Service base URL (e.g., `http://inventory.example.com:8080`).
    pub url: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: std::time::Duration,
}
