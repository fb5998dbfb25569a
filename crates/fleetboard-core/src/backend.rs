// ── Query backend abstraction ──
//
// The views depend on this capability trait, not on the HTTP client.
// Each query method has a typed result -- there is no untyped
// method-name dispatch. Tests supply a canned double; production uses
// `InventoryBackend` over `fleetboard_api::InventoryClient`.

use std::future::Future;

use fleetboard_api::transport::{TlsMode, TransportConfig};
use fleetboard_api::InventoryClient;

use crate::config::{InventoryConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::{EnvScope, Environment, Metric, Node};

/// Capability interface over the inventory query service.
///
/// Futures are `Send` so generic request handlers stay schedulable on a
/// multi-threaded runtime.
pub trait QueryBackend: Send + Sync {
    /// All environments known to the service.
    fn environments(&self) -> impl Future<Output = Result<Vec<Environment>, CoreError>> + Send;

    /// Nodes within the scope.
    fn nodes(&self, scope: &EnvScope)
    -> impl Future<Output = Result<Vec<Node>, CoreError>> + Send;

    /// Active node count within the scope.
    fn node_count(&self, scope: &EnvScope) -> impl Future<Output = Result<i64, CoreError>> + Send;

    /// Managed resource count within the scope.
    fn resource_count(
        &self,
        scope: &EnvScope,
    ) -> impl Future<Output = Result<i64, CoreError>> + Send;

    /// One metric by fully qualified path.
    fn metric(&self, path: &str) -> impl Future<Output = Result<Metric, CoreError>> + Send;
}

// ── Live implementation ──────────────────────────────────────────────

/// Production `QueryBackend` backed by the HTTP client.
pub struct InventoryBackend {
    client: InventoryClient,
}

impl InventoryBackend {
    /// Build a backend from runtime configuration.
    pub fn connect(config: &InventoryConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            tls: match &config.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: config.timeout,
        };
        tracing::debug!(url = %config.url, "connecting inventory backend");
        let client = InventoryClient::new(config.url.clone(), &transport)?;
        Ok(Self { client })
    }

    /// Wrap an existing client (used by tests with a stub server).
    pub fn from_client(client: InventoryClient) -> Self {
        Self { client }
    }
}

impl QueryBackend for InventoryBackend {
    async fn environments(&self) -> Result<Vec<Environment>, CoreError> {
        let envs = self.client.environments().await?;
        Ok(envs.into_iter().map(Environment::from).collect())
    }

    async fn nodes(&self, scope: &EnvScope) -> Result<Vec<Node>, CoreError> {
        let records = self.client.nodes(scope.filter()).await?;
        Ok(records.into_iter().map(Node::from).collect())
    }

    async fn node_count(&self, scope: &EnvScope) -> Result<i64, CoreError> {
        Ok(self.client.node_count(scope.filter()).await?.count)
    }

    async fn resource_count(&self, scope: &EnvScope) -> Result<i64, CoreError> {
        Ok(self.client.resource_count(scope.filter()).await?.count)
    }

    async fn metric(&self, path: &str) -> Result<Metric, CoreError> {
        Ok(self.client.metric(path).await?.value.into())
    }
}
