// Metric endpoints
//
// The service exposes JVM-style mbean metrics keyed by a fully qualified
// path such as `inventory.population:name=num-nodes`.

use tracing::debug;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::models::MbeanValue;

impl InventoryClient {
    /// Look up a single metric by its fully qualified path.
    ///
    /// `GET /metrics/v1/mbeans/{path}`
    pub async fn metric(&self, path: &str) -> Result<MbeanValue, Error> {
        let url = self.metric_url(path)?;
        debug!(path, "fetching metric");
        self.get(url).await
    }
}
