// Resource endpoints
//
// Only the aggregate count is consumed by the dashboard; individual
// resource listing is out of scope.

use tracing::debug;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::models::CountRow;

impl InventoryClient {
    /// Count managed resources, optionally scoped to one environment.
    ///
    /// `GET /v4/resource-count[?environment={env}]`
    pub async fn resource_count(&self, environment: Option<&str>) -> Result<CountRow, Error> {
        let mut url = self.query_url("resource-count")?;
        if let Some(env) = environment {
            url.query_pairs_mut().append_pair("environment", env);
        }
        debug!(environment, "counting resources");
        self.get(url).await
    }
}
