// Environment endpoints
//
// Environments partition the whole inventory; the list is small and
// service-scoped (never environment-scoped itself).

use tracing::debug;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::models::EnvironmentRef;

impl InventoryClient {
    /// List all environments known to the service.
    ///
    /// `GET /v4/environments`
    pub async fn environments(&self) -> Result<Vec<EnvironmentRef>, Error> {
        let url = self.query_url("environments")?;
        debug!("listing environments");
        self.get(url).await
    }
}
