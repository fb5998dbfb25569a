// Node endpoints
//
// Node listing comes in a service-wide and an environment-scoped form;
// the node counter takes the environment as a query parameter instead.

use tracing::debug;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::models::{CountRow, NodeRecord};

impl InventoryClient {
    /// List nodes, optionally scoped to one environment.
    ///
    /// `GET /v4/nodes` or `GET /v4/environments/{env}/nodes`
    pub async fn nodes(&self, environment: Option<&str>) -> Result<Vec<NodeRecord>, Error> {
        let url = match environment {
            Some(env) => self.query_url(&format!("environments/{env}/nodes"))?,
            None => self.query_url("nodes")?,
        };
        debug!(environment, "listing nodes");
        self.get(url).await
    }

    /// Count active nodes, optionally scoped to one environment.
    ///
    /// `GET /v4/node-count[?environment={env}]`
    pub async fn node_count(&self, environment: Option<&str>) -> Result<CountRow, Error> {
        let mut url = self.query_url("node-count")?;
        if let Some(env) = environment {
            url.query_pairs_mut().append_pair("environment", env);
        }
        debug!(environment, "counting nodes");
        self.get(url).await
    }
}
