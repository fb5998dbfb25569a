// Endpoint groups, implemented as inherent methods on `InventoryClient`.

pub mod environments;
pub mod metrics;
pub mod nodes;
pub mod resources;
