// fleetboard-core: Domain layer between fleetboard-api and the web views.

pub mod aggregate;
pub mod backend;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod resolve;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backend::{InventoryBackend, QueryBackend};
pub use config::{InventoryConfig, TlsVerification};
pub use error::CoreError;
pub use resolve::resolve_scope;

// Re-export model types at the crate root for ergonomics.
pub use model::{EnvScope, Environment, Metric, Node, NodeStatus};
