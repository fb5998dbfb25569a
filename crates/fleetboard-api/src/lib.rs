// fleetboard-api: Async Rust client for the inventory query service

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod transport;

pub use client::InventoryClient;
pub use error::Error;
pub use models::{CountRow, EnvironmentRef, MbeanValue, MetricValue, NodeRecord};
