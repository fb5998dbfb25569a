// fleetboard: axum web application over the inventory query backend.

pub mod app;
pub mod assets;
pub mod error;
pub mod state;
pub mod templates;
pub mod views;

/// Fixed display name; every rendered page's document title.
pub const APP_NAME: &str = "Fleetboard";

pub use app::build_router;
pub use state::{AppState, ViewSettings};
