// ── Shared request state ──
//
// One backend handle plus immutable view settings behind `Arc`. Nothing
// here is mutated across requests; the environment list is fetched per
// request rather than cached globally.

use std::sync::Arc;

use fleetboard_core::QueryBackend;

/// Rendering and scoping settings, fixed at startup.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    /// Environment shown when the URL doesn't name one.
    pub default_environment: String,
    /// Emit only same-origin asset references.
    pub offline_mode: bool,
    /// Hours without a report before a node counts as unreported.
    pub unreported_hours: u64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            default_environment: "production".into(),
            offline_mode: false,
            unreported_hours: 2,
        }
    }
}

impl ViewSettings {
    /// The unreported threshold as a chrono duration.
    #[allow(clippy::cast_possible_wrap)]
    pub fn unreported_after(&self) -> chrono::Duration {
        chrono::Duration::hours(self.unreported_hours as i64)
    }
}

/// Application state, generic over the query backend so tests can
/// inject a canned double.
pub struct AppState<B> {
    pub backend: Arc<B>,
    pub settings: Arc<ViewSettings>,
}

impl<B: QueryBackend> AppState<B> {
    pub fn new(backend: B, settings: ViewSettings) -> Self {
        Self {
            backend: Arc::new(backend),
            settings: Arc::new(settings),
        }
    }
}

// Manual impl: `#[derive(Clone)]` would require `B: Clone`.
impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            settings: Arc::clone(&self.settings),
        }
    }
}
