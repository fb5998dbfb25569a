// ── Router construction ──

use axum::routing::get;
use axum::Router;

use fleetboard_core::QueryBackend;

use crate::state::AppState;
use crate::views;

/// Build the application router over any query backend.
///
/// Tests call this with a canned backend; `main` wires in the live
/// `InventoryBackend`. Unmatched routes fall through to the rendered
/// 404 page.
pub fn build_router<B: QueryBackend + 'static>(state: AppState<B>) -> Router {
    Router::new()
        .route("/", get(views::index::default::<B>))
        .route("/nodes", get(views::nodes::default::<B>))
        .route("/radiator", get(views::radiator::default::<B>))
        .route("/:env/", get(views::index::scoped::<B>))
        .route("/:env/nodes", get(views::nodes::scoped::<B>))
        .route("/:env/radiator", get(views::radiator::scoped::<B>))
        .route("/static/css/fleetboard.css", get(views::statics::stylesheet))
        .route("/static/js/fleetboard.js", get(views::statics::script))
        .fallback(views::not_found)
        .with_state(state)
}
