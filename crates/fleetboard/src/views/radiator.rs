// ── Radiator view ──
//
// Large-display summary meant to run unattended on a wall screen. Fully
// standalone: inline styles, no external asset references in any mode.
// The average guards against an empty fleet (0 nodes renders 0).

use axum::extract::{Path, State};
use axum::response::Html;
use tracing::debug;

use fleetboard_core::{aggregate, EnvScope, QueryBackend};

use crate::error::ViewError;
use crate::state::AppState;
use crate::templates::RadiatorTemplate;
use crate::views::{render_page, request_scope};

/// `GET /radiator` — summary for the configured default environment.
pub async fn default<B: QueryBackend>(
    State(state): State<AppState<B>>,
) -> Result<Html<String>, ViewError> {
    let default_env = state.settings.default_environment.clone();
    let scope = request_scope(&state, &default_env).await?;
    render(&state, &scope).await
}

/// `GET /:env/radiator`
pub async fn scoped<B: QueryBackend>(
    State(state): State<AppState<B>>,
    Path(env): Path<String>,
) -> Result<Html<String>, ViewError> {
    let scope = request_scope(&state, &env).await?;
    render(&state, &scope).await
}

async fn render<B: QueryBackend>(
    state: &AppState<B>,
    scope: &EnvScope,
) -> Result<Html<String>, ViewError> {
    debug!(scope = %scope, "rendering radiator");

    let num_nodes = state.backend.node_count(scope).await?;
    let num_resources = state.backend.resource_count(scope).await?;
    let avg = aggregate::average_per_node(num_resources, num_nodes);

    let page = RadiatorTemplate {
        scope_label: scope.to_string(),
        num_nodes,
        num_resources,
        avg_resources: format!("{avg:.1}"),
    };
    render_page(&page)
}
