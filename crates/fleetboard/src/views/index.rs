// ── Index view ──
//
// Headline figures for one environment or the whole fleet. The wildcard
// scope reads pre-aggregated population metrics by fully qualified path;
// a named scope issues count queries and derives the average locally.

use axum::extract::{Path, State};
use axum::response::Html;
use tracing::debug;

use fleetboard_core::model::metric::{
    population_path, AVG_RESOURCES_PER_NODE, NUM_NODES, NUM_RESOURCES,
};
use fleetboard_core::{aggregate, EnvScope, Metric, QueryBackend};

use crate::assets::AssetLinks;
use crate::error::ViewError;
use crate::state::AppState;
use crate::templates::{Headline, IndexTemplate};
use crate::views::{render_page, request_scope};

/// `GET /` — index for the configured default environment.
pub async fn default<B: QueryBackend>(
    State(state): State<AppState<B>>,
) -> Result<Html<String>, ViewError> {
    let default_env = state.settings.default_environment.clone();
    let scope = request_scope(&state, &default_env).await?;
    render(&state, &scope).await
}

/// `GET /:env/` — index for a named environment, or `*` for all.
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
    debug!(scope = %scope, "rendering index");

    let figures = match scope {
        EnvScope::All => {
            // Pre-aggregated population metrics, keyed by metric path.
            let num_nodes = state.backend.metric(&population_path(NUM_NODES)).await?;
            let num_resources = state
                .backend
                .metric(&population_path(NUM_RESOURCES))
                .await?;
            let avg = state
                .backend
                .metric(&population_path(AVG_RESOURCES_PER_NODE))
                .await?;
            headlines(&num_nodes, &num_resources, &avg)
        }
        EnvScope::Named(_) => {
            let num_nodes = state.backend.node_count(scope).await?;
            let num_resources = state.backend.resource_count(scope).await?;
            let avg = aggregate::average_per_node(num_resources, num_nodes);
            headlines(
                &Metric::from(num_nodes),
                &Metric::from(num_resources),
                &Metric::from(avg),
            )
        }
    };

    let page = IndexTemplate {
        scope_label: scope.to_string(),
        figures,
        assets: AssetLinks::for_mode(state.settings.offline_mode),
    };
    render_page(&page)
}

fn headlines(nodes: &Metric, resources: &Metric, avg: &Metric) -> Vec<Headline> {
    vec![
        Headline {
            label: "Nodes".into(),
            value: nodes.headline(),
        },
        Headline {
            label: "Resources".into(),
            value: resources.headline(),
        },
        Headline {
            label: "Avg. resources per node".into(),
            value: avg.headline(),
        },
    ]
}
