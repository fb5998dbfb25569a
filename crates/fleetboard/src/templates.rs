// ── Page templates ──
//
// askama structs, one per view. Handlers fill these and render to
// `Html<String>`; the shared shell lives in templates/layout.html.

use askama::Template;

use crate::assets::AssetLinks;

/// One headline figure on the index page.
#[derive(Debug, Clone)]
pub struct Headline {
    pub label: String,
    pub value: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub scope_label: String,
    pub figures: Vec<Headline>,
    pub assets: AssetLinks,
}

/// One status badge above the node table.
#[derive(Debug, Clone)]
pub struct Badge {
    pub status: &'static str,
    pub count: usize,
    pub href: String,
}

/// One row of the node table.
#[derive(Debug, Clone)]
pub struct NodeRow {
    pub name: String,
    pub status: &'static str,
    pub reported: String,
}

#[derive(Template)]
#[template(path = "nodes.html")]
pub struct NodesTemplate {
    pub scope_label: String,
    pub badges: Vec<Badge>,
    pub rows: Vec<NodeRow>,
    pub assets: AssetLinks,
}

/// Standalone large-display summary; inline styles, no asset links.
#[derive(Template)]
#[template(path = "radiator.html")]
pub struct RadiatorTemplate {
    pub scope_label: String,
    pub num_nodes: i64,
    pub num_resources: i64,
    pub avg_resources: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub assets: AssetLinks,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
    pub assets: AssetLinks,
}
