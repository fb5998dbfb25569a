use serde::{Deserialize, Serialize};

/// A named environment partitioning the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: String,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The environment scope of a view.
///
/// The URL segment `*` selects all environments at once; anything else
/// names a single environment (validated against the known list by
/// [`crate::resolve::resolve_scope`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvScope {
    /// All environments (`*`).
    All,
    /// One named environment.
    Named(String),
}

impl EnvScope {
    /// The scope as an upstream query filter: `None` means unscoped.
    pub fn filter(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }

    /// The scope as a URL path segment.
    pub fn segment(&self) -> &str {
        match self {
            Self::All => "*",
            Self::Named(name) => name,
        }
    }
}

impl std::fmt::Display for EnvScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all environments"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}
