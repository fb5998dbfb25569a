// ── Environment scope resolution ──
//
// The environment list is fetched per request and passed in explicitly;
// there is no ambient cached list, which keeps this pure and testable.

use crate::error::CoreError;
use crate::model::{EnvScope, Environment};

/// Resolve a requested URL segment against the known environments.
///
/// `*` selects all environments; a known name selects that environment;
/// anything else is [`CoreError::EnvironmentNotFound`] (a 404 at the
/// view layer, never an empty result).
pub fn resolve_scope(known: &[Environment], requested: &str) -> Result<EnvScope, CoreError> {
    if requested == "*" {
        return Ok(EnvScope::All);
    }
    if known.iter().any(|e| e.name == requested) {
        Ok(EnvScope::Named(requested.to_owned()))
    } else {
        Err(CoreError::EnvironmentNotFound {
            name: requested.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<Environment> {
        vec![Environment::new("production"), Environment::new("staging")]
    }

    #[test]
    fn wildcard_is_all() {
        assert_eq!(resolve_scope(&known(), "*").expect("wildcard"), EnvScope::All);
    }

    #[test]
    fn known_name_is_named() {
        assert_eq!(
            resolve_scope(&known(), "staging").expect("known env"),
            EnvScope::Named("staging".into())
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = resolve_scope(&known(), "nonexsistenv").expect_err("unknown env");
        assert!(matches!(
            err,
            CoreError::EnvironmentNotFound { ref name } if name == "nonexsistenv"
        ));
    }

    #[test]
    fn empty_known_list_rejects_everything_but_wildcard() {
        assert!(resolve_scope(&[], "production").is_err());
        assert_eq!(resolve_scope(&[], "*").expect("wildcard"), EnvScope::All);
    }
}
