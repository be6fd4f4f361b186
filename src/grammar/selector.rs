//! Injection selector composition

/// Scopes the grammar injects into when nothing else is configured
pub const DEFAULT_TARGET_SCOPES: &[&str] = &["source.yaml"];

/// Selector clause for one host scope
///
/// `L:` gives the injection priority over the host grammar's own rules;
/// comments and strings (other than already-embedded content) are excluded
/// so the grammar never re-injects into its own output.
pub fn injection_clause(scope: &str) -> String {
    format!("L:{} -comment -(string - meta.embedded)", scope)
}

/// Join one clause per target scope with `", "`
pub fn build_injection_selector<S: AsRef<str>>(target_scopes: &[S]) -> String {
    target_scopes
        .iter()
        .map(|scope| injection_clause(scope.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_scope() {
        assert_eq!(
            build_injection_selector(DEFAULT_TARGET_SCOPES),
            "L:source.yaml -comment -(string - meta.embedded)"
        );
    }

    #[test]
    fn test_multiple_scopes_joined() {
        let selector = build_injection_selector(&["source.yaml", "source.github-actions"]);
        assert_eq!(
            selector,
            "L:source.yaml -comment -(string - meta.embedded), \
             L:source.github-actions -comment -(string - meta.embedded)"
        );
    }

    #[test]
    fn test_owned_strings_accepted() {
        let scopes = vec!["source.yaml".to_string()];
        assert_eq!(selector_clause_count(&build_injection_selector(scopes.as_slice())), 1);
    }

    fn selector_clause_count(selector: &str) -> usize {
        selector.split(", ").count()
    }
}
