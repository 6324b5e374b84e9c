//! Build-variable expansion for template references.
//!
//! References may embed `$NAME` or `${NAME}` placeholders that are
//! substituted from the current build's variables. Expansion is a single
//! pass: substituted text is never re-scanned, so a value that itself
//! contains `$` cannot trigger further expansion. Unbound names are left as
//! literal text, and `$$` escapes a literal dollar sign.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

use stencil_core::JobReference;

// Matches `$$`, `${NAME}`, or `$NAME` where NAME is an identifier.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))").unwrap()
});

/// Variable bindings captured from one build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariableBindings {
    values: HashMap<String, String>,
}

impl VariableBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Expand every placeholder in `input` in a single pass.
    ///
    /// Unbound names are preserved as written rather than erased.
    pub fn expand(&self, input: &str) -> String {
        PLACEHOLDER_REGEX
            .replace_all(input, |caps: &Captures| {
                if caps.get(1).is_some() {
                    return "$".to_string();
                }
                let name = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                match self.values.get(name) {
                    Some(value) => value.clone(),
                    None => caps[0].to_string(),
                }
            })
            .to_string()
    }

    /// Expand a template reference against these bindings.
    pub fn expand_reference(&self, reference: &JobReference) -> JobReference {
        JobReference::new(self.expand(reference.as_str()))
    }
}

impl FromIterator<(String, String)> for VariableBindings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Whether the text still contains an unexpanded placeholder.
///
/// The `$$` escape does not count as a placeholder.
pub fn has_placeholders(input: &str) -> bool {
    PLACEHOLDER_REGEX
        .captures_iter(input)
        .any(|caps| caps.get(2).is_some() || caps.get(3).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_bare_placeholder() {
        let bindings = VariableBindings::new().with("BRANCH", "main");
        assert_eq!(bindings.expand("app-$BRANCH"), "app-main");
    }

    #[test]
    fn expands_braced_placeholder() {
        let bindings = VariableBindings::new().with("BRANCH", "main");
        assert_eq!(bindings.expand("app-${BRANCH}-build"), "app-main-build");
    }

    #[test]
    fn unbound_placeholder_is_preserved() {
        let bindings = VariableBindings::new();
        assert_eq!(bindings.expand("app-$BRANCH"), "app-$BRANCH");
        assert_eq!(bindings.expand("app-${BRANCH}"), "app-${BRANCH}");
    }

    #[test]
    fn substituted_value_is_not_rescanned() {
        let bindings = VariableBindings::new()
            .with("A", "$B")
            .with("B", "expanded");
        assert_eq!(bindings.expand("$A"), "$B");
    }

    #[test]
    fn double_dollar_escapes() {
        let bindings = VariableBindings::new().with("BRANCH", "main");
        assert_eq!(bindings.expand("cost-$$-$BRANCH"), "cost-$-main");
        assert_eq!(bindings.expand("$$BRANCH"), "$BRANCH");
    }

    #[test]
    fn dollar_before_non_identifier_is_literal() {
        let bindings = VariableBindings::new().with("X", "v");
        assert_eq!(bindings.expand("price-$1X"), "price-$1X");
        assert_eq!(bindings.expand("trailing-$"), "trailing-$");
    }

    #[test]
    fn expands_reference() {
        let bindings = VariableBindings::new().with("ENV", "prod");
        let reference = JobReference::new("deploy-$ENV");
        assert_eq!(bindings.expand_reference(&reference).as_str(), "deploy-prod");
    }

    #[test]
    fn detects_placeholders() {
        assert!(has_placeholders("app-$BRANCH"));
        assert!(has_placeholders("app-${BRANCH}"));
        assert!(!has_placeholders("app-main"));
        assert!(!has_placeholders("cost-$$"));
    }

    #[test]
    fn collects_from_iterator() {
        let bindings: VariableBindings =
            vec![("A".to_string(), "1".to_string())].into_iter().collect();
        assert_eq!(bindings.get("A"), Some("1"));
        assert_eq!(bindings.len(), 1);
    }
}
