//! Sensitive field-name rule sets.

/// Replacement written wherever a sensitive value is removed.
pub const REDACTION_MARKER: &str = "***redacted***";

/// Where a rule set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// URL query parameters.
    Query,
    /// Form fields and JSON object keys.
    Body,
    /// Header names.
    Header,
}

/// Field-name predicate: lowercase name contains any of `patterns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub scope: Scope,
    pub patterns: &'static [&'static str],
}

pub const QUERY_RULES: RuleSet = RuleSet {
    scope: Scope::Query,
    patterns: &["token", "key", "secret"],
};

pub const BODY_RULES: RuleSet = RuleSet {
    scope: Scope::Body,
    patterns: &["password", "secret", "credit_card", "key"],
};

pub const HEADER_RULES: RuleSet = RuleSet {
    scope: Scope::Header,
    patterns: &["authorization", "cookie", "api-key", "token"],
};

impl RuleSet {
    /// True if `name` is sensitive under this rule set.
    pub fn matches(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.patterns.iter().any(|p| lower.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match_not_exact() {
        assert!(QUERY_RULES.matches("apikey_v2"));
        assert!(QUERY_RULES.matches("access_token"));
        assert!(!QUERY_RULES.matches("q"));
    }

    #[test]
    fn case_insensitive() {
        for name in ["Password", "PASSWORD", "user_password"] {
            assert!(BODY_RULES.matches(name), "{name} should match");
        }
        assert!(BODY_RULES.matches("Credit_Card_Number"));
        assert!(!BODY_RULES.matches("username"));
    }

    #[test]
    fn header_rules() {
        assert!(HEADER_RULES.matches("Authorization"));
        assert!(HEADER_RULES.matches("Set-Cookie"));
        assert!(HEADER_RULES.matches("X-Api-Key"));
        assert!(HEADER_RULES.matches("X-CSRF-Token"));
        assert!(!HEADER_RULES.matches("Accept"));
    }

    #[test]
    fn token_is_query_sensitive_but_not_body_sensitive() {
        assert!(QUERY_RULES.matches("token"));
        assert!(!BODY_RULES.matches("token"));
        assert!(BODY_RULES.matches("password"));
        assert!(!QUERY_RULES.matches("password"));
    }
}
