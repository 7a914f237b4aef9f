//! @acp:module "Rule Tables"
//! @acp:summary "Ordered first-match-wins rule tables over normalized input"
//! @acp:domain cli
//! @acp:layer logic

use crate::requirements::UserRequirements;

/// Normalized views over the input fields that the rules match against.
///
/// Lowercasing folds ASCII case and leaves Japanese text untouched, so a
/// trigger like `ビジネス` matches exactly while `HP` and `hp` are treated alike.
#[derive(Debug, Clone)]
pub struct Facts<'a> {
    pub raw: &'a UserRequirements,
    pub theme: String,
    pub target: String,
    pub color: String,
    pub keywords: String,
}

impl<'a> Facts<'a> {
    pub fn new(raw: &'a UserRequirements) -> Self {
        Self {
            raw,
            theme: raw.theme.to_lowercase(),
            target: raw.target_audience.to_lowercase(),
            color: raw.color_preference.to_lowercase(),
            keywords: raw.keywords.to_lowercase(),
        }
    }
}

/// One branch of a classification table
pub struct Rule<T> {
    pub name: &'static str,
    pub matches: fn(&Facts) -> bool,
    pub produce: fn(&Facts) -> T,
}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Evaluate `rules` in order; the first matching rule produces the result.
pub fn first_match<T>(
    facet: &str,
    rules: &[Rule<T>],
    facts: &Facts,
    fallback: fn(&Facts) -> T,
) -> T {
    match rules.iter().find(|rule| (rule.matches)(facts)) {
        Some(rule) => {
            tracing::debug!("{} rule matched: {}", facet, rule.name);
            (rule.produce)(facts)
        }
        None => {
            tracing::debug!("{} rule matched: default", facet);
            fallback(facts)
        }
    }
}

/// Name of the rule that would fire, or `"default"`
pub fn matched_rule<T>(rules: &[Rule<T>], facts: &Facts) -> &'static str {
    rules
        .iter()
        .find(|rule| (rule.matches)(facts))
        .map(|rule| rule.name)
        .unwrap_or("default")
}

/// Rule names in priority order
pub fn rule_names<T>(rules: &[Rule<T>]) -> Vec<&'static str> {
    rules.iter().map(|rule| rule.name).collect()
}

/// Substring containment of any needle
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[Rule<&'static str>] = &[
        Rule {
            name: "first",
            matches: |f| f.keywords.contains('a'),
            produce: |_| "first",
        },
        Rule {
            name: "second",
            matches: |f| f.keywords.contains('b'),
            produce: |_| "second",
        },
    ];

    #[test]
    fn test_first_match_respects_table_order() {
        let req = UserRequirements {
            keywords: "b a".into(),
            ..Default::default()
        };
        let facts = Facts::new(&req);
        assert_eq!(first_match("test", TABLE, &facts, |_| "fallback"), "first");
        assert_eq!(matched_rule(TABLE, &facts), "first");
    }

    #[test]
    fn test_first_match_fallback() {
        let req = UserRequirements::default();
        let facts = Facts::new(&req);
        assert_eq!(first_match("test", TABLE, &facts, |_| "fallback"), "fallback");
        assert_eq!(matched_rule(TABLE, &facts), "default");
    }

    #[test]
    fn test_facts_lowercase_ascii_only() {
        let req = UserRequirements {
            theme: "Cafe HP ホームページ".into(),
            ..Default::default()
        };
        let facts = Facts::new(&req);
        assert_eq!(facts.theme, "cafe hp ホームページ");
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("北欧ナチュラル", &["ナチュラル"]));
        assert!(!contains_any("", &["ナチュラル"]));
        assert!(!contains_any("abc", &[]));
    }
}
