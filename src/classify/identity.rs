//! @acp:module "Identity Rule"
//! @acp:summary "Site name and tagline proposal from the theme"
//! @acp:domain cli
//! @acp:layer logic

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::rules::{contains_any, first_match, Facts, Rule};

/// Keyword used when none is supplied
pub const DEFAULT_KEYWORD: &str = "やさしさ";

/// Keyword list separators (ideographic, ASCII and fullwidth comma)
static KEYWORD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[、,，]").unwrap());

/// Generic words dropped from the theme when deriving a site name
static SITE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"サイト|ホームページ|HP").unwrap());

/// @acp:summary "Proposed site name and tagline"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteIdentity {
    pub site_name: String,
    pub tagline: String,
}

impl SiteIdentity {
    fn fixed(site_name: &str, tagline: &str) -> Self {
        Self {
            site_name: site_name.to_string(),
            tagline: tagline.to_string(),
        }
    }
}

pub const IDENTITY_RULES: &[Rule<SiteIdentity>] = &[
    Rule {
        name: "storybook",
        matches: |f| f.theme.contains("絵本"),
        produce: |_| SiteIdentity::fixed("ゆめのえほんのもり", "こころあたたまる ゆめいっぱいの えほんたち"),
    },
    Rule {
        name: "cafe",
        matches: |f| contains_any(&f.theme, &["カフェ", "喫茶"]),
        produce: |_| SiteIdentity::fixed("ほっとカフェ", "あなたの心に寄り添う、特別なひととき"),
    },
    Rule {
        name: "beauty",
        matches: |f| contains_any(&f.theme, &["美容", "エステ"]),
        produce: |_| SiteIdentity::fixed("ビューティーガーデン", "あなたらしい美しさを、一緒に見つけましょう"),
    },
    Rule {
        name: "school",
        matches: |f| contains_any(&f.theme, &["教室", "スクール"]),
        produce: |_| SiteIdentity::fixed("まなびのひろば", "新しい自分に出会える場所"),
    },
];

/// @acp:summary "Classify the theme into a site identity"
pub fn site_identity(facts: &Facts) -> SiteIdentity {
    first_match("identity", IDENTITY_RULES, facts, generic_identity)
}

fn generic_identity(facts: &Facts) -> SiteIdentity {
    let keyword = first_keyword(&facts.raw.keywords);
    SiteIdentity {
        site_name: format!("{}の{}", keyword, strip_site_suffix(&facts.raw.theme)),
        tagline: format!("{}あふれる、心地よい時間をお届けします", keyword),
    }
}

/// First entry of a `、` / `,` / `，` separated keyword list
pub fn first_keyword(keywords: &str) -> &str {
    if keywords.is_empty() {
        return DEFAULT_KEYWORD;
    }
    match KEYWORD_SEPARATOR.split(keywords).next().map(str::trim) {
        Some(first) if !first.is_empty() => first,
        _ => DEFAULT_KEYWORD,
    }
}

/// Remove generic words such as "サイト" from the theme
pub fn strip_site_suffix(theme: &str) -> String {
    SITE_SUFFIX.replace_all(theme, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::rules::{matched_rule, rule_names};
    use crate::requirements::UserRequirements;

    fn identity(theme: &str, keywords: &str) -> SiteIdentity {
        let req = UserRequirements {
            theme: theme.into(),
            keywords: keywords.into(),
            ..Default::default()
        };
        site_identity(&Facts::new(&req))
    }

    #[test]
    fn test_storybook_identity() {
        let id = identity("絵本のサイト", "");
        assert_eq!(id.site_name, "ゆめのえほんのもり");
        assert_eq!(id.tagline, "こころあたたまる ゆめいっぱいの えほんたち");
    }

    #[test]
    fn test_identity_priority_order() {
        assert_eq!(rule_names(IDENTITY_RULES), vec!["storybook", "cafe", "beauty", "school"]);
        // Both storybook and cafe triggers present: storybook is listed first
        assert_eq!(identity("カフェで読む絵本", "").site_name, "ゆめのえほんのもり");
        assert_eq!(identity("喫茶店", "").site_name, "ほっとカフェ");
        assert_eq!(identity("エステサロン", "").site_name, "ビューティーガーデン");
        assert_eq!(identity("料理スクール", "").site_name, "まなびのひろば");
    }

    #[test]
    fn test_generic_identity_uses_first_keyword() {
        let id = identity("小さなお店のホームページ", "あたたかさ、手作り");
        assert_eq!(id.site_name, "あたたかさの小さなお店の");
        assert_eq!(id.tagline, "あたたかさあふれる、心地よい時間をお届けします");
    }

    #[test]
    fn test_generic_identity_default_keyword() {
        let id = identity("会社サイト", "");
        assert_eq!(id.site_name, "やさしさの会社");
        assert_eq!(id.tagline, "やさしさあふれる、心地よい時間をお届けします");
    }

    #[test]
    fn test_first_keyword_separators() {
        assert_eq!(first_keyword(" 北欧 ,ナチュラル"), "北欧");
        assert_eq!(first_keyword("魔法，星"), "魔法");
        assert_eq!(first_keyword("、星"), DEFAULT_KEYWORD);
        assert_eq!(first_keyword(""), DEFAULT_KEYWORD);
    }

    #[test]
    fn test_strip_site_suffix_all_occurrences() {
        assert_eq!(strip_site_suffix("HPとサイトとホームページ"), "とと");
        // Only the upper-case form is generic
        assert_eq!(strip_site_suffix("hp"), "hp");
    }

    #[test]
    fn test_matched_rule_name() {
        let req = UserRequirements::with_theme("ヨガ教室");
        assert_eq!(matched_rule(IDENTITY_RULES, &Facts::new(&req)), "school");
    }
}
