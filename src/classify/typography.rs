//! @acp:module "Typography Rule"
//! @acp:summary "Font bundle selection from the target audience"
//! @acp:domain cli
//! @acp:layer logic

use serde::Serialize;

use super::rules::{contains_any, first_match, Facts, Rule};

/// @acp:summary "Font family, sizing and loading strategy"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typography {
    pub main: String,
    pub heading: String,
    pub body: String,
    pub loading: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

pub const TYPOGRAPHY_RULES: &[Rule<Typography>] = &[
    Rule {
        name: "family",
        matches: |f| contains_any(&f.target, &["子ども", "主婦"]),
        produce: |_| Typography {
            main: "'Kosugi Maru', 'Hiragino Kaku Gothic ProN' - 丸みのある優しいフォント".to_string(),
            heading: "大きめサイズ（24px-32px）、ひらがな中心".to_string(),
            body: "16px以上、行間1.8で読みやすく".to_string(),
            loading: "Google Fonts（Kosugi Maru）".to_string(),
            special: Some("小学校低学年レベルまで、難しい漢字にはふりがな".to_string()),
        },
    },
    Rule {
        name: "business",
        matches: |f| contains_any(&f.target, &["ビジネス", "企業"]),
        produce: |_| Typography {
            main: "'Noto Sans JP', 'Hiragino Kaku Gothic ProN' - 信頼感のあるフォント".to_string(),
            heading: "ボールド（600-700）、24px-36px".to_string(),
            body: "16px、行間1.6で読みやすく".to_string(),
            loading: "Google Fonts（Noto Sans JP）".to_string(),
            special: None,
        },
    },
];

/// @acp:summary "Classify the target audience into a typography bundle"
pub fn typography(facts: &Facts) -> Typography {
    first_match("typography", TYPOGRAPHY_RULES, facts, |_| Typography {
        main: "'Hiragino Kaku Gothic ProN', 'Yu Gothic', sans-serif".to_string(),
        heading: "見出し用：20px-28px、ウェイト500-600".to_string(),
        body: "本文用：16px、行間1.7".to_string(),
        loading: "システムフォント優先、Webフォント補完".to_string(),
        special: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::UserRequirements;

    fn for_target(target: &str) -> Typography {
        let req = UserRequirements {
            theme: "テスト".into(),
            target_audience: target.into(),
            ..Default::default()
        };
        typography(&Facts::new(&req))
    }

    #[test]
    fn test_business_typography() {
        let t = for_target("ビジネスパーソン");
        assert!(t.main.starts_with("'Noto Sans JP'"));
        assert_eq!(t.loading, "Google Fonts（Noto Sans JP）");
        assert!(t.special.is_none());
    }

    #[test]
    fn test_family_typography_has_special_note() {
        let t = for_target("子どもと主婦");
        assert_eq!(t.loading, "Google Fonts（Kosugi Maru）");
        assert!(t.special.is_some());
    }

    #[test]
    fn test_family_outranks_business() {
        let t = for_target("企業で働く主婦");
        assert_eq!(t.loading, "Google Fonts（Kosugi Maru）");
    }

    #[test]
    fn test_generic_typography() {
        let t = for_target("");
        assert_eq!(t.loading, "システムフォント優先、Webフォント補完");
        assert!(t.special.is_none());
    }
}
