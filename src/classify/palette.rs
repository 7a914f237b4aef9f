//! @acp:module "Palette Rule"
//! @acp:summary "Color palette selection from keywords and color preference"
//! @acp:domain cli
//! @acp:layer logic

use serde::Serialize;

use super::rules::{contains_any, first_match, Facts, Rule};

const DEFAULT_TEXT: &str = "濃いブラウン (#5D4037) - 目に優しく読みやすい";
const DEFAULT_BACKGROUND: &str = "紙の質感を表現した温かみのあるテクスチャ";

/// @acp:summary "Four-role color palette"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub main: String,
    pub accent: String,
    pub text: String,
    pub background: String,
}

impl ColorPalette {
    /// Palette with the fixed text and background roles
    fn with_pair(main: &str, accent: &str) -> Self {
        Self {
            main: main.to_string(),
            accent: accent.to_string(),
            text: DEFAULT_TEXT.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

/// Keyword triggers are listed before color triggers and therefore win.
pub const PALETTE_RULES: &[Rule<ColorPalette>] = &[
    Rule {
        name: "fantasy",
        matches: |f| contains_any(&f.keywords, &["ファンタジー", "魔法"]),
        produce: |_| {
            ColorPalette::with_pair(
                "パステルピンク (#FFE4E6)、クリーム色 (#FFF8DC)",
                "やわらかい水色 (#E6F3FF)、薄紫 (#F0E6FF)",
            )
        },
    },
    Rule {
        name: "nordic",
        matches: |f| contains_any(&f.keywords, &["北欧", "ナチュラル"]),
        produce: |_| {
            ColorPalette::with_pair(
                "白 (#FFFFFF)、ベージュ (#F5F5DC)",
                "ソフトグリーン (#E8F5E8)、ライトグレー (#F8F8F8)",
            )
        },
    },
    Rule {
        name: "blue",
        matches: |f| contains_any(&f.color, &["青", "ブルー"]),
        produce: |_| {
            ColorPalette::with_pair(
                "ライトブルー (#E3F2FD)、ホワイト (#FFFFFF)",
                "ネイビー (#1565C0)、アクアブルー (#00BCD4)",
            )
        },
    },
    Rule {
        name: "green",
        matches: |f| contains_any(&f.color, &["緑", "グリーン"]),
        produce: |_| {
            ColorPalette::with_pair(
                "ライトグリーン (#E8F5E8)、クリーム (#FFFEF7)",
                "フォレストグリーン (#2E7D32)、イエローグリーン (#8BC34A)",
            )
        },
    },
];

/// @acp:summary "Classify keywords and color preference into a palette"
pub fn color_palette(facts: &Facts) -> ColorPalette {
    first_match("palette", PALETTE_RULES, facts, |_| {
        ColorPalette::with_pair(
            "ソフトベージュ (#FAF0E6)、オフホワイト (#FEFEFE)",
            "ウォームピンク (#FFE4E1)、ライトブラウン (#D2B48C)",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::rules::matched_rule;
    use crate::requirements::UserRequirements;

    fn palette_for(keywords: &str, color: &str) -> (ColorPalette, &'static str) {
        let req = UserRequirements {
            theme: "テスト".into(),
            keywords: keywords.into(),
            color_preference: color.into(),
            ..Default::default()
        };
        let facts = Facts::new(&req);
        (color_palette(&facts), matched_rule(PALETTE_RULES, &facts))
    }

    #[test]
    fn test_default_palette() {
        let (palette, rule) = palette_for("", "");
        assert_eq!(rule, "default");
        assert_eq!(palette.main, "ソフトベージュ (#FAF0E6)、オフホワイト (#FEFEFE)");
        assert_eq!(palette.text, DEFAULT_TEXT);
        assert_eq!(palette.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_keyword_trigger_beats_color_trigger() {
        let (palette, rule) = palette_for("北欧", "青系");
        assert_eq!(rule, "nordic");
        assert_eq!(palette.main, "白 (#FFFFFF)、ベージュ (#F5F5DC)");
    }

    #[test]
    fn test_earliest_keyword_trigger_wins() {
        // Nordic appears first in the text, fantasy first in the table
        let (_, rule) = palette_for("北欧、魔法", "");
        assert_eq!(rule, "fantasy");
    }

    #[test]
    fn test_color_triggers() {
        assert_eq!(palette_for("", "ブルーと白").1, "blue");
        assert_eq!(palette_for("", "深い緑").1, "green");
        assert_eq!(palette_for("", "青と緑").1, "blue");
        // Color field does not see keyword triggers
        assert_eq!(palette_for("", "ファンタジー").1, "default");
    }
}
