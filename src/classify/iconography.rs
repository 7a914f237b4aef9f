//! @acp:module "Iconography Rule"
//! @acp:summary "Icon motifs and illustration style from keywords"
//! @acp:domain cli
//! @acp:layer logic

use serde::Serialize;

use super::rules::{contains_any, first_match, Facts, Rule};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Iconography {
    pub motifs: String,
    pub style: String,
}

impl Iconography {
    fn fixed(motifs: &str, style: &str) -> Self {
        Self {
            motifs: motifs.to_string(),
            style: style.to_string(),
        }
    }
}

pub const ICON_RULES: &[Rule<Iconography>] = &[
    Rule {
        name: "fantasy",
        matches: |f| contains_any(&f.keywords, &["ファンタジー", "魔法"]),
        produce: |_| {
            Iconography::fixed(
                "雲、星、森、木、花、虹、うさぎ、ねこ、ことり、ちょうちょ、きらきら、ハート、魔法の杖",
                "手書き風SVGアイコン、線画+パステル塗り",
            )
        },
    },
    Rule {
        name: "nordic",
        matches: |f| contains_any(&f.keywords, &["北欧", "ナチュラル"]),
        produce: |_| {
            Iconography::fixed(
                "木、葉っぱ、花、鳥、家、コーヒーカップ、本",
                "ミニマルなライン画、シンプルで洗練されたデザイン",
            )
        },
    },
    Rule {
        name: "business",
        matches: |f| contains_any(&f.keywords, &["ビジネス", "企業"]),
        produce: |_| {
            Iconography::fixed(
                "チェックマーク、矢印、グラフ、人物シルエット、建物",
                "モダンでクリーンなアイコン、単色またはグラデーション",
            )
        },
    },
];

pub fn iconography(facts: &Facts) -> Iconography {
    first_match("iconography", ICON_RULES, facts, |_| {
        Iconography::fixed(
            "花、葉っぱ、ハート、星、チェックマーク",
            "親しみやすく、分かりやすいデザイン",
        )
    })
}
