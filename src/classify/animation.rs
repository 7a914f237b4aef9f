//! @acp:module "Animation Rule"
//! @acp:summary "Animation effects per element from keywords"
//! @acp:domain cli
//! @acp:layer logic

use serde::Serialize;

use super::rules::{contains_any, first_match, Facts, Rule};

/// @acp:summary "An animated element and its effect"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationSpec {
    pub element: String,
    pub description: String,
}

fn specs(pairs: &[(&str, &str)]) -> Vec<AnimationSpec> {
    pairs
        .iter()
        .map(|(element, description)| AnimationSpec {
            element: element.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Nordic keywords have no animation branch and fall through to the default.
pub const ANIMATION_RULES: &[Rule<Vec<AnimationSpec>>] = &[
    Rule {
        name: "fantasy",
        matches: |f| contains_any(&f.keywords, &["ファンタジー", "魔法"]),
        produce: |_| {
            specs(&[
                ("雲", "ゆっくりと左右に揺れる（3-5秒周期）"),
                ("星", "ランダムに瞬く（opacity 0.5-1.0）"),
                ("ページ遷移", "フェードイン・アウト（0.5秒）"),
                ("ボタンホバー", "ふわっと浮き上がる効果"),
                ("スクロール", "パララックス効果で背景要素がゆっくり動く"),
            ])
        },
    },
    Rule {
        name: "business",
        matches: |f| contains_any(&f.keywords, &["ビジネス", "企業"]),
        produce: |_| {
            specs(&[
                ("ページ遷移", "スムーズなスライド（0.3秒）"),
                ("ボタンホバー", "色変化とわずかな拡大（0.2秒）"),
                ("スクロール", "コンテンツのフェードイン表示"),
            ])
        },
    },
];

pub fn animations(facts: &Facts) -> Vec<AnimationSpec> {
    first_match("animation", ANIMATION_RULES, facts, |_| {
        specs(&[
            ("ページ遷移", "ソフトなフェード効果（0.4秒）"),
            ("ボタンホバー", "優しい色変化と軽い浮き上がり"),
            ("スクロール", "コンテンツが下から上にスライドイン"),
        ])
    })
}
