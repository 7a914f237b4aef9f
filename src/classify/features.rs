//! @acp:module "JS Feature Rule"
//! @acp:summary "Baseline JavaScript features plus content-triggered additions"
//! @acp:domain cli
//! @acp:layer logic

use super::rules::{contains_any, Facts};
use super::Item;

/// Content trigger and the feature it appends. Triggers are independent.
struct FeatureTrigger {
    needles: &'static [&'static str],
    name: &'static str,
    description: &'static str,
}

const BASELINE: &[(&str, &str)] = &[
    ("スムーススクロール", "ナビゲーション連動"),
    ("画像遅延読み込み", "Intersection Observer API"),
    ("フォームバリデーション", "リアルタイム入力チェック"),
];

const TRIGGERS: &[FeatureTrigger] = &[
    FeatureTrigger {
        needles: &["感想"],
        name: "感想投稿",
        description: "LocalStorage活用（デモ用）",
    },
    FeatureTrigger {
        needles: &["検索", "絞り込み"],
        name: "検索・フィルタリング",
        description: "コンテンツの動的表示",
    },
];

/// @acp:summary "JavaScript features for the content description"
pub fn js_features(facts: &Facts) -> Vec<Item> {
    let content = &facts.raw.content;
    let mut features: Vec<Item> = BASELINE.iter().map(|(n, d)| Item::new(n, d)).collect();

    for trigger in TRIGGERS {
        if contains_any(content, trigger.needles) {
            tracing::debug!("js feature added: {}", trigger.name);
            features.push(Item::new(trigger.name, trigger.description));
        }
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::UserRequirements;

    fn names_for(content: &str) -> Vec<String> {
        let req = UserRequirements {
            theme: "テスト".into(),
            content: content.into(),
            ..Default::default()
        };
        js_features(&Facts::new(&req)).into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_baseline_only() {
        assert_eq!(
            names_for(""),
            vec!["スムーススクロール", "画像遅延読み込み", "フォームバリデーション"]
        );
    }

    #[test]
    fn test_both_triggers_fire() {
        let names = names_for("感想と絞り込み");
        assert_eq!(names.len(), 5);
        assert_eq!(names[3], "感想投稿");
        assert_eq!(names[4], "検索・フィルタリング");
    }

    #[test]
    fn test_search_trigger_alone() {
        let names = names_for("商品検索");
        assert_eq!(names.len(), 4);
        assert_eq!(names[3], "検索・フィルタリング");
    }
}
