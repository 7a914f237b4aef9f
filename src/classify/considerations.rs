//! @acp:module "Considerations Rule"
//! @acp:summary "Accessibility baseline plus audience-specific consideration blocks"
//! @acp:domain cli
//! @acp:layer logic

use serde::Serialize;

use super::rules::{contains_any, Facts};
use super::Item;

/// @acp:summary "A titled block of named considerations"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Consideration {
    pub title: String,
    pub items: Vec<Item>,
}

struct Block {
    title: &'static str,
    items: &'static [(&'static str, &'static str)],
}

impl Block {
    fn build(&self) -> Consideration {
        Consideration {
            title: self.title.to_string(),
            items: self.items.iter().map(|(n, d)| Item::new(n, d)).collect(),
        }
    }
}

const ACCESSIBILITY: Block = Block {
    title: "アクセシビリティ",
    items: &[
        ("カラーコントラスト", "WCAG AA準拠"),
        ("キーボードナビゲーション", "Tab順序の最適化"),
        ("音声読み上げ", "aria-label, aria-describedby設定"),
    ],
};

/// Audience triggers; `主婦` appears in both and fires both blocks.
const AUDIENCE_BLOCKS: &[(&[&str], Block)] = &[
    (
        &["子ども", "主婦"],
        Block {
            title: "子ども・家族向け配慮",
            items: &[
                ("ボタンサイズ", "タップしやすい大きさ（44px以上）"),
                ("誤操作防止", "確認ダイアログの実装"),
                ("文字サイズ", "ユーザーが拡大可能"),
            ],
        },
    ),
    (
        &["主婦", "女性"],
        Block {
            title: "女性ユーザー向け機能",
            items: &[
                ("SNS連携", "Instagram、Pinterest等での共有機能"),
                ("お気に入り機能", "気になる商品・情報の保存"),
                ("レビュー・口コミ", "他のユーザーの意見を参考にできる仕組み"),
            ],
        },
    ),
];

/// @acp:summary "Considerations for the target audience"
pub fn considerations(facts: &Facts) -> Vec<Consideration> {
    let mut blocks = vec![ACCESSIBILITY.build()];
    for (needles, block) in AUDIENCE_BLOCKS {
        if contains_any(&facts.target, needles) {
            tracing::debug!("consideration added: {}", block.title);
            blocks.push(block.build());
        }
    }
    blocks
}
