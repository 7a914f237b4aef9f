//! @acp:module "Page Structure Rule"
//! @acp:summary "Per-page section outline from the theme"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Every branch ends with the same contact page, appended after the table
//! lookup so no branch can omit it.

use serde::Serialize;

use super::rules::{first_match, Facts, Rule};

/// @acp:summary "One page and its ordered sections"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSpec {
    pub name: String,
    pub sections: Vec<SectionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSpec {
    pub title: String,
    pub description: String,
}

fn page(name: &str, sections: &[(&str, &str)]) -> PageSpec {
    PageSpec {
        name: name.to_string(),
        sections: sections
            .iter()
            .map(|(title, description)| SectionSpec {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

/// `喫茶` is a cafe trigger for the identity rule only; here it stays generic.
pub const PAGE_RULES: &[Rule<Vec<PageSpec>>] = &[
    Rule {
        name: "storybook",
        matches: |f| f.theme.contains("絵本"),
        produce: |_| storybook_pages(),
    },
    Rule {
        name: "cafe",
        matches: |f| f.theme.contains("カフェ"),
        produce: |_| cafe_pages(),
    },
];

/// @acp:summary "Classify the theme into an ordered page outline"
pub fn page_structure(facts: &Facts) -> Vec<PageSpec> {
    let mut pages = first_match("pages", PAGE_RULES, facts, |_| generic_pages());
    pages.push(contact_page());
    pages
}

fn storybook_pages() -> Vec<PageSpec> {
    vec![
        page(
            "トップページ",
            &[
                ("ヒーローセクション", "メインビジュアル（森の中の絵本を読む親子のイラスト）、サイトタイトル・キャッチコピー、「えほんをさがす」ボタン"),
                ("おすすめえほん", "3-4冊のピックアップ表示"),
                ("あたらしいえほん", "最新追加された絵本"),
                ("みんなのこえ", "読者レビューのハイライト"),
            ],
        ),
        page(
            "えほんしょうかい（絵本一覧・詳細）",
            &[
                ("絵本カード表示", "表紙画像、タイトル、対象年齢、簡単なあらすじ、「くわしくみる」ボタン"),
                ("絞り込み機能", "年齢別、ジャンル別、テーマ別"),
                ("絵本詳細ページ", "大きな表紙画像、あらすじ（100-150文字）、対象年齢・読み聞かせ時間、作者・出版社情報"),
            ],
        ),
        page(
            "つくったひと（制作者紹介）",
            &[
                ("プロフィール", "温かみのある手書き風フレーム、自己紹介文"),
                ("制作への想い", "絵本に込めた願い"),
                ("制作過程", "イラスト制作風景の写真"),
            ],
        ),
    ]
}

fn cafe_pages() -> Vec<PageSpec> {
    vec![
        page(
            "トップページ",
            &[
                ("ヒーローセクション", "店内の温かい雰囲気の写真、店名・キャッチコピー"),
                ("おすすめメニュー", "人気商品の紹介"),
                ("店舗情報", "営業時間・アクセス・雰囲気"),
            ],
        ),
        page(
            "メニュー",
            &[
                ("ドリンクメニュー", "コーヒー、紅茶、その他ドリンク"),
                ("フードメニュー", "ケーキ、軽食、季節限定メニュー"),
            ],
        ),
    ]
}

fn generic_pages() -> Vec<PageSpec> {
    vec![
        page(
            "トップページ",
            &[
                ("ヒーローセクション", "メインビジュアル、サイトタイトル・キャッチコピー、メインCTA"),
                ("サービス紹介", "主要なサービス・商品の概要"),
                ("お客様の声", "利用者の感想・レビュー"),
            ],
        ),
        page(
            "サービス詳細",
            &[
                ("サービス一覧", "提供するサービスの詳細説明"),
                ("料金体系", "分かりやすい料金表示"),
            ],
        ),
    ]
}

fn contact_page() -> PageSpec {
    page(
        "おといあわせ",
        &[
            ("連絡フォーム", "お名前、メールアドレス、お問い合わせ内容"),
            ("よくあるしつもん", "FAQ形式"),
            ("SNSリンク", "Instagram、Twitter等のソーシャルメディア"),
        ],
    )
}
