//! @acp:module "Composer"
//! @acp:summary "Deterministic fallback assembly of the design brief"
//! @acp:domain cli
//! @acp:layer feature
//!
//! The composer runs every classifier rule in document order and lays the
//! results into a fixed section template. It cannot fail and has no side
//! effects: the same requirements always produce the same document.

pub mod boilerplate;
pub mod document;

pub use document::{DocSection, GeneratedDocument, Line, OutputFormat};

use crate::classify::{classify, Classification};
use crate::requirements::UserRequirements;

use boilerplate::*;

/// @acp:summary "Compose the fallback design brief"
pub fn compose(requirements: &UserRequirements) -> GeneratedDocument {
    let facets = classify(requirements);
    assemble(requirements, &facets)
}

/// Lay classified facets into the section template
pub fn assemble(req: &UserRequirements, facets: &Classification) -> GeneratedDocument {
    let mut sections = Vec::new();

    // Concept
    let theme_words = if req.keywords.is_empty() {
        DEFAULT_THEME_WORDS
    } else {
        req.keywords.as_str()
    };
    sections.push(
        DocSection::new(2, "基本コンセプト・世界観")
            .line(Line::entry("テーマ", theme_words))
            .line(Line::entry("ターゲット", req.target_audience.as_str()))
            .line(Line::entry("サイト名", format!("「{}」（提案）", facets.identity.site_name)))
            .line(Line::entry("キャッチコピー", format!("「{}」", facets.identity.tagline))),
    );

    // Design
    sections.push(DocSection::new(2, "デザイン・UI/UX詳細仕様"));

    let palette = &facets.palette;
    sections.push(
        DocSection::new(3, "カラーパレット")
            .line(Line::entry("メインカラー", palette.main.as_str()))
            .line(Line::entry("アクセントカラー", palette.accent.as_str()))
            .line(Line::entry("テキストカラー", palette.text.as_str()))
            .line(Line::entry("背景", palette.background.as_str())),
    );

    let fonts = &facets.typography;
    let mut typography = DocSection::new(3, "フォント・タイポグラフィ")
        .line(Line::entry("メインフォント", fonts.main.as_str()))
        .line(Line::entry("見出し", fonts.heading.as_str()))
        .line(Line::entry("本文", fonts.body.as_str()));
    if let Some(special) = &fonts.special {
        typography = typography.line(Line::entry("特記事項", special.as_str()));
    }
    sections.push(typography);

    sections.push(
        DocSection::new(3, "アイコン・イラスト要素")
            .line(Line::entry("モチーフ", facets.iconography.motifs.as_str()))
            .line(Line::entry("スタイル", facets.iconography.style.as_str())),
    );

    sections.push(
        DocSection::new(3, "アニメーション仕様").lines(
            facets
                .animations
                .iter()
                .map(|a| Line::entry(a.element.as_str(), a.description.as_str())),
        ),
    );

    // Pages
    sections.push(DocSection::new(2, "ページ構成・コンテンツ詳細"));
    for (index, page) in facets.pages.iter().enumerate() {
        sections.push(
            DocSection::new(3, format!("{}. {}", index + 1, page.name)).lines(
                page.sections
                    .iter()
                    .map(|s| Line::entry(s.title.as_str(), s.description.as_str())),
            ),
        );
    }

    // Technical implementation
    sections.push(DocSection::new(2, "技術実装詳細"));
    sections.push(
        DocSection::new(3, "HTML構造").lines(HTML_STRUCTURE.iter().map(|l| Line::text(*l))),
    );
    sections.push(
        DocSection::new(3, "CSS設計")
            .lines(CSS_DESIGN_HEAD.iter().map(|(k, v)| Line::entry(*k, *v)))
            .lines(CSS_BREAKPOINTS.iter().map(|l| Line::text(*l)))
            .line(Line::entry("フォント読み込み", fonts.loading.as_str()))
            .line(Line::entry(CSS_ANIMATION.0, CSS_ANIMATION.1)),
    );
    sections.push(
        DocSection::new(3, "JavaScript機能").lines(
            facets
                .js_features
                .iter()
                .map(|f| Line::entry(f.name.as_str(), f.description.as_str())),
        ),
    );
    sections.push(
        DocSection::new(3, "SEO・パフォーマンス対策")
            .lines(SEO_PERFORMANCE.iter().map(|(k, v)| Line::entry(*k, *v))),
    );

    // Considerations
    sections.push(DocSection::new(2, "追加提案・考慮事項"));
    for consideration in &facets.considerations {
        sections.push(
            DocSection::new(3, consideration.title.as_str()).lines(
                consideration
                    .items
                    .iter()
                    .map(|i| Line::entry(i.name.as_str(), i.description.as_str())),
            ),
        );
    }

    if !req.contact_placement.is_empty() {
        sections.push(
            DocSection::new(3, "お問い合わせ導線")
                .line(Line::entry("配置", req.contact_placement.as_str()))
                .line(Line::entry(CONTACT_DESIGN.0, CONTACT_DESIGN.1))
                .line(Line::entry(CONTACT_FORM.0, CONTACT_FORM.1)),
        );
    }

    if !req.freeform_notes.is_empty() {
        sections.push(
            DocSection::new(2, "追加要件・メモ").line(Line::text(req.freeform_notes.as_str())),
        );
    }

    GeneratedDocument {
        preamble: format!(
            "{}をターゲットとした{}のホームページを作成してください。",
            req.target_audience, req.theme
        ),
        sections,
        closing_title: "実装指示".to_string(),
        closing: CLOSING_INSTRUCTION.to_string(),
    }
}
