//! @acp:module "Brief Boilerplate"
//! @acp:summary "Fixed technical-implementation text shared by every brief"
//! @acp:domain cli
//! @acp:layer data

/// Theme line used when no keywords were given
pub const DEFAULT_THEME_WORDS: &str = "温かみ、親しみやすさ、信頼感";

pub const HTML_STRUCTURE: &[&str] = &[
    "```html",
    "- セマンティックHTML5タグの適切な使用",
    "- <main>, <section>, <article>, <aside>の構造化",
    "- 見出しタグ（h1-h6）の階層的使用",
    "- alt属性の充実（スクリーンリーダー対応）",
    "- lang属性の設定（日本語対応）",
    "```",
];

/// CSS entries before the font-loading line
pub const CSS_DESIGN_HEAD: &[(&str, &str)] = &[
    ("設計手法", "BEM記法またはCSS Modules"),
    ("レスポンシブ", "Mobile First設計"),
    ("ブレークポイント", ""),
];

pub const CSS_BREAKPOINTS: &[&str] = &[
    "  - スマートフォン: ~768px",
    "  - タブレット: 768px-1024px",
    "  - PC: 1024px~",
];

pub const CSS_ANIMATION: (&str, &str) = ("アニメーション", "CSS3 transform, transition使用");

pub const SEO_PERFORMANCE: &[(&str, &str)] = &[
    ("メタタグ", "title, description, OGP設定"),
    ("構造化データ", "JSON-LD形式で適切なschema設定"),
    ("画像最適化", "WebP形式、適切なサイズ設定"),
    ("Core Web Vitals", "LCP, FID, CLS の最適化"),
    ("サイトマップ", "XML sitemap生成"),
];

pub const CONTACT_DESIGN: (&str, &str) = ("デザイン", "目立ちすぎず、でも見つけやすい位置に配置");
pub const CONTACT_FORM: (&str, &str) = ("フォーム", "入力しやすく、送信完了まで分かりやすい導線");

pub const CLOSING_INSTRUCTION: &str = concat!(
    "上記の詳細仕様に基づいて、ターゲットユーザーのニーズを満たす高品質なホームページを作成してください。",
    "ユーザビリティとアクセシビリティを重視し、コンテンツの魅力が十分に伝わるサイトにしてください。",
);
