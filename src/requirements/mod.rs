//! @acp:module "Requirements"
//! @acp:summary "User-supplied website requirements and their loaders"
//! @acp:domain cli
//! @acp:layer model
//!
//! A [`UserRequirements`] is built once per generation request, from CLI flags,
//! a requirements file, the interactive form, or the persisted store. It is
//! never mutated while a document is being generated.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BriefError, Result};

/// Notice shown when the theme is missing
pub const THEME_REQUIRED: &str = "ホームページのテーマを入力してください";

/// @acp:summary "Free-text answers describing the desired website"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRequirements {
    /// Website theme (required)
    pub theme: String,
    #[serde(rename = "target")]
    pub target_audience: String,
    #[serde(rename = "color")]
    pub color_preference: String,
    pub content: String,
    #[serde(rename = "font")]
    pub font_preference: String,
    #[serde(rename = "animation")]
    pub animation_preference: String,
    #[serde(rename = "pages")]
    pub page_structure_hint: String,
    #[serde(rename = "contact")]
    pub contact_placement: String,
    #[serde(rename = "images")]
    pub image_style_hint: String,
    pub keywords: String,
    #[serde(rename = "memo")]
    pub freeform_notes: String,
}

/// Field descriptor: storage key, label used in the remote requirements block
struct FieldSpec {
    key: &'static str,
    label: &'static str,
    get: fn(&UserRequirements) -> &str,
    get_mut: fn(&mut UserRequirements) -> &mut String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "theme", label: "ホームページのテーマ", get: |r| &r.theme, get_mut: |r| &mut r.theme },
    FieldSpec { key: "target", label: "ターゲット層", get: |r| &r.target_audience, get_mut: |r| &mut r.target_audience },
    FieldSpec { key: "color", label: "カラー・雰囲気", get: |r| &r.color_preference, get_mut: |r| &mut r.color_preference },
    FieldSpec { key: "content", label: "掲載したい情報", get: |r| &r.content, get_mut: |r| &mut r.content },
    FieldSpec { key: "font", label: "フォント・スタイル", get: |r| &r.font_preference, get_mut: |r| &mut r.font_preference },
    FieldSpec { key: "animation", label: "アニメーション", get: |r| &r.animation_preference, get_mut: |r| &mut r.animation_preference },
    FieldSpec { key: "pages", label: "ページ構成", get: |r| &r.page_structure_hint, get_mut: |r| &mut r.page_structure_hint },
    FieldSpec { key: "contact", label: "お問い合わせ導線", get: |r| &r.contact_placement, get_mut: |r| &mut r.contact_placement },
    FieldSpec { key: "images", label: "画像・アイコンの雰囲気", get: |r| &r.image_style_hint, get_mut: |r| &mut r.image_style_hint },
    FieldSpec { key: "keywords", label: "世界観・キーワード", get: |r| &r.keywords, get_mut: |r| &mut r.keywords },
    FieldSpec { key: "memo", label: "その他の要望", get: |r| &r.freeform_notes, get_mut: |r| &mut r.freeform_notes },
];

impl UserRequirements {
    /// Create requirements with only a theme set
    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..Default::default()
        }
    }

    /// @acp:summary "Reject requirements whose theme is blank"
    pub fn validate(&self) -> Result<()> {
        if self.theme.trim().is_empty() {
            return Err(BriefError::Validation(THEME_REQUIRED.to_string()));
        }
        Ok(())
    }

    /// Render the non-empty fields as the labelled block sent to the completion API
    pub fn requirements_block(&self) -> String {
        let mut block = String::new();
        for field in FIELDS {
            let value = (field.get)(self);
            if !value.is_empty() {
                block.push_str(&format!("**{}**: {}\n", field.label, value));
            }
        }
        block
    }

    /// Flatten into storage keys; empty fields are kept so a restore is exact
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        FIELDS
            .iter()
            .map(|f| (f.key.to_string(), (f.get)(self).to_string()))
            .collect()
    }

    /// Rebuild from storage keys, skipping unknown keys and empty values
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let mut req = Self::default();
        for field in FIELDS {
            if let Some(value) = fields.get(field.key) {
                if !value.is_empty() {
                    *(field.get_mut)(&mut req) = value.clone();
                }
            }
        }
        req
    }

    /// Overlay the non-empty fields of `self` onto `base`
    pub fn merge_over(self, base: UserRequirements) -> UserRequirements {
        let mut merged = base;
        for field in FIELDS {
            let value = (field.get)(&self);
            if !value.is_empty() {
                *(field.get_mut)(&mut merged) = value.to_string();
            }
        }
        merged
    }

    /// Field value by storage key
    pub fn field(&self, key: &str) -> Option<&str> {
        FIELDS.iter().find(|f| f.key == key).map(|f| (f.get)(self))
    }

    /// Set a field by storage key; returns false for unknown keys
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> bool {
        match FIELDS.iter().find(|f| f.key == key) {
            Some(field) => {
                *(field.get_mut)(self) = value.into();
                true
            }
            None => false,
        }
    }

    /// True when every field is empty
    pub fn is_empty(&self) -> bool {
        FIELDS.iter().all(|f| (f.get)(self).is_empty())
    }

    /// @acp:summary "Load requirements from a JSON or YAML file"
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);

        if is_yaml {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }
}

/// Storage keys in form order
pub fn field_keys() -> impl Iterator<Item = &'static str> {
    FIELDS.iter().map(|f| f.key)
}

/// Remote-block label for a storage key
pub fn field_label(key: &str) -> Option<&'static str> {
    FIELDS.iter().find(|f| f.key == key).map(|f| f.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_theme() {
        let req = UserRequirements::with_theme("   \t");
        let err = req.validate().unwrap_err();
        assert!(matches!(err, BriefError::Validation(ref m) if m == THEME_REQUIRED));
        assert!(UserRequirements::default().validate().is_err());
        assert!(UserRequirements::with_theme("カフェ").validate().is_ok());
    }

    #[test]
    fn test_requirements_block_skips_empty_fields() {
        let req = UserRequirements {
            theme: "絵本のサイト".into(),
            keywords: "ファンタジー".into(),
            freeform_notes: "急ぎ".into(),
            ..Default::default()
        };
        assert_eq!(
            req.requirements_block(),
            "**ホームページのテーマ**: 絵本のサイト\n**世界観・キーワード**: ファンタジー\n**その他の要望**: 急ぎ\n"
        );
    }

    #[test]
    fn test_fields_restore_skips_empty_values() {
        let mut fields = BTreeMap::new();
        fields.insert("theme".to_string(), "カフェ".to_string());
        fields.insert("target".to_string(), String::new());
        fields.insert("unknown".to_string(), "ignored".to_string());

        let req = UserRequirements::from_fields(&fields);
        assert_eq!(req.theme, "カフェ");
        assert!(req.target_audience.is_empty());
    }

    #[test]
    fn test_to_fields_uses_form_keys() {
        let req = UserRequirements {
            theme: "会社サイト".into(),
            target_audience: "ビジネスパーソン".into(),
            ..Default::default()
        };
        let fields = req.to_fields();
        assert_eq!(fields.len(), 11);
        assert_eq!(fields["target"], "ビジネスパーソン");
        assert_eq!(UserRequirements::from_fields(&fields), req);
    }

    #[test]
    fn test_merge_over_prefers_non_empty() {
        let base = UserRequirements {
            theme: "カフェ".into(),
            keywords: "北欧".into(),
            ..Default::default()
        };
        let overrides = UserRequirements {
            keywords: "ファンタジー".into(),
            ..Default::default()
        };
        let merged = overrides.merge_over(base);
        assert_eq!(merged.theme, "カフェ");
        assert_eq!(merged.keywords, "ファンタジー");
    }

    #[test]
    fn test_deserialize_form_keys() {
        let req: UserRequirements =
            serde_json::from_str(r#"{"theme":"教室","target":"主婦","memo":"なし"}"#).unwrap();
        assert_eq!(req.target_audience, "主婦");
        assert_eq!(req.freeform_notes, "なし");
        assert!(req.keywords.is_empty());
    }

    #[test]
    fn test_field_accessors() {
        let mut req = UserRequirements::default();
        assert!(req.set_field("contact", "フッター"));
        assert!(!req.set_field("phone", "000"));
        assert_eq!(req.contact_placement, "フッター");
        assert_eq!(req.field("contact"), Some("フッター"));
        assert_eq!(req.field("phone"), None);
    }

    #[test]
    fn test_field_label_lookup() {
        assert_eq!(field_label("images"), Some("画像・アイコンの雰囲気"));
        assert_eq!(field_label("nope"), None);
        assert_eq!(field_keys().next(), Some("theme"));
    }
}
