//! @acp:module "Classifier"
//! @acp:summary "Keyword classification of requirements into design facets"
//! @acp:domain cli
//! @acp:layer feature
//!
//! Each facet is classified independently by its own rule table. Tables are
//! evaluated in order and the first matching rule wins, so an earlier trigger
//! always shadows a later one within the same facet. Facets that share trigger
//! words (e.g. `ビジネス`) do so through separate tables.

pub mod animation;
pub mod considerations;
pub mod features;
pub mod iconography;
pub mod identity;
pub mod pages;
pub mod palette;
pub mod rules;
pub mod typography;

use serde::Serialize;

use crate::requirements::UserRequirements;

pub use animation::{animations, AnimationSpec};
pub use considerations::{considerations, Consideration};
pub use features::js_features;
pub use iconography::{iconography, Iconography};
pub use identity::{site_identity, SiteIdentity};
pub use pages::{page_structure, PageSpec, SectionSpec};
pub use palette::{color_palette, ColorPalette};
pub use rules::{contains_any, first_match, Facts, Rule};
pub use typography::{typography, Typography};

/// Named entry with a short description (JS features, consideration items)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// @acp:summary "Every facet classified for one request"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub identity: SiteIdentity,
    pub palette: ColorPalette,
    pub typography: Typography,
    pub iconography: Iconography,
    pub animations: Vec<AnimationSpec>,
    pub pages: Vec<PageSpec>,
    pub js_features: Vec<Item>,
    pub considerations: Vec<Consideration>,
}

/// @acp:summary "Run all facet rules in document order"
pub fn classify(requirements: &UserRequirements) -> Classification {
    let facts = Facts::new(requirements);
    Classification {
        identity: site_identity(&facts),
        palette: color_palette(&facts),
        typography: typography(&facts),
        iconography: iconography(&facts),
        animations: animations(&facts),
        pages: page_structure(&facts),
        js_features: js_features(&facts),
        considerations: considerations(&facts),
    }
}

/// Rule branch chosen for each table-driven facet, for `--explain` output
pub fn explain(requirements: &UserRequirements) -> Vec<(&'static str, &'static str)> {
    let facts = Facts::new(requirements);
    vec![
        ("identity", rules::matched_rule(identity::IDENTITY_RULES, &facts)),
        ("palette", rules::matched_rule(palette::PALETTE_RULES, &facts)),
        ("typography", rules::matched_rule(typography::TYPOGRAPHY_RULES, &facts)),
        ("iconography", rules::matched_rule(iconography::ICON_RULES, &facts)),
        ("animation", rules::matched_rule(animation::ANIMATION_RULES, &facts)),
        ("pages", rules::matched_rule(pages::PAGE_RULES, &facts)),
    ]
}
