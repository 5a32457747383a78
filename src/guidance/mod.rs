//! Mapping from engine tags to accessibility-standard hyperlinks.

mod links;

use serde::Serialize;

pub use links::{BEST_PRACTICE, link_for_tag};

/// Classification attached to a guidance link (e.g. the WCAG version that introduced it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceTag {
    pub id: &'static str,
    pub display_text: &'static str,
}

pub const WCAG_2_1: GuidanceTag = GuidanceTag {
    id: "WCAG_2_1",
    display_text: "WCAG 2.1",
};

pub const WCAG_2_2: GuidanceTag = GuidanceTag {
    id: "WCAG_2_2",
    display_text: "WCAG 2.2",
};

pub const WCAG_2_2_DEPRECATION: GuidanceTag = GuidanceTag {
    id: "WCAG_2_2_DEPRECATION",
    display_text: "WCAG 2.2 deprecation",
};

/// Structured hyperlink to an accessibility-standard section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceLink {
    pub text: String,
    pub href: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<GuidanceTag>,
}

impl GuidanceLink {
    #[must_use]
    pub fn is_best_practice(&self) -> bool {
        self.text == BEST_PRACTICE.text
    }
}

/// Map engine tags to guidance links, keeping input order.
///
/// `None` reads as an empty tag list. Unmapped tags (AAA criteria,
/// engine categories) are dropped.
#[must_use]
pub fn map_axe_tags_to_guidance_links(tags: Option<&[String]>) -> Vec<GuidanceLink> {
    tags.unwrap_or_default()
        .iter()
        .filter_map(|tag| link_for_tag(tag))
        .collect()
}

/// Catalog-side mapping: like [`map_axe_tags_to_guidance_links`] but also
/// recognises `best-practice`.
#[must_use]
pub fn map_catalog_tags_to_guidance_links(tags: &[String]) -> Vec<GuidanceLink> {
    tags.iter()
        .filter_map(|tag| {
            if tag == "best-practice" {
                Some(BEST_PRACTICE.to_link())
            } else {
                link_for_tag(tag)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
