use super::{GuidanceLink, GuidanceTag, WCAG_2_1, WCAG_2_2, WCAG_2_2_DEPRECATION};

const WCAG21: &str = "https://www.w3.org/WAI/WCAG21/Understanding/";
const WCAG22: &str = "https://www.w3.org/WAI/WCAG22/Understanding/";

/// Static definition of a guidance link.
#[derive(Debug, Clone, Copy)]
pub struct LinkDef {
    pub text: &'static str,
    pub base: &'static str,
    pub page: &'static str,
    pub tags: &'static [GuidanceTag],
}

impl LinkDef {
    #[must_use]
    pub fn to_link(self) -> GuidanceLink {
        GuidanceLink {
            text: self.text.to_string(),
            href: format!("{}{}", self.base, self.page),
            tags: self.tags.to_vec(),
        }
    }
}

pub const BEST_PRACTICE: LinkDef = LinkDef {
    text: "Best Practice",
    base: "",
    page: "",
    tags: &[],
};

const fn wcag(text: &'static str, page: &'static str) -> LinkDef {
    LinkDef {
        text,
        base: WCAG21,
        page,
        tags: &[],
    }
}

const fn wcag21(text: &'static str, page: &'static str) -> LinkDef {
    LinkDef {
        text,
        base: WCAG21,
        page,
        tags: &[WCAG_2_1],
    }
}

const fn wcag22(text: &'static str, page: &'static str) -> LinkDef {
    LinkDef {
        text,
        base: WCAG22,
        page,
        tags: &[WCAG_2_2],
    }
}

/// Engine tag to link definition. AAA criteria are intentionally absent.
const TABLE: &[(&str, LinkDef)] = &[
    ("wcag111", wcag("WCAG 1.1.1", "non-text-content.html")),
    ("wcag121", wcag("WCAG 1.2.1", "audio-only-and-video-only-prerecorded")),
    ("wcag122", wcag("WCAG 1.2.2", "captions-prerecorded.html")),
    ("wcag123", wcag("WCAG 1.2.3", "audio-description-or-media-alternative-prerecorded")),
    ("wcag124", wcag("WCAG 1.2.4", "captions-live.html")),
    ("wcag125", wcag("WCAG 1.2.5", "audio-description-prerecorded")),
    ("wcag131", wcag("WCAG 1.3.1", "info-and-relationships")),
    ("wcag132", wcag("WCAG 1.3.2", "meaningful-sequence.html")),
    ("wcag133", wcag("WCAG 1.3.3", "sensory-characteristics.html")),
    ("wcag134", wcag21("WCAG 1.3.4", "orientation.html")),
    ("wcag135", wcag21("WCAG 1.3.5", "identify-input-purpose.html")),
    ("wcag141", wcag("WCAG 1.4.1", "use-of-color.html")),
    ("wcag142", wcag("WCAG 1.4.2", "audio-control.html")),
    ("wcag143", wcag("WCAG 1.4.3", "contrast-minimum.html")),
    ("wcag144", wcag("WCAG 1.4.4", "resize-text.html")),
    ("wcag145", wcag("WCAG 1.4.5", "images-of-text.html")),
    ("wcag1410", wcag21("WCAG 1.4.10", "reflow.html")),
    ("wcag1411", wcag21("WCAG 1.4.11", "non-text-contrast.html")),
    ("wcag1412", wcag21("WCAG 1.4.12", "text-spacing.html")),
    ("wcag1413", wcag21("WCAG 1.4.13", "content-on-hover-or-focus.html")),
    ("wcag211", wcag("WCAG 2.1.1", "keyboard.html")),
    ("wcag212", wcag("WCAG 2.1.2", "no-keyboard-trap.html")),
    ("wcag214", wcag21("WCAG 2.1.4", "character-key-shortcuts.html")),
    ("wcag221", wcag("WCAG 2.2.1", "timing-adjustable.html")),
    ("wcag222", wcag("WCAG 2.2.2", "pause-stop-hide")),
    ("wcag231", wcag("WCAG 2.3.1", "three-flashes-or-below-threshold.html")),
    ("wcag241", wcag("WCAG 2.4.1", "bypass-blocks")),
    ("wcag242", wcag("WCAG 2.4.2", "page-titled.html")),
    ("wcag243", wcag("WCAG 2.4.3", "focus-order.html")),
    ("wcag244", wcag("WCAG 2.4.4", "link-purpose-in-context.html")),
    ("wcag245", wcag("WCAG 2.4.5", "multiple-ways.html")),
    ("wcag246", wcag("WCAG 2.4.6", "headings-and-labels")),
    ("wcag247", wcag("WCAG 2.4.7", "focus-visible.html")),
    ("wcag2411", wcag22("WCAG 2.4.11", "focus-appearance-minimum.html")),
    ("wcag251", wcag21("WCAG 2.5.1", "pointer-gestures.html")),
    ("wcag252", wcag21("WCAG 2.5.2", "pointer-cancellation.html")),
    ("wcag253", wcag21("WCAG 2.5.3", "label-in-name")),
    ("wcag254", wcag21("WCAG 2.5.4", "motion-actuation.html")),
    ("wcag255", wcag("WCAG 2.5.5", "target-size.html")),
    ("wcag257", wcag22("WCAG 2.5.7", "dragging-movements.html")),
    ("wcag258", wcag22("WCAG 2.5.8", "target-size-minimum.html")),
    ("wcag311", wcag("WCAG 3.1.1", "language-of-page.html")),
    ("wcag312", wcag("WCAG 3.1.2", "language-of-parts.html")),
    ("wcag321", wcag("WCAG 3.2.1", "on-focus.html")),
    ("wcag322", wcag("WCAG 3.2.2", "on-input.html")),
    ("wcag323", wcag("WCAG 3.2.3", "consistent-navigation")),
    ("wcag324", wcag("WCAG 3.2.4", "consistent-identification")),
    ("wcag326", wcag22("WCAG 3.2.6", "consistent-help.html")),
    ("wcag331", wcag("WCAG 3.3.1", "error-identification.html")),
    ("wcag332", wcag("WCAG 3.3.2", "labels-or-instructions.html")),
    ("wcag333", wcag("WCAG 3.3.3", "error-suggestion.html")),
    ("wcag334", wcag("WCAG 3.3.4", "error-prevention-legal-financial-data.html")),
    ("wcag337", wcag22("WCAG 3.3.7", "redundant-entry.html")),
    ("wcag338", wcag22("WCAG 3.3.8", "accessible-authentication-minimum.html")),
    (
        "wcag411",
        LinkDef {
            text: "WCAG 4.1.1",
            base: WCAG21,
            page: "parsing.html",
            tags: &[WCAG_2_2_DEPRECATION],
        },
    ),
    ("wcag412", wcag("WCAG 4.1.2", "name-role-value.html")),
    ("wcag413", wcag21("WCAG 4.1.3", "status-messages.html")),
];

/// Look up the guidance link for a single engine tag.
#[must_use]
pub fn link_for_tag(tag: &str) -> Option<GuidanceLink> {
    TABLE
        .iter()
        .find(|(key, _)| *key == tag)
        .map(|(_, def)| def.to_link())
}
