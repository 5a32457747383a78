use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between target segments (frame / shadow-root boundaries).
pub const SEGMENT_SEPARATOR: char = ';';

/// Separator between the parts of a shadow-DOM segment.
pub const SHADOW_SEPARATOR: char = ',';

/// One segment of a node target.
///
/// A plain CSS selector, or a list of selectors walking into nested shadow roots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    Css(String),
    Shadow(Vec<String>),
}

impl Selector {
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Css(selector) => selector.clone(),
            Self::Shadow(parts) => parts.join(&SHADOW_SEPARATOR.to_string()),
        }
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self::Css(value.to_string())
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

/// Ordered selector path identifying a node, outermost frame first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Target(pub Vec<Selector>);

impl Target {
    /// Build a target from plain CSS selector segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Selector>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn segments(&self) -> &[Selector] {
        &self.0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joined form: segments separated by `;`, shadow parts by `,`.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(Selector::joined)
            .collect::<Vec<_>>()
            .join(&SEGMENT_SEPARATOR.to_string())
    }

    /// The innermost segment, used as a short display name.
    #[must_use]
    pub fn concise_name(&self) -> String {
        self.0.last().map(Selector::joined).unwrap_or_default()
    }

    /// Plain segment strings, with shadow segments collapsed to their joined form.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(Selector::joined).collect()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Last `;`-separated part of an already-joined selector.
#[must_use]
pub fn selector_last_part(selector: &str) -> &str {
    selector
        .rsplit(SEGMENT_SEPARATOR)
        .next()
        .unwrap_or(selector)
}
