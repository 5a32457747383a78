use serde::Serialize;

use super::target::Target;
use crate::guidance::GuidanceLink;

/// Rule metadata, one entry per distinct rule id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnifiedRule {
    pub id: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub guidance: Vec<GuidanceLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceResultStatus {
    Pass,
    Fail,
    Unknown,
}

impl InstanceResultStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedIdentifiers {
    pub identifier: String,
    #[serde(rename = "css-selector")]
    pub css_selector: String,
    pub concise_name: String,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnifiedDescriptors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

/// Human-facing guidance for resolving or manually verifying an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UnifiedResolution {
    #[serde(rename = "how-to-fix-web")]
    HowToFix {
        any: Vec<String>,
        all: Vec<String>,
        none: Vec<String>,
    },
    #[serde(rename = "how-to-check-web")]
    HowToCheck { text: String },
}

/// One (rule, node) pair in report-ready form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedResult {
    pub uid: String,
    pub status: InstanceResultStatus,
    pub rule_id: String,
    pub identifiers: UnifiedIdentifiers,
    pub descriptors: UnifiedDescriptors,
    pub resolution: UnifiedResolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_css_selectors: Option<Vec<String>>,
}
