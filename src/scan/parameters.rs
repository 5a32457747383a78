use serde::Serialize;

use crate::model::Target;

/// Caller-facing scan options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Explicit rule subset; the sifted defaults are used when absent.
    pub tests_to_run: Option<Vec<String>>,
    /// A specific node to scan.
    pub dom: Option<Target>,
    pub selector: Option<String>,
    pub include: Option<Vec<Target>>,
    pub exclude: Option<Vec<Target>>,
}

/// What part of the page the engine evaluates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanContext {
    Node(Target),
    Selector(String),
    IncludeExclude {
        #[serde(skip_serializing_if = "Option::is_none")]
        include: Option<Vec<Target>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        exclude: Option<Vec<Target>>,
    },
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOnly {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_only: Option<RunOnly>,
}

impl RunOptions {
    /// Rule ids the engine is restricted to, if any.
    #[must_use]
    pub fn rule_ids(&self) -> Option<&[String]> {
        self.run_only.as_ref().map(|run_only| run_only.values.as_slice())
    }
}

/// Engine run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanParameters {
    pub context: ScanContext,
    pub options: RunOptions,
}

/// Builds engine parameters from [`ScanOptions`].
#[derive(Debug, Clone, Default)]
pub struct ScanParameterGenerator {
    default_rules: Option<Vec<String>>,
}

impl ScanParameterGenerator {
    /// Generator that defaults to the given (sifted) rule ids.
    #[must_use]
    pub const fn new(default_rules: Vec<String>) -> Self {
        Self {
            default_rules: Some(default_rules),
        }
    }

    /// Generator that runs every engine rule unless options say otherwise.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self {
            default_rules: None,
        }
    }

    #[must_use]
    pub fn get_axe_engine_options(&self, options: &ScanOptions) -> RunOptions {
        let values = options
            .tests_to_run
            .clone()
            .or_else(|| self.default_rules.clone());
        RunOptions {
            run_only: values.map(|values| RunOnly {
                kind: "rule",
                values,
            }),
        }
    }

    /// Resolve the scan context. First match wins: node, selector, include/exclude, document.
    #[must_use]
    pub fn get_context(options: &ScanOptions) -> ScanContext {
        if let Some(dom) = &options.dom {
            return ScanContext::Node(dom.clone());
        }
        if let Some(selector) = &options.selector {
            return ScanContext::Selector(selector.clone());
        }
        if options.include.is_some() || options.exclude.is_some() {
            return ScanContext::IncludeExclude {
                include: options.include.clone(),
                exclude: options.exclude.clone(),
            };
        }
        ScanContext::Document
    }

    #[must_use]
    pub fn generate(&self, options: &ScanOptions) -> ScanParameters {
        ScanParameters {
            context: Self::get_context(options),
            options: self.get_axe_engine_options(options),
        }
    }
}

#[cfg(test)]
#[path = "parameters_tests.rs"]
mod tests;
