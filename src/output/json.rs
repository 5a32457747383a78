use serde::Serialize;

use crate::error::Result;
use crate::model::{InstanceResultStatus, ResultSummary, ScanResults};
use crate::scan::ScannerRuleInfo;

use super::{OutputFormatter, UnifiedReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct ScanOutput<'a> {
    summary: ResultSummary,
    results: &'a ScanResults,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UnifiedSummary {
    rules: usize,
    results: usize,
    pass: usize,
    fail: usize,
    unknown: usize,
}

#[derive(Serialize)]
struct UnifiedOutput<'a> {
    summary: UnifiedSummary,
    #[serde(flatten)]
    report: &'a UnifiedReport,
}

#[derive(Serialize)]
struct RulesOutput<'a> {
    total: usize,
    rules: &'a [ScannerRuleInfo],
}

fn unified_summary(report: &UnifiedReport) -> UnifiedSummary {
    let count = |status: InstanceResultStatus| {
        report
            .results
            .iter()
            .filter(|result| result.status == status)
            .count()
    };
    UnifiedSummary {
        rules: report.rules.len(),
        results: report.results.len(),
        pass: count(InstanceResultStatus::Pass),
        fail: count(InstanceResultStatus::Fail),
        unknown: count(InstanceResultStatus::Unknown),
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_scan(&self, results: &ScanResults) -> Result<String> {
        let output = ScanOutput {
            summary: results.summary(),
            results,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_unified(&self, report: &UnifiedReport) -> Result<String> {
        let output = UnifiedOutput {
            summary: unified_summary(report),
            report,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_rules(&self, rules: &[ScannerRuleInfo]) -> Result<String> {
        let output = RulesOutput {
            total: rules.len(),
            rules,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
