use crate::model::CheckResult;
use crate::rules::CheckConfiguration;

/// Rewrite check messages from their configurations.
///
/// For each check the last configuration with a matching id is used. A
/// passing check takes the pass message and anything else takes the fail
/// message, but only when that generator is defined. Checks without a
/// matching configuration are returned unchanged.
#[must_use]
pub fn add_messages_to_checks(
    checks: Vec<CheckResult>,
    configurations: &[CheckConfiguration],
) -> Vec<CheckResult> {
    checks
        .into_iter()
        .map(|check| add_message(check, configurations))
        .collect()
}

fn add_message(mut check: CheckResult, configurations: &[CheckConfiguration]) -> CheckResult {
    let Some(config) = configurations.iter().rev().find(|c| c.id == check.id) else {
        return check;
    };
    if let Some(message) = config.message_for(check.result == Some(true)) {
        check.message = Some(message);
    }
    check
}

#[cfg(test)]
#[path = "check_messages_tests.rs"]
mod tests;
