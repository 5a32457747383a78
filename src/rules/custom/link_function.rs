use serde_json::json;

use crate::model::RawNodeResult;
use crate::rules::{
    CheckConfiguration, CheckContext, ElementSnapshot, RuleConfiguration, RuleDefinition,
};

pub const RULE_ID: &str = "link-function";
pub const CHECK_ID: &str = "link-function";
pub const VALID_ROLE_CHECK_ID: &str = "valid-role-if-present";

/// ARIA roles accepted by `valid-role-if-present`.
const ARIA_ROLES: &[&str] = &[
    "alert", "alertdialog", "application", "article", "banner", "button", "cell", "checkbox",
    "columnheader", "combobox", "complementary", "contentinfo", "definition", "dialog",
    "directory", "document", "feed", "figure", "form", "grid", "gridcell", "group", "heading",
    "img", "link", "list", "listbox", "listitem", "log", "main", "marquee", "math", "menu",
    "menubar", "menuitem", "menuitemcheckbox", "menuitemradio", "navigation", "none", "note",
    "option", "presentation", "progressbar", "radio", "radiogroup", "region", "row",
    "rowgroup", "rowheader", "scrollbar", "search", "searchbox", "separator", "slider",
    "spinbutton", "status", "switch", "tab", "table", "tablist", "tabpanel", "term", "textbox",
    "timer", "toolbar", "tooltip", "tree", "treegrid", "treeitem",
];

/// Anchors with no meaningful `href`, or ones the engine flags as custom widgets.
#[must_use]
pub fn matches(element: &ElementSnapshot) -> bool {
    match element.attribute("href") {
        None | Some("" | "#") => true,
        Some(_) => element.has_custom_widget_markup,
    }
}

/// Collects name, aria attributes, role, tab index, url and a snippet. Always passes.
///
/// The snippet is the element itself when it has both a name and a url,
/// otherwise its parent (when there is one) for context.
pub fn evaluate(context: &mut CheckContext, element: &ElementSnapshot) -> bool {
    let url = element.attribute("href");
    let name = element.accessible_name.as_deref();
    let snippet = if url.is_some() && name.is_some() {
        element.outer_html.as_str()
    } else {
        element
            .parent_outer_html
            .as_deref()
            .unwrap_or(&element.outer_html)
    };

    context.set_data(json!({
        "accessibleName": name,
        "ariaAttributes": element.aria_attributes(),
        "role": element.role(),
        "tabIndex": element.attribute("tabindex"),
        "url": url,
        "snippet": snippet,
    }));
    true
}

pub fn valid_role_if_present(_context: &mut CheckContext, element: &ElementSnapshot) -> bool {
    element
        .role()
        .is_none_or(|role| role.split_whitespace().all(|r| ARIA_ROLES.contains(&r)))
}

/// Copy the snippet collected by the first `any` check onto the node.
#[must_use]
pub fn decorate_node(mut node: RawNodeResult) -> RawNodeResult {
    let snippet = node
        .any
        .first()
        .and_then(|check| check.data.get("snippet"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);
    if snippet.is_some() {
        node.snippet = snippet;
    }
    node
}

#[must_use]
pub fn configuration() -> RuleConfiguration {
    RuleConfiguration::new(
        RuleDefinition::new(RULE_ID)
            .with_selector("a")
            .with_any(&[CHECK_ID])
            .with_all(&[VALID_ROLE_CHECK_ID])
            .with_none(&["has-widget-role"])
            .with_matches(matches)
            .with_decorate_node(decorate_node)
            .with_description("Custom widgets coded as links must expose their function")
            .with_help("Links used as custom widgets should have a valid role and accessible name"),
        vec![
            CheckConfiguration::new(CHECK_ID).with_evaluate(evaluate),
            CheckConfiguration::new(VALID_ROLE_CHECK_ID)
                .with_evaluate(valid_role_if_present)
                .with_pass_message("Element has a valid ARIA role or no role")
                .with_fail_message("Element has an invalid ARIA role"),
        ],
    )
}
