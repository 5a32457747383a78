use serde_json::Value;

use super::*;
use crate::rules::{CheckContext, ElementSnapshot, evaluate_check, evaluate_rule};

fn image_data(element: &ElementSnapshot) -> Value {
    let mut context = CheckContext::new();
    assert!(image_function::evaluate(&mut context, element));
    context.into_data()
}

// ============================================================================
// image-function
// ============================================================================

#[test]
fn image_function_configuration_shape() {
    let config = image_function::configuration();
    assert_eq!(config.rule.id, "image-function");
    assert_eq!(config.rule.selector, "*");
    assert_eq!(config.rule.any, vec!["image-function-data-collector"]);
    assert!(config.rule.all.is_empty());
    assert_eq!(config.checks[0].id, "image-function-data-collector");
}

#[test]
fn image_function_matches_image_like_elements() {
    assert!(image_function::matches(&ElementSnapshot::new("img")));
    assert!(image_function::matches(&ElementSnapshot::new("svg")));
    assert!(image_function::matches(
        &ElementSnapshot::new("div").with_attribute("role", "img")
    ));
    assert!(image_function::matches(&ElementSnapshot::new("i")));

    let mut icon_with_bg = ElementSnapshot::new("i");
    icon_with_bg.text_content = "some text".to_string();
    icon_with_bg.background_image = Some("url(a.png)".to_string());
    assert!(image_function::matches(&icon_with_bg));

    assert!(!image_function::matches(&ElementSnapshot::new("div")));
}

#[test]
fn image_with_accessible_name_is_meaningful() {
    let mut img = ElementSnapshot::new("img").with_attribute("aria-labelledby", "el3");
    img.accessible_name = Some(" hello ".to_string());

    let data = image_data(&img);
    assert_eq!(data["imageType"], "<img>");
    assert_eq!(data["accessibleName"], "hello");
    assert_eq!(data["codedAs"], "Meaningful");
    assert!(data["role"].is_null());
}

#[test]
fn image_with_presentational_role_or_empty_alt_is_decorative() {
    for element in [
        ElementSnapshot::new("img").with_attribute("role", "none"),
        ElementSnapshot::new("img").with_attribute("role", "presentation"),
        ElementSnapshot::new("img").with_attribute("alt", ""),
    ] {
        assert_eq!(image_data(&element)["codedAs"], "Decorative");
    }
}

#[test]
fn image_without_alt_or_name_is_undetermined() {
    let data = image_data(&ElementSnapshot::new("img"));
    assert!(data["codedAs"].is_null());
    assert_eq!(data["accessibleName"], "");
}

#[test]
fn image_type_for_role_icon_and_background() {
    let data = image_data(&ElementSnapshot::new("div").with_attribute("role", "img"));
    assert_eq!(data["imageType"], "Role=\"img\"");
    assert_eq!(data["role"], "img");

    let data = image_data(&ElementSnapshot::new("i"));
    assert_eq!(data["imageType"], "icon fonts (empty <i> elements)");
    assert_eq!(data["codedAs"], "Decorative");

    let mut div = ElementSnapshot::new("div");
    div.background_image = Some("url(bg.png)".to_string());
    let data = image_data(&div);
    assert_eq!(data["imageType"], "CSS background-image");
    assert_eq!(data["codedAs"], "Decorative");

    assert!(image_data(&ElementSnapshot::new("div"))["imageType"].is_null());
}

// ============================================================================
// link-function
// ============================================================================

fn anchor(href: Option<&str>) -> ElementSnapshot {
    let mut element = ElementSnapshot::new("a");
    if let Some(href) = href {
        element = element.with_attribute("href", href);
    }
    element.outer_html = "outerHTML".to_string();
    element.parent_outer_html = Some("parentOuterHTML".to_string());
    element
}

#[test]
fn link_function_configuration_shape() {
    let config = link_function::configuration();
    assert_eq!(config.rule.id, "link-function");
    assert_eq!(config.rule.selector, "a");
    assert_eq!(config.rule.any, vec!["link-function"]);
    assert_eq!(config.rule.none, vec!["has-widget-role"]);
    assert_eq!(config.rule.all, vec!["valid-role-if-present"]);
    assert_eq!(config.checks[0].id, "link-function");
    assert_eq!(config.checks[1].id, "valid-role-if-present");
}

#[test]
fn link_function_matches_empty_hrefs_and_custom_widgets() {
    assert!(link_function::matches(&anchor(None)));
    assert!(link_function::matches(&anchor(Some(""))));
    assert!(link_function::matches(&anchor(Some("#"))));
    assert!(!link_function::matches(&anchor(Some("valid-href-value"))));

    let mut widget = anchor(Some("valid-href-value"));
    widget.has_custom_widget_markup = true;
    assert!(link_function::matches(&widget));
}

#[test]
fn link_snippet_is_self_when_name_and_url_present() {
    let mut element = anchor(Some("url"))
        .with_attribute("role", "role")
        .with_attribute("tabindex", "tabindex")
        .with_attribute("aria-property", "value");
    element.accessible_name = Some("accessible-name".to_string());

    let mut context = CheckContext::new();
    assert!(link_function::evaluate(&mut context, &element));
    let data = context.data();
    assert_eq!(data["snippet"], "outerHTML");
    assert_eq!(data["url"], "url");
    assert_eq!(data["role"], "role");
    assert_eq!(data["tabIndex"], "tabindex");
    assert_eq!(data["ariaAttributes"]["aria-property"], "value");
}

#[test]
fn link_snippet_falls_back_to_parent_then_self() {
    let mut element = anchor(None);
    element.accessible_name = Some("accessible-name".to_string());
    let mut context = CheckContext::new();
    link_function::evaluate(&mut context, &element);
    assert_eq!(context.data()["snippet"], "parentOuterHTML");

    let mut orphan = anchor(Some("url"));
    orphan.parent_outer_html = None;
    let mut context = CheckContext::new();
    link_function::evaluate(&mut context, &orphan);
    assert_eq!(context.data()["snippet"], "outerHTML");
    assert!(context.data()["accessibleName"].is_null());
}

#[test]
fn valid_role_check() {
    let config = link_function::configuration();
    let check = config.find_check("valid-role-if-present").unwrap();

    let result = evaluate_check(check, &anchor(None));
    assert_eq!(result.result, Some(true));
    assert_eq!(
        result.message.as_deref(),
        Some("Element has a valid ARIA role or no role")
    );

    let result = evaluate_check(check, &anchor(None).with_attribute("role", "bogus"));
    assert_eq!(result.result, Some(false));
    assert_eq!(result.message.as_deref(), Some("Element has an invalid ARIA role"));
}

#[test]
fn link_decorate_node_copies_snippet() {
    let config = link_function::configuration();
    let node = evaluate_rule(&config, &anchor(Some("#"))).unwrap();

    assert_eq!(node.any.len(), 1);
    assert_eq!(node.all.len(), 1);
    assert!(node.none.is_empty(), "engine built-in checks are not evaluated locally");
    assert_eq!(node.snippet.as_deref(), Some("parentOuterHTML"));
}

#[test]
fn link_decorate_node_without_any_checks_is_noop() {
    let node = link_function::decorate_node(crate::model::RawNodeResult::default());
    assert!(node.snippet.is_none());
}

#[test]
fn builtin_rules_are_registered_in_order() {
    let ids: Vec<_> = builtin_rules().into_iter().map(|c| c.rule.id).collect();
    assert_eq!(ids, vec!["image-function", "link-function"]);
}
