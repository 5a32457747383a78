use serde_json::json;

use crate::rules::{
    CheckConfiguration, CheckContext, ElementSnapshot, RuleConfiguration, RuleDefinition,
};

pub const RULE_ID: &str = "image-function";
pub const CHECK_ID: &str = "image-function-data-collector";

const ICON_FONT: &str = "icon fonts (empty <i> elements)";
const CSS_BACKGROUND: &str = "CSS background-image";

fn is_empty_icon(element: &ElementSnapshot) -> bool {
    element.tag_name == "i" && !element.has_text()
}

/// Image elements: `<img>`, `<svg>`, `role="img"`, empty `<i>` icon fonts
/// and anything painted with a CSS background image.
#[must_use]
pub fn matches(element: &ElementSnapshot) -> bool {
    matches!(element.tag_name.as_str(), "img" | "svg")
        || element.role() == Some("img")
        || is_empty_icon(element)
        || element.background_image.is_some()
}

fn image_type(element: &ElementSnapshot) -> Option<&'static str> {
    match element.tag_name.as_str() {
        "img" => Some("<img>"),
        "svg" => Some("<svg>"),
        _ if element.role() == Some("img") => Some("Role=\"img\""),
        _ if is_empty_icon(element) => Some(ICON_FONT),
        _ if element.background_image.is_some() => Some(CSS_BACKGROUND),
        _ => None,
    }
}

fn coded_as(
    element: &ElementSnapshot,
    image_type: Option<&str>,
    name: &str,
) -> Option<&'static str> {
    if matches!(element.role(), Some("none" | "presentation"))
        || element.attribute("alt") == Some("")
    {
        return Some("Decorative");
    }
    if !name.is_empty() {
        return Some("Meaningful");
    }
    if matches!(image_type, Some(ICON_FONT | CSS_BACKGROUND)) {
        return Some("Decorative");
    }
    None
}

/// Collects image type, accessible name, coded-as and role. Always passes.
pub fn evaluate(context: &mut CheckContext, element: &ElementSnapshot) -> bool {
    let name = element
        .accessible_name
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    let image_type = image_type(element);
    context.set_data(json!({
        "imageType": image_type,
        "accessibleName": name,
        "codedAs": coded_as(element, image_type, name),
        "role": element.role(),
    }));
    true
}

#[must_use]
pub fn configuration() -> RuleConfiguration {
    RuleConfiguration::new(
        RuleDefinition::new(RULE_ID)
            .with_selector("*")
            .with_any(&[CHECK_ID])
            .with_matches(matches)
            .with_description("Images must be coded as either meaningful or decorative")
            .with_help("Identify the function of each image"),
        vec![CheckConfiguration::new(CHECK_ID).with_evaluate(evaluate)],
    )
}
