use serde_json::Value;

use super::*;
use crate::commands::test_support::{Fixture, parse_cli};

fn rules_args(cli: &Cli) -> &RulesArgs {
    match &cli.command {
        crate::cli::Commands::Rules(args) => args,
        _ => panic!("Expected Rules command"),
    }
}

#[test]
fn text_lists_standard_backed_rules() {
    let fixture = Fixture::new();
    let cli = parse_cli(
        &fixture,
        &[
            "--no-config".to_string(),
            "--color".to_string(),
            "never".to_string(),
            "rules".to_string(),
            fixture.arg("catalog.json"),
        ],
    );

    run_rules_impl(rules_args(&cli), &cli).unwrap();
    let output = fixture.read("out");

    assert!(output.contains("image-alt"));
    assert!(output.contains("document-title"));
    assert!(!output.contains("region"));
    assert!(output.contains("Criteria: WCAG 1.1.1"));
    assert!(output.contains("Total: 2 rules"));
}

#[test]
fn json_lists_rules() {
    let fixture = Fixture::new();
    let cli = parse_cli(
        &fixture,
        &[
            "--no-config".to_string(),
            "rules".to_string(),
            fixture.arg("catalog.json"),
            "--format".to_string(),
            "json".to_string(),
        ],
    );

    run_rules_impl(rules_args(&cli), &cli).unwrap();
    let parsed: Value = serde_json::from_str(&fixture.read("out")).unwrap();

    assert_eq!(parsed["total"], 2);
    assert_eq!(parsed["rules"][0]["id"], "image-alt");
}

#[test]
fn disabled_rule_is_hidden() {
    let fixture = Fixture::new();
    let config = fixture.write(
        "axe.toml",
        "[[rules]]\nid = \"image-alt\"\nenabled = false\n",
    );
    let cli = parse_cli(
        &fixture,
        &[
            "--config".to_string(),
            config.display().to_string(),
            "--color".to_string(),
            "never".to_string(),
            "rules".to_string(),
            fixture.arg("catalog.json"),
        ],
    );

    run_rules_impl(rules_args(&cli), &cli).unwrap();
    let output = fixture.read("out");

    assert!(!output.contains("image-alt"));
    assert!(output.contains("Total: 1 rules"));
}

#[test]
fn missing_catalog_is_config_error() {
    let fixture = Fixture::new();
    let cli = parse_cli(
        &fixture,
        &[
            "--no-config".to_string(),
            "rules".to_string(),
            fixture.arg("missing.json"),
        ],
    );

    assert_eq!(run_rules(rules_args(&cli), &cli), EXIT_CONFIG_ERROR);
}
