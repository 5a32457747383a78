#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the axe-report binary.
#[macro_export]
macro_rules! axe_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("axe-report"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local axe-report config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".axe-report.toml", content);
    }

    /// Writes the sample engine results and returns their path.
    pub fn create_results(&self) -> PathBuf {
        self.create_file("results.json", SAMPLE_RESULTS)
    }

    /// Writes the sample rule catalog and returns its path.
    pub fn create_catalog(&self) -> PathBuf {
        self.create_file("catalog.json", SAMPLE_CATALOG)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine results for one page: one pass, two violations, an unscanned frame.
pub const SAMPLE_RESULTS: &str = r##"{
  "url": "https://shop.example.com/cart",
  "timestamp": "2024-05-02T10:15:00.000Z",
  "passes": [
    {
      "id": "html-has-lang",
      "description": "Ensures every HTML document has a lang attribute",
      "help": "<html> element must have a lang attribute",
      "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/html-has-lang",
      "tags": ["cat.language", "wcag2a", "wcag311"],
      "nodes": [
        {
          "html": "<html lang=\"en\">",
          "target": ["html"],
          "any": [{ "id": "has-lang", "message": "The <html> element has a lang attribute", "data": null, "relatedNodes": [] }],
          "all": [],
          "none": []
        }
      ]
    }
  ],
  "violations": [
    {
      "id": "button-name",
      "description": "Ensures buttons have discernible text",
      "help": "Buttons must have discernible text",
      "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/button-name",
      "tags": ["cat.name-role-value", "wcag2a", "wcag412"],
      "nodes": [
        {
          "html": "<button class=\"remove\"></button>",
          "target": ["#cart", ".remove"],
          "failureSummary": "Fix any of the following:\n  Element does not have inner text that is visible to screen readers",
          "any": [
            { "id": "button-has-visible-text", "message": "Element does not have inner text that is visible to screen readers", "data": null, "relatedNodes": [] }
          ],
          "all": [],
          "none": []
        }
      ]
    },
    {
      "id": "color-contrast",
      "description": "Ensures the contrast between foreground and background colors meets WCAG 2 AA",
      "help": "Elements must have sufficient color contrast",
      "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/color-contrast",
      "tags": ["cat.color", "wcag2aa", "wcag143"],
      "nodes": [
        {
          "html": "<span class=\"price\">$10</span>",
          "target": [".price"],
          "any": [{ "id": "color-contrast", "message": "Element has insufficient color contrast", "data": null, "relatedNodes": [] }],
          "all": [],
          "none": []
        }
      ]
    }
  ],
  "incomplete": [
    {
      "id": "frame-tested",
      "tags": ["cat.structure", "review-item"],
      "nodes": [
        {
          "html": "<iframe src=\"/chat\"></iframe>",
          "target": ["iframe"],
          "any": [{ "id": "frame-tested", "message": "Unable to inject axe into the iframe", "data": null, "relatedNodes": [] }],
          "all": [],
          "none": []
        }
      ]
    }
  ],
  "inapplicable": []
}"##;

/// Engine rule catalog with one best-practice-only entry.
pub const SAMPLE_CATALOG: &str = r##"[
  { "ruleId": "button-name", "help": "Buttons must have discernible text", "tags": ["wcag2a", "wcag412"] },
  { "ruleId": "region", "help": "All page content should be contained by landmarks", "tags": ["best-practice"] },
  { "ruleId": "html-has-lang", "help": "<html> element must have a lang attribute", "tags": ["wcag2a", "wcag311"] }
]"##;
