use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use crate::cli::Cli;

pub const RESULTS_JSON: &str = r##"{
  "url": "https://example.com/",
  "timestamp": "2024-01-01T00:00:00.000Z",
  "passes": [
    {
      "id": "document-title",
      "description": "Ensures each HTML document contains a non-empty <title> element",
      "help": "Documents must have <title> element to aid in navigation",
      "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/document-title",
      "tags": ["cat.text-alternatives", "wcag2a", "wcag242"],
      "nodes": [
        {
          "html": "<html lang=\"en\">",
          "target": ["html"],
          "any": [{ "id": "doc-has-title", "message": "Document has a non-empty <title> element", "data": null, "relatedNodes": [] }],
          "all": [],
          "none": []
        }
      ]
    }
  ],
  "violations": [
    {
      "id": "image-alt",
      "description": "Ensures <img> elements have alternate text or a role of none or presentation",
      "help": "Images must have alternate text",
      "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/image-alt",
      "tags": ["cat.text-alternatives", "wcag2a", "wcag111"],
      "nodes": [
        {
          "html": "<img src=\"logo.png\">",
          "target": ["#logo"],
          "failureSummary": "Fix any of the following:\n  Element does not have an alt attribute",
          "any": [
            { "id": "has-alt", "message": "Element does not have an alt attribute", "data": null, "relatedNodes": [] },
            { "id": "aria-label", "message": "aria-label attribute does not exist or is empty", "data": null, "relatedNodes": [] }
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
          "html": "<p class=\"faint\">Faint</p>",
          "target": [".faint"],
          "failureSummary": "Fix any of the following:\n  Element has insufficient color contrast",
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
          "html": "<iframe src=\"ad.html\"></iframe>",
          "target": ["iframe"],
          "any": [{ "id": "frame-tested", "message": "Unable to inject axe into the iframe", "data": null, "relatedNodes": [] }],
          "all": [],
          "none": []
        }
      ]
    }
  ],
  "inapplicable": [
    { "id": "video-caption", "tags": ["cat.text-alternatives", "wcag2a", "wcag122"], "nodes": [] }
  ]
}"##;

pub const CATALOG_JSON: &str = r##"[
  { "ruleId": "image-alt", "help": "Images must have alternate text", "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/image-alt", "tags": ["wcag2a", "wcag111"] },
  { "ruleId": "region", "help": "All page content should be contained by landmarks", "tags": ["cat.keyboard", "best-practice"] },
  { "ruleId": "document-title", "help": "Documents must have <title> element", "tags": ["wcag2a", "wcag242"] }
]"##;

/// Temp directory holding a results file and a catalog file.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("results.json"), RESULTS_JSON).unwrap();
        std::fs::write(dir.path().join("catalog.json"), CATALOG_JSON).unwrap();
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn arg(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).unwrap()
    }
}

/// Parse a command line, always writing to `out` inside the fixture.
pub fn parse_cli(fixture: &Fixture, args: &[String]) -> Cli {
    let mut argv = vec!["axe-report".to_string()];
    argv.extend(args.iter().cloned());
    argv.push("-o".to_string());
    argv.push(fixture.arg("out"));
    Cli::parse_from(argv)
}
