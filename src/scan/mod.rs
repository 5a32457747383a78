//! Pre-scan configuration and the engine seam.

mod engine;
mod parameters;
mod sifter;

pub use engine::{RecordedEngine, ScanEngine, Scanner};
pub use parameters::{
    RunOnly, RunOptions, ScanContext, ScanOptions, ScanParameterGenerator, ScanParameters,
};
pub use sifter::{RuleCatalogEntry, RuleSifter, ScannerRuleInfo};
