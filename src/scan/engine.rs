use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::parameters::{ScanOptions, ScanParameterGenerator, ScanParameters};
use crate::decorator::{PageTitleSource, ResultDecorator};
use crate::error::{AxeReportError, Result};
use crate::model::{RawScanResults, ScanResults};

/// The scanning engine, treated as a black box.
pub trait ScanEngine {
    /// Run the engine with the given parameters.
    ///
    /// # Errors
    /// Returns an error when the engine reports a failure.
    fn run(&self, parameters: &ScanParameters) -> Result<RawScanResults>;
}

/// Replays a recorded engine results file.
#[derive(Debug, Clone)]
pub struct RecordedEngine {
    source: PathBuf,
    results: RawScanResults,
}

impl RecordedEngine {
    #[must_use]
    pub fn new(results: RawScanResults) -> Self {
        Self {
            source: PathBuf::new(),
            results,
        }
    }

    /// Load an engine results JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid results JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AxeReportError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map(|engine| Self {
            source: path.to_path_buf(),
            ..engine
        })
    }

    /// Parse engine results JSON.
    ///
    /// # Errors
    /// Returns an error if the content is not valid results JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(content)?))
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl ScanEngine for RecordedEngine {
    fn run(&self, parameters: &ScanParameters) -> Result<RawScanResults> {
        let results = self.results.clone();
        Ok(match parameters.options.rule_ids() {
            Some(rule_ids) => results.restricted_to(rule_ids),
            None => results,
        })
    }
}

/// Runs the engine and decorates what it returns.
pub struct Scanner<'a, E: ScanEngine, T: PageTitleSource> {
    engine: E,
    parameter_generator: ScanParameterGenerator,
    decorator: ResultDecorator<'a, T>,
}

impl<'a, E: ScanEngine, T: PageTitleSource> Scanner<'a, E, T> {
    #[must_use]
    pub const fn new(
        engine: E,
        parameter_generator: ScanParameterGenerator,
        decorator: ResultDecorator<'a, T>,
    ) -> Self {
        Self {
            engine,
            parameter_generator,
            decorator,
        }
    }

    /// Scan and decorate.
    ///
    /// On engine failure `on_error` is called first, then the failure is
    /// returned as [`AxeReportError::Engine`].
    ///
    /// # Errors
    /// Returns `Engine` when the engine run fails.
    pub fn scan(
        &self,
        options: &ScanOptions,
        on_error: impl FnOnce(&AxeReportError),
    ) -> Result<ScanResults> {
        let parameters = self.parameter_generator.generate(options);
        debug!(?parameters.context, "Running scan engine");

        match self.engine.run(&parameters) {
            Ok(raw) => Ok(self.decorator.decorate_results(raw)),
            Err(err) => {
                warn!(error = %err, "Scan engine reported an error");
                on_error(&err);
                Err(match err {
                    AxeReportError::Engine(_) => err,
                    other => AxeReportError::Engine(other.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
