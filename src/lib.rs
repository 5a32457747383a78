pub mod cli;
pub mod commands;
pub mod config;
pub mod decorator;
pub mod error;
pub mod guidance;
pub mod model;
pub mod output;
pub mod rules;
pub mod scan;
pub mod unified;

pub use error::{AxeReportError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
