// src/error.rs

use thiserror::Error;

/// Errors produced by the derivation core.
///
/// The three variants are kept distinct so callers can tell a rejected table
/// (`Schema`) or a rejected operation (`Parameter`) apart from corrupt input
/// data (`DataIntegrity`). Recoverable conditions (an unclosed trailing pulse,
/// an odor label with no configured color, a skipped CSV row) are not errors;
/// they are reported on stderr and processing continues.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("schema error: {0}")]
    Schema(String),
    #[error("parameter error: {0}")]
    Parameter(String),
    #[error("data integrity error: {0}")]
    DataIntegrity(String),
}
