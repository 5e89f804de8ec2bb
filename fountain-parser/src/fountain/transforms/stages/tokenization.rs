//! Base tokenization stage
//!
//! Adapts the coarse block grammar to the pipeline. A grammar failure is the
//! one hard error of the whole pipeline: no partial token stream is emitted.

use crate::fountain::grammar::{self, RawToken};
use crate::fountain::transforms::{Runnable, TransformError};

/// Base tokenization stage
///
/// # Input
/// - `String` - full document text (front-matter still attached; the
///   grammar drops it by byte range)
///
/// # Output
/// - `Vec<RawToken>` - coarse, line-unaware token stream
pub struct BaseTokenization;

impl BaseTokenization {
    pub fn new() -> Self {
        BaseTokenization
    }
}

impl Default for BaseTokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Vec<RawToken>> for BaseTokenization {
    fn run(&self, input: String) -> Result<Vec<RawToken>, TransformError> {
        grammar::tokenize(&input).map_err(|e| TransformError::StageFailed {
            stage: "base-tokenization".to_string(),
            message: e.to_string(),
        })
    }
}
