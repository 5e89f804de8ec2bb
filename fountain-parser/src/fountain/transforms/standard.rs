//! Standard transform definitions
//!
//! The pre-built document pipeline. The later stages need the original
//! source lines in scope (location and promotion scan the raw document,
//! not the stripped body), so the pipeline is composed inside a closure in
//! the manner of a fold rather than as a flat `.then()` chain.

use once_cell::sync::Lazy;

use crate::fountain::token::Token;
use crate::fountain::transforms::stages::{
    BaseTokenization, LocateLines, PromoteDialogue, Reclassify, SplitMultiline,
};
use crate::fountain::transforms::{Runnable, Transform, TransformError};

/// Type alias for the full repair pipeline
pub type RepairTransform = Transform<String, Vec<Token>>;

/// Full token repair pipeline: String → Vec<Token>
///
/// 1. Base tokenization (coarse block grammar)
/// 2. Splitting of embedded line breaks
/// 3. Reclassification of forced markup variants
/// 4. Line location against the original source lines
/// 5. Dialogue block promotion
pub static TOKEN_REPAIR: Lazy<RepairTransform> = Lazy::new(|| {
    Transform::from_fn(|source: String| {
        let lines: Vec<String> = source.lines().map(str::to_string).collect();
        let raw = BaseTokenization::new().run(source)?;
        let raw = SplitMultiline::new().run(raw)?;
        let tokens = Reclassify::new().run(raw)?;
        let tokens = LocateLines::new(&lines).run(tokens)?;
        PromoteDialogue::new(&lines).run(tokens)
    })
});

/// Run the repair pipeline over one document snapshot.
pub fn tokenize_document(source: &str) -> Result<Vec<Token>, TransformError> {
    TOKEN_REPAIR.run(source.to_string())
}
