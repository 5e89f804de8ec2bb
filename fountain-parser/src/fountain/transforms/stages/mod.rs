//! Individual pipeline stages
//!
//! One file per stage, in execution order: base tokenization, splitting,
//! reclassification, line location, dialogue block promotion.

pub mod dialogue_blocks;
pub mod line_location;
pub mod reclassification;
pub mod splitting;
pub mod tokenization;

pub use dialogue_blocks::PromoteDialogue;
pub use line_location::LocateLines;
pub use reclassification::Reclassify;
pub use splitting::SplitMultiline;
pub use tokenization::BaseTokenization;
