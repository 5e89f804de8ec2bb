//! Main module for the Fountain token repair pipeline
//!
//! The pipeline runs a fixed sequence of transformations over one document
//! snapshot. Each stage receives the previous stage's output and returns a
//! new value; no stage keeps state across invocations.
//!
//! The Repair Pipeline
//!
//!     1. Base tokenization. See [grammar]. A coarse block-level tokenizer
//!        over the document body (front-matter removed by byte range,
//!        boneyard comments stripped). Raw tokens have no line information
//!        and may contain embedded line breaks.
//!
//!     2. Splitting. See [transforms::stages::splitting]. Raw tokens with
//!        embedded breaks become one token per segment; only the first
//!        segment of a character token may remain a cue.
//!
//!     3. Reclassification. See [transforms::stages::reclassification].
//!        An ordered rule table repairs the markup variants the base
//!        grammar leaves unclassified.
//!
//!     4. Line location. See [transforms::stages::line_location]. A
//!        forward-only cursor scans the original source lines, comparing
//!        kind-normalized token text against kind-normalized candidate
//!        lines. Misses are recorded as unresolved, never raised.
//!
//!     5. Dialogue block promotion. See [transforms::stages::dialogue_blocks].
//!        Starting from each character cue, contiguous following tokens are
//!        absorbed as parenthetical/dialogue until a blank source line or a
//!        block-terminating token kind.
//!
//! The assembled pipeline lives in [transforms::standard].

pub mod grammar;
pub mod normalize;
pub mod token;
pub mod transforms;
