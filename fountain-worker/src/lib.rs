//! # fountain-worker
//!
//! The asynchronous boundary around the token repair pipeline. A caller
//! sends the full document text over a channel and receives exactly one of
//! two reply shapes: the corrected token list, or an error description.
//! Nothing from the pipeline - not even a panic - escapes past this crate.

pub mod worker;

pub use worker::{spawn, ParseReply, ParserHandle};
