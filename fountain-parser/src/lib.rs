//! # fountain-parser
//!
//! A token repair pipeline for the Fountain screenplay markup format.
//!
//! The library consumes raw document text and produces a corrected,
//! line-accurate sequence of typed tokens (scene headings, character cues,
//! dialogue, parentheticals, transitions, lyrics, sections, synopses, notes,
//! centered text, title-page fields) suitable for driving editor decorations.
//!
//! The base grammar is deliberately coarse: several markup variants (forced
//! `@` characters, `~` lyrics, forced `>` transitions and `>...<` centered
//! text, dual-dialogue carets, character extensions) are left unclassified
//! and repaired by the later pipeline stages. See the [fountain] module for
//! the stage-by-stage walkthrough.

pub mod fountain;
