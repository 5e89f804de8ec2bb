//! Block Pattern Definitions
//!
//! Lazy-compiled regexes for the coarse block grammar. Patterns are tried in
//! a fixed order by [super::tokenize_block] for correct disambiguation:
//!
//! 1. scene heading - INT/EXT/EST/I\/E prefix or a forced leading `.`
//! 2. transition    - the fixed FADE/CUT forms, or upper-case `... TO:`
//! 3. section       - one or more leading `#`
//! 4. synopsis      - a single leading `=`
//! 5. note          - `[[ ... ]]` wrapping the whole block
//! 6. dialogue      - an upper-case cue line followed by at least one line
//! 7. action        - anything else
//!
//! The title page is handled before this ladder and only for the first
//! block of the document.
//!
//! Deliberately absent: forced `@` characters, `~` lyrics, forced `>`
//! transitions and `>...<` centered text, dual-dialogue carets, character
//! extensions. Those variants fall through to `action`/`character` here and
//! are repaired by the reclassification stage.

use once_cell::sync::Lazy;
use regex::Regex;

/// `INT. KITCHEN - DAY`, `EST. CITY - NIGHT`, `I/E CAR - DUSK`.
/// Forced `.HEADING` is recognized structurally (a leading `.` that is not
/// `..`) because the regex crate has no lookahead.
pub(super) static SCENE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:int|ext|est|i/e)[. ]").unwrap());

/// Trailing scene-number tag: `INT. HOUSE - DAY #1-A#`.
pub(super) static SCENE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+#[A-Z0-9.\-]+#\s*$").unwrap());

/// The transitions the base grammar recognizes on its own. Forced `>`
/// transitions are left to the reclassifier.
pub(super) static TRANSITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:FADE (?:TO BLACK|OUT)|CUT TO BLACK)\.|.+ TO:)$").unwrap());

/// A character cue line: upper-case, may carry a `(...)` extension and a
/// trailing dual-dialogue caret. Both are kept in the raw text.
pub(super) static CHARACTER_CUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9 ._\-'()]*\^?$").unwrap());

/// Section marker with depth: `## Midpoint`.
pub(super) static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s*(.*)$").unwrap());

/// A note wrapping one whole block, possibly spanning lines.
pub(super) static NOTE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\[\[(.+)\]\]$").unwrap());

/// A title-page line: `Key: value`. Keys outside the whitelist do not start
/// a title page.
pub(super) static TITLE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(title|credit|authors?|source|draft[ _]?date|date|contact):\s*(.*)$").unwrap()
});

/// Leading front-matter, removed by byte range and never interpreted.
pub(super) static FRONT_MATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---.*?---\s*").unwrap());

/// Boneyard comment `/* ... */`.
pub(super) static BONEYARD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Blocks are separated by runs of two or more newlines.
pub(super) static BLOCK_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
