//! Kind-specific comparison normalizers
//!
//! Each normalizer strips exactly the syntax markers relevant to one token
//! kind and folds the remainder to a trimmed, upper-cased comparable form.
//! The line locator applies the same normalizer to a token's text and to
//! each candidate source line, so both sides collapse to the same shape
//! whether or not the markers are present.
//!
//! All functions here are pure and total; malformed input falls through
//! unchanged rather than erroring.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fountain::token::TokenKind;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_*~]").unwrap());
static SCENE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+#[A-Z0-9.\-]+#\s*$").unwrap());
static TRAILING_PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\([^)]+\)\s*$").unwrap());
static TRAILING_CARET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\^\s*$").unwrap());
static TITLE_KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+:\s*").unwrap());

/// Fallback comparison form: drop HTML-like tags and emphasis markers.
pub fn plain(s: &str) -> String {
    let s = TAG_RE.replace_all(s, "");
    let s = EMPHASIS_RE.replace_all(&s, "");
    s.trim().to_uppercase()
}

/// `.EXT. SOMEWHERE #12#` → `EXT. SOMEWHERE`
pub fn scene_heading(s: &str) -> String {
    let s = s.trim();
    let s = s.strip_prefix('.').unwrap_or(s);
    let s = SCENE_NUMBER_RE.replace(s, "");
    s.trim().to_uppercase()
}

/// `@BRICK (V.O.)` → `BRICK`, `MARY^` → `MARY`. The parenthetical is
/// stripped before the caret, so a caret after the parenthesis shields it.
pub fn character(s: &str) -> String {
    let s = s.trim();
    let s = s.strip_prefix('@').unwrap_or(s);
    let s = TRAILING_PAREN_RE.replace(s, "");
    let s = TRAILING_CARET_RE.replace(&s, "");
    s.trim().to_uppercase()
}

/// `~ la la la` → `LA LA LA`
pub fn lyric(s: &str) -> String {
    let s = s.trim_start();
    let s = s.strip_prefix('~').unwrap_or(s);
    s.trim().to_uppercase()
}

/// `## Midpoint` → `MIDPOINT`
pub fn section(s: &str) -> String {
    s.trim_start().trim_start_matches('#').trim().to_uppercase()
}

/// `= They kiss.` → `THEY KISS.`
pub fn synopsis(s: &str) -> String {
    let s = s.trim_start();
    let s = s.strip_prefix('=').unwrap_or(s);
    s.trim().to_uppercase()
}

/// `[[fix this beat]]` → `FIX THIS BEAT`
pub fn note(s: &str) -> String {
    let s = s.trim();
    let s = s.strip_prefix("[[").unwrap_or(s);
    let s = s.strip_suffix("]]").unwrap_or(s);
    s.trim().to_uppercase()
}

/// `>THE END<` → `THE END`
pub fn centered(s: &str) -> String {
    let s = s.trim();
    let s = s.strip_prefix('>').map(str::trim_start).unwrap_or(s);
    let s = s.strip_suffix('<').map(str::trim_end).unwrap_or(s);
    s.trim().to_uppercase()
}

/// `>BURN TO PINK` / `SMASH CUT TO:` → `BURN TO PINK` / `SMASH CUT TO`
pub fn transition(s: &str) -> String {
    let s = s.trim();
    let s = s.strip_prefix('>').map(str::trim_start).unwrap_or(s);
    let s = s.strip_suffix(':').map(str::trim_end).unwrap_or(s);
    s.trim().to_uppercase()
}

/// Title-page token text: no marker stripping, just the comparable fold.
pub fn title_value(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Title-page source-line probe: also drops a leading `Key:` label.
pub fn title_line(s: &str) -> String {
    TITLE_KEY_RE.replace(s, "").trim().to_uppercase()
}

/// Comparison target for a token's text, by kind.
pub fn token_target(kind: TokenKind, text: &str) -> String {
    match kind {
        TokenKind::SceneHeading => scene_heading(text),
        TokenKind::Character => character(text),
        TokenKind::Lyric => lyric(text),
        TokenKind::Section => section(text),
        TokenKind::Synopsis => synopsis(text),
        TokenKind::Note => note(text),
        TokenKind::Centered => centered(text),
        TokenKind::Transition => transition(text),
        kind if kind.is_title_page() => title_value(text),
        _ => plain(text),
    }
}

/// Comparison form of a candidate source line, by token kind.
///
/// Identical to [token_target] except for title-page kinds, where the raw
/// source line still carries its `Key:` label.
pub fn line_probe(kind: TokenKind, line: &str) -> String {
    if kind.is_title_page() {
        title_line(line)
    } else {
        token_target(kind, line)
    }
}
