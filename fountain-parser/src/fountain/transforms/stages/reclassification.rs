//! Reclassification stage
//!
//! Repairs the markup variants the base grammar deliberately leaves
//! unclassified. Rules are applied to every token in declaration order, and
//! later rules see the effect of earlier ones on the same token: a token
//! promoted to character by the forced-`@` rule can still match the
//! extension rule, and a character that loses its caret has already kept
//! its `(...)` text for good.
//!
//! A rule whose pattern does not match leaves the token untouched; there is
//! no error path here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fountain::grammar::RawToken;
use crate::fountain::token::{LineRef, Token, TokenKind};
use crate::fountain::transforms::{Runnable, TransformError};

/// `NAME (extension)` with nothing after the closing parenthesis.
static EXTENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([A-Z][A-Z0-9 ]+?)\s*\(([^)]+)\)$").unwrap());

/// The repair rules, in the order they apply. The order is the
/// disambiguation contract; do not reorder.
const RULES: &[fn(&mut Token)] = &[
    forced_character,
    forced_lyric,
    character_extension,
    forced_transition_or_centered,
    dual_dialogue_marker,
    dialogue_lyric,
];

/// Reclassification stage
///
/// # Input
/// - `Vec<RawToken>` - split, line-unaware tokens
///
/// # Output
/// - `Vec<Token>` - corrected kinds, markers stripped, lines unresolved
pub struct Reclassify;

impl Reclassify {
    pub fn new() -> Self {
        Reclassify
    }
}

impl Default for Reclassify {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Vec<RawToken>, Vec<Token>> for Reclassify {
    fn run(&self, input: Vec<RawToken>) -> Result<Vec<Token>, TransformError> {
        let mut out = Vec::with_capacity(input.len());
        for raw in input {
            let mut token = Token {
                kind: raw.kind,
                text: raw.text,
                line: LineRef::Unresolved,
                depth: raw.depth,
                dual: false,
                extension: None,
            };
            if !token.text.is_empty() {
                for rule in RULES {
                    rule(&mut token);
                }
            }
            out.push(token);
        }
        Ok(out)
    }
}

/// `@NAME` forces a character cue, whatever the token was before.
fn forced_character(token: &mut Token) {
    if let Some(rest) = token.text.strip_prefix('@') {
        if !rest.trim().is_empty() {
            token.kind = TokenKind::Character;
            token.text = rest.trim().to_string();
        }
    }
}

/// `~ la la` in an action token is a lyric line.
fn forced_lyric(token: &mut Token) {
    if token.kind != TokenKind::Action {
        return;
    }
    if let Some(rest) = token.text.strip_prefix('~') {
        token.kind = TokenKind::Lyric;
        token.text = rest.trim_start().to_string();
    }
}

/// `NAME (V.O.)` pulls the parenthetical off into the extension field.
fn character_extension(token: &mut Token) {
    if !matches!(token.kind, TokenKind::Action | TokenKind::Character) {
        return;
    }
    let (name, extension) = match EXTENSION_RE.captures(&token.text) {
        Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
        None => return,
    };
    token.kind = TokenKind::Character;
    token.text = name;
    token.extension = Some(extension);
}

/// `>TEXT` is a forced transition, unless it closes with `<` - then it is
/// centered text.
fn forced_transition_or_centered(token: &mut Token) {
    if token.kind != TokenKind::Action {
        return;
    }
    let rest = match token.text.strip_prefix('>') {
        Some(rest) => rest.trim(),
        None => return,
    };
    if let Some(inner) = rest.strip_suffix('<') {
        token.kind = TokenKind::Centered;
        token.text = inner.trim().to_string();
    } else {
        token.kind = TokenKind::Transition;
        token.text = rest.to_string();
    }
}

/// A trailing `^` on a cue marks the dual-dialogue block.
fn dual_dialogue_marker(token: &mut Token) {
    if token.kind != TokenKind::Character {
        return;
    }
    if let Some(stripped) = token.text.trim_end().strip_suffix('^') {
        token.text = stripped.trim_end().to_string();
        token.dual = true;
    }
}

/// `~` at the start of a dialogue line is a sung line.
fn dialogue_lyric(token: &mut Token) {
    if token.kind != TokenKind::Dialogue {
        return;
    }
    if let Some(rest) = token.text.strip_prefix('~') {
        token.kind = TokenKind::Lyric;
        token.text = rest.trim().to_string();
    }
}
