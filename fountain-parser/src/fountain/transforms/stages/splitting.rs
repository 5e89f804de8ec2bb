//! Multi-line token splitting stage
//!
//! Raw tokens keep the embedded `\n` breaks of their source block. This
//! stage pulls them apart into one token per segment. Blank segments are
//! dropped, and only the first segment of a character token may remain a
//! cue; later segments are the cue's speech and become dialogue.

use crate::fountain::grammar::RawToken;
use crate::fountain::token::TokenKind;
use crate::fountain::transforms::{Runnable, TransformError};

/// Splitting stage
///
/// # Input / Output
/// - `Vec<RawToken>` → `Vec<RawToken>`, one token per non-blank segment
pub struct SplitMultiline;

impl SplitMultiline {
    pub fn new() -> Self {
        SplitMultiline
    }
}

impl Default for SplitMultiline {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Vec<RawToken>, Vec<RawToken>> for SplitMultiline {
    fn run(&self, input: Vec<RawToken>) -> Result<Vec<RawToken>, TransformError> {
        let mut out = Vec::with_capacity(input.len());
        for token in input {
            for (ix, segment) in token.text.split('\n').enumerate() {
                let segment = segment.trim();
                if segment.is_empty() {
                    continue;
                }
                let kind = if ix > 0 && token.kind == TokenKind::Character {
                    TokenKind::Dialogue
                } else {
                    token.kind
                };
                out.push(RawToken {
                    kind,
                    text: segment.to_string(),
                    depth: token.depth,
                });
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_tokens_pass_through() {
        let stage = SplitMultiline::new();
        let input = vec![RawToken::new(TokenKind::Action, "She waits.")];
        let out = stage.run(input.clone()).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_multi_line_action_splits_per_segment() {
        let stage = SplitMultiline::new();
        let input = vec![RawToken::new(TokenKind::Action, "One.\nTwo.\nThree.")];
        let out = stage.run(input).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|t| t.kind == TokenKind::Action));
        assert_eq!(out[2].text, "Three.");
    }

    #[test]
    fn test_blank_segments_are_dropped() {
        let stage = SplitMultiline::new();
        let input = vec![RawToken::new(TokenKind::Title, "\nBRICK & STEEL\n  ")];
        let out = stage.run(input).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "BRICK & STEEL");
        assert_eq!(out[0].kind, TokenKind::Title);
    }

    #[test]
    fn test_character_tail_segments_become_dialogue() {
        let stage = SplitMultiline::new();
        let input = vec![RawToken::new(TokenKind::Character, "JOHN\nHello there.")];
        let out = stage.run(input).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, TokenKind::Character);
        assert_eq!(out[1].kind, TokenKind::Dialogue);
        assert_eq!(out[1].text, "Hello there.");
    }

    #[test]
    fn test_split_preserves_segment_content() {
        let stage = SplitMultiline::new();
        let text = "One.\nTwo.\nThree.";
        let input = vec![RawToken::new(TokenKind::Dialogue, text)];
        let out = stage.run(input).unwrap();
        let rejoined = out.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join("\n");
        assert_eq!(rejoined, text);
    }
}
