//! Line location stage
//!
//! The base grammar works on the stripped body, so its tokens carry no line
//! numbers and the body's offsets do not line up with the original document
//! (front-matter, boneyard). This stage recovers the 0-based source line of
//! every token by re-scanning the ORIGINAL lines with the kind-appropriate
//! normalizer applied to both sides.
//!
//! A single forward-only cursor is threaded through the scan: it enforces
//! monotonic, single-pass matching and disambiguates repeated identical
//! text at different script locations. On a miss the cursor stays put, the
//! token is left unresolved, and the next token retries from the same
//! position.

use crate::fountain::normalize;
use crate::fountain::token::{LineRef, Token};
use crate::fountain::transforms::{Runnable, TransformError};

/// Line location stage
///
/// # Input / Output
/// - `Vec<Token>` → `Vec<Token>` with `line` resolved where possible
pub struct LocateLines<'a> {
    lines: &'a [String],
}

impl<'a> LocateLines<'a> {
    /// `lines` are the original document's lines, front-matter included.
    pub fn new(lines: &'a [String]) -> Self {
        LocateLines { lines }
    }
}

impl Runnable<Vec<Token>, Vec<Token>> for LocateLines<'_> {
    fn run(&self, mut tokens: Vec<Token>) -> Result<Vec<Token>, TransformError> {
        let mut cursor = 0usize;
        for token in tokens.iter_mut() {
            if token.text.trim().is_empty() {
                token.line = LineRef::Unresolved;
                continue;
            }
            let target = normalize::token_target(token.kind, &token.text);
            let hit = self
                .lines
                .iter()
                .enumerate()
                .skip(cursor)
                .find(|(_, line)| normalize::line_probe(token.kind, line.trim()) == target)
                .map(|(ix, _)| ix);
            match hit {
                Some(ix) => {
                    token.line = LineRef::Located(ix);
                    cursor = ix + 1;
                }
                None => token.line = LineRef::Unresolved,
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fountain::token::TokenKind;

    fn lines(source: &str) -> Vec<String> {
        source.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_locates_with_markers_still_on_the_source_line() {
        let lines = lines("@BRICK (ON PHONE)\nI hear you.");
        let tokens = vec![
            Token::new(TokenKind::Character, "BRICK"),
            Token::new(TokenKind::Dialogue, "I hear you."),
        ];
        let out = LocateLines::new(&lines).run(tokens).unwrap();
        assert_eq!(out[0].line, LineRef::Located(0));
        assert_eq!(out[1].line, LineRef::Located(1));
    }

    #[test]
    fn test_cursor_disambiguates_repeated_text() {
        let lines = lines("JOHN\nHi.\n\nJOHN\nHi.");
        let tokens = vec![
            Token::new(TokenKind::Character, "JOHN"),
            Token::new(TokenKind::Dialogue, "Hi."),
            Token::new(TokenKind::Character, "JOHN"),
            Token::new(TokenKind::Dialogue, "Hi."),
        ];
        let out = LocateLines::new(&lines).run(tokens).unwrap();
        let located: Vec<_> = out.iter().map(|t| t.line.index().unwrap()).collect();
        assert_eq!(located, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_miss_leaves_cursor_for_the_next_token() {
        let lines = lines("INT. X - DAY\nShe waits.");
        let tokens = vec![
            Token::new(TokenKind::Action, "no such line"),
            Token::new(TokenKind::SceneHeading, "INT. X - DAY"),
        ];
        let out = LocateLines::new(&lines).run(tokens).unwrap();
        assert_eq!(out[0].line, LineRef::Unresolved);
        // the failed scan did not advance the cursor past line 0
        assert_eq!(out[1].line, LineRef::Located(0));
    }

    #[test]
    fn test_blank_text_is_unresolved_without_scanning() {
        let lines = lines("   \nreal line");
        let tokens = vec![Token::new(TokenKind::Action, "  ")];
        let out = LocateLines::new(&lines).run(tokens).unwrap();
        assert_eq!(out[0].line, LineRef::Unresolved);
    }

    #[test]
    fn test_title_page_probe_skips_the_key_label() {
        let lines = lines("Title: BRICK & STEEL\nCredit: Written by");
        let tokens = vec![
            Token::new(TokenKind::Title, "BRICK & STEEL"),
            Token::new(TokenKind::Credit, "Written by"),
        ];
        let out = LocateLines::new(&lines).run(tokens).unwrap();
        assert_eq!(out[0].line, LineRef::Located(0));
        assert_eq!(out[1].line, LineRef::Located(1));
    }
}
