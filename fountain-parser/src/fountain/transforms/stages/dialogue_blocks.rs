//! Dialogue block promotion stage
//!
//! The base grammar only recognizes dialogue inside a well-formed block.
//! After splitting, reclassification and line location, speech that arrived
//! as action (forced `@` cues, odd indentation) is still mis-typed. This
//! second pass walks forward from every character cue and absorbs the
//! contiguous run that follows: `(...)` lines become parentheticals,
//! everything else becomes dialogue, and the cue's dual flag propagates
//! through the block.
//!
//! A run ends at a block-terminating token kind or at a blank source line.
//! Tokens with an unresolved line neither extend nor break the run.

use crate::fountain::token::{LineRef, Token, TokenKind};
use crate::fountain::transforms::{Runnable, TransformError};

/// Dialogue block promotion stage
///
/// # Input / Output
/// - `Vec<Token>` → `Vec<Token>` with dialogue blocks re-typed
pub struct PromoteDialogue<'a> {
    lines: &'a [String],
}

impl<'a> PromoteDialogue<'a> {
    /// `lines` are the original document's lines, same slice the locator saw.
    pub fn new(lines: &'a [String]) -> Self {
        PromoteDialogue { lines }
    }

    /// True if any line strictly between `from` and `to` (exclusive) is
    /// blank. An unresolved `from` widens the window to the document start.
    fn blank_between(&self, from: Option<usize>, to: usize) -> bool {
        let start = from.map(|ix| ix + 1).unwrap_or(0);
        (start..to).any(|ix| {
            self.lines
                .get(ix)
                .is_some_and(|line| line.trim().is_empty())
        })
    }
}

impl Runnable<Vec<Token>, Vec<Token>> for PromoteDialogue<'_> {
    fn run(&self, mut tokens: Vec<Token>) -> Result<Vec<Token>, TransformError> {
        for cue_ix in 0..tokens.len() {
            if tokens[cue_ix].kind != TokenKind::Character {
                continue;
            }
            let dual = tokens[cue_ix].dual;
            let mut prev = tokens[cue_ix].line.index();
            let mut ix = cue_ix + 1;

            // a parenthetical directly under the cue opens the block
            if ix < tokens.len() {
                if let LineRef::Located(line) = tokens[ix].line {
                    if tokens[ix].text.trim_start().starts_with('(')
                        && !self.blank_between(prev, line)
                    {
                        tokens[ix].kind = TokenKind::Parenthetical;
                        if dual {
                            tokens[ix].dual = true;
                        }
                        prev = Some(line);
                        ix += 1;
                    }
                }
            }

            while ix < tokens.len() {
                let line = match tokens[ix].line {
                    LineRef::Located(line) => line,
                    LineRef::Unresolved => {
                        ix += 1;
                        continue;
                    }
                };
                if tokens[ix].kind.ends_dialogue_block() {
                    break;
                }
                if self.blank_between(prev, line) {
                    break;
                }
                tokens[ix].kind = if tokens[ix].text.trim_start().starts_with('(') {
                    TokenKind::Parenthetical
                } else {
                    TokenKind::Dialogue
                };
                if dual {
                    tokens[ix].dual = true;
                }
                prev = Some(line);
                ix += 1;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str) -> Vec<String> {
        source.lines().map(str::to_string).collect()
    }

    fn located(kind: TokenKind, text: &str, line: usize) -> Token {
        let mut token = Token::new(kind, text);
        token.line = LineRef::Located(line);
        token
    }

    #[test]
    fn test_action_after_cue_becomes_dialogue() {
        let lines = lines("JOHN\nHello there.");
        let tokens = vec![
            located(TokenKind::Character, "JOHN", 0),
            located(TokenKind::Action, "Hello there.", 1),
        ];
        let out = PromoteDialogue::new(&lines).run(tokens).unwrap();
        assert_eq!(out[1].kind, TokenKind::Dialogue);
    }

    #[test]
    fn test_blank_line_ends_the_block() {
        let lines = lines("JOHN\nHi.\n\nShe leaves.");
        let tokens = vec![
            located(TokenKind::Character, "JOHN", 0),
            located(TokenKind::Dialogue, "Hi.", 1),
            located(TokenKind::Action, "She leaves.", 3),
        ];
        let out = PromoteDialogue::new(&lines).run(tokens).unwrap();
        assert_eq!(out[1].kind, TokenKind::Dialogue);
        assert_eq!(out[2].kind, TokenKind::Action);
    }

    #[test]
    fn test_parenthetical_under_the_cue() {
        let lines = lines("JOHN\n(beat)\nHello.");
        let tokens = vec![
            located(TokenKind::Character, "JOHN", 0),
            located(TokenKind::Action, "(beat)", 1),
            located(TokenKind::Action, "Hello.", 2),
        ];
        let out = PromoteDialogue::new(&lines).run(tokens).unwrap();
        assert_eq!(out[1].kind, TokenKind::Parenthetical);
        assert_eq!(out[2].kind, TokenKind::Dialogue);
    }

    #[test]
    fn test_dual_flag_propagates_through_the_block() {
        let lines = lines("MARY^\n(softly)\nNo!");
        let mut cue = located(TokenKind::Character, "MARY", 0);
        cue.dual = true;
        let tokens = vec![
            cue,
            located(TokenKind::Action, "(softly)", 1),
            located(TokenKind::Action, "No!", 2),
        ];
        let out = PromoteDialogue::new(&lines).run(tokens).unwrap();
        assert!(out[1].dual);
        assert!(out[2].dual);
        assert_eq!(out[1].kind, TokenKind::Parenthetical);
        assert_eq!(out[2].kind, TokenKind::Dialogue);
    }

    #[test]
    fn test_terminating_kinds_break_the_block() {
        let lines = lines("JOHN\nHi.\nCUT TO:");
        let tokens = vec![
            located(TokenKind::Character, "JOHN", 0),
            located(TokenKind::Dialogue, "Hi.", 1),
            located(TokenKind::Transition, "CUT TO:", 2),
        ];
        let out = PromoteDialogue::new(&lines).run(tokens).unwrap();
        assert_eq!(out[2].kind, TokenKind::Transition);
    }

    #[test]
    fn test_unresolved_tokens_are_skipped_not_absorbed() {
        let lines = lines("JOHN\nHi.\nBye.");
        let tokens = vec![
            located(TokenKind::Character, "JOHN", 0),
            Token::new(TokenKind::Action, "phantom"),
            located(TokenKind::Action, "Hi.", 1),
        ];
        let out = PromoteDialogue::new(&lines).run(tokens).unwrap();
        // the unresolved token neither breaks the run nor joins it
        assert_eq!(out[1].kind, TokenKind::Action);
        assert_eq!(out[1].line, LineRef::Unresolved);
        assert_eq!(out[2].kind, TokenKind::Dialogue);
    }
}
