//! Stable scope identifiers for downstream consumers
//!
//! An editor decorating lines from the token stream needs a fixed vocabulary
//! that folds the token's variant flags into the identifier: a section's
//! clamped depth, and the dual-dialogue flavor of cues and dialogue.

use super::core::{Token, TokenKind};

/// Identifier for the character-extension annotation, which is styled
/// separately from the cue it is attached to.
pub const EXTENSION_SCOPE: &str = "extension";

impl Token {
    /// The stable scope identifier for this token.
    ///
    /// Sections carry their nesting depth clamped to 1..=6; character and
    /// dialogue tokens inside a dual-dialogue block get a `-dual` variant.
    pub fn scope(&self) -> String {
        match (self.kind, self.depth) {
            (TokenKind::Section, Some(depth)) => {
                format!("section-{}", depth.clamp(1, 6))
            }
            (TokenKind::Character, _) if self.dual => "character-dual".to_string(),
            (TokenKind::Dialogue, _) if self.dual => "dialogue-dual".to_string(),
            (kind, _) => kind.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fountain::token::LineRef;

    #[test]
    fn test_plain_kinds_use_their_wire_name() {
        assert_eq!(Token::new(TokenKind::SceneHeading, "INT. X").scope(), "scene_heading");
        assert_eq!(Token::new(TokenKind::Synopsis, "beat").scope(), "synopsis");
        assert_eq!(Token::new(TokenKind::DraftDate, "1/1/99").scope(), "draft_date");
    }

    #[test]
    fn test_section_depth_is_clamped() {
        let mut token = Token::new(TokenKind::Section, "Act");
        token.depth = Some(3);
        assert_eq!(token.scope(), "section-3");
        token.depth = Some(9);
        assert_eq!(token.scope(), "section-6");
        token.depth = None;
        assert_eq!(token.scope(), "section");
    }

    #[test]
    fn test_dual_variants() {
        let mut cue = Token::new(TokenKind::Character, "JOHN");
        cue.line = LineRef::Located(0);
        cue.dual = true;
        assert_eq!(cue.scope(), "character-dual");

        let mut speech = Token::new(TokenKind::Dialogue, "Wait!");
        speech.dual = true;
        assert_eq!(speech.scope(), "dialogue-dual");

        // dual is ignored on kinds without a dual variant
        let mut paren = Token::new(TokenKind::Parenthetical, "(softly)");
        paren.dual = true;
        assert_eq!(paren.scope(), "parenthetical");
    }
}
