//! Token and token-kind definitions
//!
//! A [Token] is the unit the pipeline emits and progressively refines. Each
//! stage produces a new token value; nothing here is shared across pipeline
//! runs. The wire encoding (serde) matches the boundary contract: `line` is
//! the 0-based source line index or `-1` when unresolved, and the optional
//! fields (`depth`, `dual`, `extension`) are omitted when absent.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// The closed set of token kinds the pipeline can emit.
///
/// `Unknown` is never produced by the grammar; it exists as the
/// deserialization fallback for kinds outside this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    SceneHeading,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Action,
    Lyric,
    Section,
    Synopsis,
    Note,
    Centered,
    Title,
    Credit,
    Author,
    Source,
    DraftDate,
    Contact,
    #[serde(other)]
    Unknown,
}

impl TokenKind {
    /// Stable identifier for this kind, matching the wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::SceneHeading => "scene_heading",
            TokenKind::Character => "character",
            TokenKind::Dialogue => "dialogue",
            TokenKind::Parenthetical => "parenthetical",
            TokenKind::Transition => "transition",
            TokenKind::Action => "action",
            TokenKind::Lyric => "lyric",
            TokenKind::Section => "section",
            TokenKind::Synopsis => "synopsis",
            TokenKind::Note => "note",
            TokenKind::Centered => "centered",
            TokenKind::Title => "title",
            TokenKind::Credit => "credit",
            TokenKind::Author => "author",
            TokenKind::Source => "source",
            TokenKind::DraftDate => "draft_date",
            TokenKind::Contact => "contact",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Whether this kind is one of the document-metadata title-page fields.
    pub fn is_title_page(self) -> bool {
        matches!(
            self,
            TokenKind::Title
                | TokenKind::Credit
                | TokenKind::Author
                | TokenKind::Source
                | TokenKind::DraftDate
                | TokenKind::Contact
        )
    }

    /// Whether a token of this kind terminates a dialogue block during
    /// promotion.
    pub fn ends_dialogue_block(self) -> bool {
        matches!(
            self,
            TokenKind::Character
                | TokenKind::SceneHeading
                | TokenKind::Section
                | TokenKind::Transition
                | TokenKind::Lyric
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved source line, or the explicit "no matching line" state.
///
/// The locator leaves a token `Unresolved` when no source line normalizes to
/// the token's text; downstream stages must tolerate it. On the wire this is
/// encoded as the 0-based line index, or `-1` for `Unresolved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRef {
    Located(usize),
    Unresolved,
}

impl LineRef {
    /// The resolved line index, if any.
    pub fn index(self) -> Option<usize> {
        match self {
            LineRef::Located(ix) => Some(ix),
            LineRef::Unresolved => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, LineRef::Located(_))
    }
}

impl Serialize for LineRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LineRef::Located(ix) => serializer.serialize_i64(*ix as i64),
            LineRef::Unresolved => serializer.serialize_i64(-1),
        }
    }
}

impl<'de> Deserialize<'de> for LineRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        if raw < 0 {
            Ok(LineRef::Unresolved)
        } else {
            Ok(LineRef::Located(raw as usize))
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One corrected token.
///
/// `text` is the display text with kind-specific markers already removed by
/// the reclassifier; it keeps its natural case. Upper-casing happens only
/// inside the comparison normalizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: LineRef,

    /// Heading nesting level; only meaningful for `Section` tokens.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub depth: Option<usize>,

    /// Set on tokens that belong to a dual-dialogue block.
    #[serde(skip_serializing_if = "is_false", default)]
    pub dual: bool,

    /// A character cue's parenthetical extension, kept separate from `text`
    /// so a consumer can style it independently.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extension: Option<String>,
}

impl Token {
    /// A fresh, not-yet-located token of the given kind.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
            line: LineRef::Unresolved,
            depth: None,
            dual: false,
            extension: None,
        }
    }
}
