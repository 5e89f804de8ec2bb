//! Coarse block-level Fountain tokenizer
//!
//! This is the base grammar the repair pipeline builds on. It works on the
//! document body (front-matter removed, boneyard comments stripped), splits
//! it into blocks on blank lines, and classifies each block with the
//! ordered patterns in [patterns]. Its output is a raw token stream with no
//! line information; multi-line blocks keep their embedded `\n` breaks for
//! the splitter stage.
//!
//! The grammar is intentionally coarse. Forced markers (`@`, `~`, `>`,
//! `>...<`), dual-dialogue carets, and character extensions are left in the
//! text unclassified; the reclassification stage repairs them. Keeping the
//! base grammar dumb keeps every disambiguation rule in one place.

mod patterns;

use std::borrow::Cow;
use std::fmt;

use crate::fountain::token::TokenKind;

/// A coarse token: a kind and the block text that produced it. Sections
/// also carry their nesting depth.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken {
    pub kind: TokenKind,
    pub text: String,
    pub depth: Option<usize>,
}

impl RawToken {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        RawToken {
            kind,
            text: text.into(),
            depth: None,
        }
    }
}

/// Hard failures of the base grammar. Everything else degrades to an
/// `action` token instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A `/*` comment with no closing `*/` before end of document.
    UnterminatedBoneyard,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::UnterminatedBoneyard => {
                write!(f, "unterminated boneyard comment: missing closing */")
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// Tokenize a full document into the coarse token stream.
///
/// The input is the ORIGINAL document text; front-matter is dropped here by
/// byte range so callers keep a single entry point.
pub fn tokenize(source: &str) -> Result<Vec<RawToken>, GrammarError> {
    let source = source.replace("\r\n", "\n").replace('\r', "\n");
    let body = strip_front_matter(&source);
    let body = strip_boneyard(&body)?;

    let mut tokens = Vec::new();
    for (ix, block) in patterns::BLOCK_SPLIT.split(&body).enumerate() {
        if block.trim().is_empty() {
            continue;
        }
        if ix == 0 && is_title_page_block(block) {
            tokenize_title_page(block, &mut tokens);
            continue;
        }
        tokenize_block(block, &mut tokens);
    }
    Ok(tokens)
}

/// Remove a leading `---` ... `---` block. The content is never parsed.
pub fn strip_front_matter(source: &str) -> Cow<'_, str> {
    patterns::FRONT_MATTER.replace(source, "")
}

fn strip_boneyard(body: &str) -> Result<String, GrammarError> {
    let cleaned = patterns::BONEYARD.replace_all(body, "");
    if cleaned.contains("/*") {
        return Err(GrammarError::UnterminatedBoneyard);
    }
    Ok(cleaned.into_owned())
}

fn is_title_page_block(block: &str) -> bool {
    block
        .lines()
        .next()
        .is_some_and(|first| patterns::TITLE_KEY.is_match(first.trim()))
}

/// Parse a `Key: value` block. Indented lines continue the previous key;
/// multi-line values are joined with `\n` and pulled apart again by the
/// splitter stage.
fn tokenize_title_page(block: &str, tokens: &mut Vec<RawToken>) {
    let mut current: Option<(TokenKind, Vec<String>)> = None;
    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match patterns::TITLE_KEY.captures(line) {
            Some(caps) => {
                flush_title_entry(&mut current, tokens);
                let kind = title_page_kind(&caps[1]);
                current = Some((kind, vec![caps[2].trim().to_string()]));
            }
            None => {
                if let Some((_, pieces)) = current.as_mut() {
                    pieces.push(line.to_string());
                }
            }
        }
    }
    flush_title_entry(&mut current, tokens);
}

fn flush_title_entry(current: &mut Option<(TokenKind, Vec<String>)>, tokens: &mut Vec<RawToken>) {
    if let Some((kind, pieces)) = current.take() {
        tokens.push(RawToken::new(kind, pieces.join("\n")));
    }
}

/// Fold key aliases: `authors` → author, `date`/`draft date` → draft_date.
fn title_page_kind(key: &str) -> TokenKind {
    let key = key.to_ascii_lowercase().replace([' ', '_'], "");
    match key.as_str() {
        "title" => TokenKind::Title,
        "credit" => TokenKind::Credit,
        "author" | "authors" => TokenKind::Author,
        "source" => TokenKind::Source,
        "draftdate" | "date" => TokenKind::DraftDate,
        "contact" => TokenKind::Contact,
        _ => TokenKind::Unknown,
    }
}

fn tokenize_block(block: &str, tokens: &mut Vec<RawToken>) {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return;
    }

    if is_scene_heading(lines[0]) {
        tokens.push(RawToken::new(TokenKind::SceneHeading, scene_heading_text(lines[0])));
        // lines crammed under a heading without a separating blank are action
        if lines.len() > 1 {
            tokens.push(RawToken::new(TokenKind::Action, lines[1..].join("\n")));
        }
        return;
    }

    if lines.len() == 1 {
        let line = lines[0];

        if patterns::TRANSITION.is_match(line) {
            tokens.push(RawToken::new(TokenKind::Transition, line));
            return;
        }
        if let Some(caps) = patterns::SECTION.captures(line) {
            let mut token = RawToken::new(TokenKind::Section, caps[2].trim());
            token.depth = Some(caps[1].len());
            tokens.push(token);
            return;
        }
        if let Some(text) = synopsis_text(line) {
            tokens.push(RawToken::new(TokenKind::Synopsis, text));
            return;
        }
    }

    if let Some(caps) = patterns::NOTE_BLOCK.captures(block.trim()) {
        tokens.push(RawToken::new(TokenKind::Note, caps[1].trim()));
        return;
    }

    if lines.len() >= 2 && patterns::CHARACTER_CUE.is_match(lines[0]) {
        tokenize_dialogue_block(&lines, tokens);
        return;
    }

    tokens.push(RawToken::new(TokenKind::Action, lines.join("\n")));
}

/// A heading is the INT/EXT family, or a forced leading `.` (but `..` is
/// not a forced heading).
fn is_scene_heading(line: &str) -> bool {
    if patterns::SCENE_HEADING.is_match(line) {
        return true;
    }
    line.starts_with('.') && !line.starts_with("..") && line.len() > 1
}

fn scene_heading_text(line: &str) -> String {
    let line = line.strip_prefix('.').unwrap_or(line);
    patterns::SCENE_NUMBER.replace(line, "").trim().to_string()
}

fn synopsis_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('=')?;
    if rest.starts_with('=') {
        // `==` page breaks and longer runs are not synopses
        return None;
    }
    Some(rest.trim_start())
}

/// Cue line first, then the body: `(...)` lines become parentheticals, and
/// runs of other lines are joined into dialogue tokens.
fn tokenize_dialogue_block(lines: &[&str], tokens: &mut Vec<RawToken>) {
    tokens.push(RawToken::new(TokenKind::Character, lines[0]));

    let mut run: Vec<&str> = Vec::new();
    for line in &lines[1..] {
        if line.starts_with('(') && line.ends_with(')') {
            flush_dialogue_run(&mut run, tokens);
            tokens.push(RawToken::new(TokenKind::Parenthetical, *line));
        } else {
            run.push(line);
        }
    }
    flush_dialogue_run(&mut run, tokens);
}

fn flush_dialogue_run(run: &mut Vec<&str>, tokens: &mut Vec<RawToken>) {
    if !run.is_empty() {
        tokens.push(RawToken::new(TokenKind::Dialogue, run.join("\n")));
        run.clear();
    }
}
