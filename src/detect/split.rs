//! Delimiter-preserving text splitting.

use std::sync::LazyLock;

use regex::Regex;

/// Sentence terminators, including the ideographic full stop.
#[allow(clippy::expect_used)]
pub static SENTENCE_TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?。;]+").expect("sentence pattern is a valid regex"));

/// Clause delimiters used for per-part detection and translation.
#[allow(clippy::expect_used)]
pub static CLAUSE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,.!?;]+").expect("clause pattern is a valid regex"));

/// A piece of split text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Text between delimiters, whitespace untouched.
    Text(&'a str),
    /// A run of delimiter characters.
    Delimiter(&'a str),
}

impl<'a> Piece<'a> {
    pub const fn as_str(&self) -> &'a str {
        match *self {
            Self::Text(s) | Self::Delimiter(s) => s,
        }
    }

    /// Returns the text if this piece has something worth translating.
    pub fn content(&self) -> Option<&'a str> {
        match *self {
            Self::Text(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

/// Splits `text` on `pattern`, keeping every delimiter run as its own piece.
///
/// Concatenating the pieces in order reproduces `text` exactly.
pub fn split_keeping<'a>(text: &'a str, pattern: &Regex) -> Vec<Piece<'a>> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for m in pattern.find_iter(text) {
        if m.start() > last {
            pieces.push(Piece::Text(&text[last..m.start()]));
        }
        pieces.push(Piece::Delimiter(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        pieces.push(Piece::Text(&text[last..]));
    }

    pieces
}

/// Splits a part into `(leading whitespace, trimmed core, trailing whitespace)`.
pub fn split_padding(part: &str) -> (&str, &str, &str) {
    let start = part.len() - part.trim_start().len();
    let end = part.trim_end().len().max(start);
    (&part[..start], &part[start..end], &part[end..])
}
