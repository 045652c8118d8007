//! Splits text into contiguous runs of words sharing one inferred language.

use std::str::SplitWhitespace;

use serde::Serialize;

use super::patterns::{PatternTable, WORD_TABLE, normalize_word};

/// Language assumed before any word has been recognised.
const INITIAL_LANGUAGE: &str = "en";

/// A maximal run of words tagged with the same language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The words of the run joined with single spaces.
    pub text: String,
    /// Language code of the run.
    pub lang: &'static str,
}

/// Lazily yields [`Segment`]s of a text, in order.
///
/// Words that are not purely alphabetic, or that no table recognises, take
/// the language of the segment they follow.
pub struct Segments<'a> {
    words: SplitWhitespace<'a>,
    table: &'a PatternTable,
    current_lang: &'static str,
    current: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str, table: &'a PatternTable) -> Self {
        Self {
            words: text.split_whitespace(),
            table,
            current_lang: INITIAL_LANGUAGE,
            current: Vec::new(),
        }
    }

    fn classify(&self, word: &str) -> &'static str {
        let token = normalize_word(word).to_lowercase();
        if token.is_empty() || !token.chars().all(char::is_alphabetic) {
            return self.current_lang;
        }
        self.table
            .first_match(&token)
            .unwrap_or(self.current_lang)
    }

    fn close(&mut self) -> Option<Segment> {
        if self.current.is_empty() {
            return None;
        }
        let text = self.current.join(" ");
        self.current.clear();
        Some(Segment {
            text,
            lang: self.current_lang,
        })
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        while let Some(word) = self.words.next() {
            let lang = self.classify(word);
            if lang == self.current_lang {
                self.current.push(word);
                continue;
            }

            let closed = self.close();
            self.current_lang = lang;
            self.current.push(word);
            if closed.is_some() {
                return closed;
            }
        }
        self.close()
    }
}

/// Segments `text` using the word-level pattern table.
pub fn segment(text: &str) -> Segments<'_> {
    Segments::new(text, &WORD_TABLE)
}
