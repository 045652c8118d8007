//! Script classification for romanized versus native-script text.

/// Punctuation that may appear in otherwise romanized text.
const ROMAN_PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', '-'];

/// Returns `true` if the text is written entirely in ASCII.
///
/// Whitespace and the punctuation set `,.!?;-` are also accepted. Any
/// character at or above code point 128 makes the text non-romanized.
pub fn is_romanized(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii() || c.is_whitespace() || ROMAN_PUNCTUATION.contains(&c))
}

/// Returns `true` if any alphabetic character lies outside ASCII.
///
/// Non-alphabetic symbols (curly quotes, emoji, etc.) are ignored, so
/// `"“hello”"` is not treated as native script.
pub fn has_native_script(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic() && !c.is_ascii())
}

/// Returns `true` if every character is ASCII or whitespace.
pub fn is_latin(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii() || c.is_whitespace())
}
