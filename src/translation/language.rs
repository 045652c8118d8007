//! Language code validation and supported languages.

use anyhow::Result;
use std::collections::BTreeMap;

use crate::ui::Style;

/// Base language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Additional codes layered over the base table at start-up.
pub const EXTENDED_LANGUAGES: &[(&str, &str)] = &[
    ("ak", "Twi"),
    ("as", "Assamese"),
    ("ay", "Aymara"),
    ("bho", "Bhojpuri"),
    ("bm", "Bambara"),
    ("ceb", "Cebuano"),
    ("ckb", "Kurdish (Sorani)"),
    ("co", "Corsican"),
    ("doi", "Dogri"),
    ("dv", "Dhivehi"),
    ("ee", "Ewe"),
    ("eo", "Esperanto"),
    ("fy", "Frisian"),
    ("gd", "Scots Gaelic"),
    ("gn", "Guarani"),
    ("gom", "Konkani"),
    ("ha", "Hausa"),
    ("haw", "Hawaiian"),
    ("hmn", "Hmong"),
    ("ht", "Haitian Creole"),
    ("ig", "Igbo"),
    ("ilo", "Ilocano"),
    ("jw", "Javanese"),
    ("kri", "Krio"),
    ("ku", "Kurdish (Kurmanji)"),
    ("ky", "Kyrgyz"),
    ("lb", "Luxembourgish"),
    ("lg", "Luganda"),
    ("ln", "Lingala"),
    ("lus", "Mizo"),
    ("mai", "Maithili"),
    ("mg", "Malagasy"),
    ("mi", "Maori"),
    ("mni-Mtei", "Meiteilon (Manipuri)"),
    ("ny", "Chichewa"),
    ("om", "Oromo"),
    ("or", "Odia (Oriya)"),
    ("qu", "Quechua"),
    ("rw", "Kinyarwanda"),
    ("sa", "Sanskrit"),
    ("sd", "Sindhi"),
    ("sm", "Samoan"),
    ("sn", "Shona"),
    ("so", "Somali"),
    ("st", "Sesotho"),
    ("su", "Sundanese"),
    ("tg", "Tajik"),
    ("ti", "Tigrinya"),
    ("tk", "Turkmen"),
    ("ts", "Tsonga"),
    ("tt", "Tatar"),
    ("ug", "Uyghur"),
    ("xh", "Xhosa"),
    ("yi", "Yiddish"),
    ("yo", "Yoruba"),
    ("zu", "Zulu"),
];

/// Indian languages highlighted by `mixtl languages`.
pub const INDIAN_LANGUAGES: &[&str] = &[
    "hi", "mr", "kn", "ta", "te", "gu", "bn", "pa", "ml", "or", "as",
];

/// Immutable code-to-name table.
///
/// Built once at start-up and shared by reference with every component
/// that resolves or validates codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    names: BTreeMap<String, String>,
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::from_pairs(SUPPORTED_LANGUAGES.iter().chain(EXTENDED_LANGUAGES))
    }
}

impl LanguageTable {
    fn from_pairs<'a>(pairs: impl IntoIterator<Item = &'a (&'a str, &'a str)>) -> Self {
        Self {
            names: pairs
                .into_iter()
                .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
                .collect(),
        }
    }

    /// Returns the default table extended with `extra` entries.
    ///
    /// Extra entries replace the name of an existing code.
    #[must_use]
    pub fn with_extra<I, K, V>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.names
            .extend(extra.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Returns the display name of `code`, or the code itself if unknown.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.name(code).unwrap_or(code)
    }

    /// Resolves a code or a language name, case-insensitively, to a known code.
    pub fn resolve(&self, code_or_name: &str) -> Option<&str> {
        let needle = code_or_name.trim();
        self.names
            .iter()
            .find(|(code, name)| code.eq_ignore_ascii_case(needle) || name.eq_ignore_ascii_case(needle))
            .map(|(code, _)| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(code, name)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    /// Validates that the given language code is supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the language code is not in the table.
    pub fn validate(&self, lang: &str) -> Result<()> {
        if self.contains(lang) {
            Ok(())
        } else {
            anyhow::bail!(
                "Invalid language code: '{lang}'\n\n\
                 Valid language codes: hi, en, mr, kn, ta, te, es, fr, ...\n\
                 Run 'mixtl languages' to see all supported codes."
            )
        }
    }
}

/// Prints the language table to stdout.
///
/// With `indian_only`, prints just the highlighted Indian languages.
pub fn print_languages(table: &LanguageTable, indian_only: bool) {
    println!("{}", Style::header("Indian languages"));
    for code in INDIAN_LANGUAGES {
        println!(
            "  {:8} {}",
            Style::code(code),
            Style::secondary(table.display_name(code))
        );
    }
    if indian_only {
        return;
    }

    println!();
    println!(
        "{}",
        Style::header(format!("All supported languages ({} total)", table.len()))
    );
    for (code, name) in table.iter() {
        println!("  {:8} {}", Style::code(code), Style::secondary(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        let table = LanguageTable::default();
        assert!(table.validate("hi").is_ok());
        assert!(table.validate("en").is_ok());
        assert!(table.validate("zh-TW").is_ok());
        assert!(table.validate("mni-Mtei").is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        let table = LanguageTable::default();
        assert!(table.validate("invalid").is_err());
        assert!(table.validate("").is_err());
        assert!(table.validate("HI").is_err()); // Case sensitive
    }

    #[test]
    fn test_default_includes_extended_codes() {
        let table = LanguageTable::default();
        assert_eq!(
            table.len(),
            SUPPORTED_LANGUAGES.len() + EXTENDED_LANGUAGES.len()
        );
        assert_eq!(table.name("sa"), Some("Sanskrit"));
        assert_eq!(table.name("or"), Some("Odia (Oriya)"));
    }

    #[test]
    fn test_with_extra_adds_and_overrides() {
        let table = LanguageTable::default().with_extra([("xx", "Test"), ("hi", "Hindi (India)")]);
        assert_eq!(table.name("xx"), Some("Test"));
        assert_eq!(table.name("hi"), Some("Hindi (India)"));
    }

    #[test]
    fn test_display_name_falls_back_to_code() {
        let table = LanguageTable::default();
        assert_eq!(table.display_name("kn"), "Kannada");
        assert_eq!(table.display_name("qq"), "qq");
    }

    #[test]
    fn test_resolve_code_or_name() {
        let table = LanguageTable::default();
        assert_eq!(table.resolve("Hindi"), Some("hi"));
        assert_eq!(table.resolve(" MR "), Some("mr"));
        assert_eq!(table.resolve("zh-tw"), Some("zh-TW"));
        assert_eq!(table.resolve("Klingon"), None);
    }
}
