//! Static word lists used to recognise romanized languages.
//!
//! Each table is an ordered list of `(code, vocabulary)` pairs. The order is
//! part of the contract: it breaks ties in [`PatternTable::vote`] and picks the
//! winner in [`PatternTable::first_match`] when a token belongs to several
//! languages (e.g. `"hai"` is both Hindi and Punjabi).

/// Characters stripped from both ends of a word before lookup.
const WORD_PUNCTUATION: &[char] = &['.', ',', '!', '?', '-'];

/// An ordered mapping from language code to a fixed vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct PatternTable {
    entries: &'static [(&'static str, &'static [&'static str])],
}

/// Outcome of counting known words per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordVote {
    /// Language with the most matching words, if any word matched.
    pub best: Option<&'static str>,
    /// Number of words that matched `best`.
    pub count: usize,
    /// Set when the whole input is one word found in exactly one table.
    pub exact: Option<&'static str>,
}

impl WordVote {
    /// A single matching word is a weak hint rather than a decision.
    pub const fn hint(&self) -> Option<&'static str> {
        if self.count == 1 { self.best } else { None }
    }
}

impl PatternTable {
    pub const fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { entries }
    }

    /// Language codes in table order.
    pub fn languages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    /// Returns the first language (in table order) whose vocabulary has `token`.
    ///
    /// `token` must already be normalized with [`normalize_word`].
    pub fn first_match(&self, token: &str) -> Option<&'static str> {
        self.matches(token).next()
    }

    /// Returns every language whose vocabulary has `token`, in table order.
    pub fn matches<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.entries
            .iter()
            .filter(move |(_, vocab)| vocab.contains(&token))
            .map(|(code, _)| *code)
    }

    /// Counts, per language, how many words of `text` are in its vocabulary.
    ///
    /// The highest count wins; on a tie the language listed first keeps the
    /// lead. `exact` is only set when the trimmed, lowercased input is a
    /// single word that appears verbatim in exactly one vocabulary.
    pub fn vote(&self, text: &str) -> WordVote {
        let lowered = text.trim().to_lowercase();
        let words: Vec<&str> = lowered
            .split_whitespace()
            .map(normalize_word)
            .filter(|w| !w.is_empty())
            .collect();

        let mut vote = WordVote::default();
        for (code, vocab) in self.entries {
            let count = words.iter().filter(|w| vocab.contains(*w)).count();
            if count > vote.count {
                vote.count = count;
                vote.best = Some(*code);
            }
        }

        if !lowered.is_empty() && !lowered.contains(char::is_whitespace) {
            let mut owners = self.matches(&lowered);
            if let (Some(code), None) = (owners.next(), owners.next()) {
                vote.exact = Some(code);
            }
        }

        vote
    }
}

/// Strips surrounding punctuation from a word.
///
/// Lowercasing is left to the caller so borrowed slices can be returned.
pub fn normalize_word(word: &str) -> &str {
    word.trim_matches(WORD_PUNCTUATION)
}

/// Vocabulary used by the single-language detector's word vote.
///
/// Order: `en, es, fr, de, hi, gu, mr, pa, kn, ta, te`.
pub static VOTE_TABLE: PatternTable = PatternTable::new(&[
    (
        "en",
        &[
            "hello", "world", "the", "is", "are", "how", "what", "where", "when", "you", "your",
            "good", "morning", "and", "like", "this", "that", "have", "has", "with", "from",
        ],
    ),
    (
        "es",
        &[
            "hola", "mundo", "como", "que", "donde", "cuando", "el", "la", "los", "las",
        ],
    ),
    (
        "fr",
        &[
            "bonjour", "monde", "comment", "que", "où", "quand", "le", "la", "les",
        ],
    ),
    (
        "de",
        &["hallo", "welt", "wie", "was", "wo", "wann", "der", "die", "das"],
    ),
    (
        "hi",
        &[
            "namaste", "namaskar", "kaise", "kya", "kahan", "kab", "aap", "tum", "mai", "mera",
            "tera", "theek", "hun", "ek", "hai", "hain", "ko", "ka", "ki", "ke", "se", "me", "par",
            "aur", "ya", "jisme", "karta", "kaun", "bol", "raha", "rahe", "rahi", "andar", "bahar",
        ],
    ),
    (
        "gu",
        &["khem", "cho", "majama", "su", "chhe", "tamara", "mara"],
    ),
    ("mr", &["kasa", "kay", "kuthe", "kevha", "tumcha", "maza"]),
    (
        "pa",
        &["tuhada", "ki", "haal", "hai", "kiddan", "sat", "sri", "akal"],
    ),
    (
        "kn",
        &[
            "idu", "ide", "tumba", "ge", "alli", "illi", "yava", "yaake", "hege", "ella", "nim",
            "nanna",
        ],
    ),
    (
        "ta",
        &[
            "idu", "enna", "epdi", "enge", "yaar", "naan", "nee", "avan", "aval",
        ],
    ),
    (
        "te",
        &[
            "idi", "emi", "ela", "ekkada", "evaru", "nenu", "nuvvu", "atanu", "aame",
        ],
    ),
]);

/// Word-level vocabulary for mixed-language detection and segmentation.
///
/// Order: `hi, kn, en, gu, mr, pa, ta, te`.
pub static WORD_TABLE: PatternTable = PatternTable::new(&[
    (
        "hi",
        &[
            "ek", "hai", "hain", "ko", "ka", "ki", "ke", "se", "me", "par", "aur", "ya", "jisme",
            "karta", "kaun", "bol", "raha", "rahe", "rahi", "andar", "bahar", "kya", "kab",
            "kaise", "bhi", "toh", "magar", "lekin", "namaste", "namaskar", "aap", "tum", "mai",
            "mera", "tera", "theek", "hun",
        ],
    ),
    (
        "kn",
        &[
            "idu", "ide", "tumba", "ge", "alli", "illi", "yava", "yaake", "hege", "ella", "nim",
            "nanna", "beku", "maadi",
        ],
    ),
    (
        "en",
        &[
            "speaker",
            "diarization",
            "process",
            "system",
            "different",
            "speakers",
            "separate",
            "audio",
            "real-time",
            "applications",
            "meetings",
            "useful",
            "like",
            "and",
            "is",
            "the",
            "for",
            "to",
            "in",
            "of",
            "hello",
            "world",
            "how",
            "what",
            "where",
            "when",
        ],
    ),
    (
        "gu",
        &["khem", "cho", "majama", "su", "chhe", "tamara", "mara"],
    ),
    ("mr", &["kasa", "kay", "kuthe", "kevha", "tumcha", "maza"]),
    (
        "pa",
        &["tuhada", "ki", "haal", "hai", "kiddan", "sat", "sri", "akal"],
    ),
    (
        "ta",
        &[
            "idu", "enna", "epdi", "enge", "yaar", "naan", "nee", "avan", "aval",
        ],
    ),
    (
        "te",
        &[
            "idi", "emi", "ela", "ekkada", "evaru", "nenu", "nuvvu", "atanu", "aame",
        ],
    ),
]);
