mod detector;
mod patterns;
mod script;
mod segment;
mod split;

pub use detector::{
    DetectError, DetectedLanguage, DetectionResult, FALSE_POSITIVE_LANGUAGES, LanguageDetector,
    correct_detection,
};
pub use patterns::{PatternTable, VOTE_TABLE, WORD_TABLE, WordVote, normalize_word};
pub use script::{has_native_script, is_latin, is_romanized};
pub use segment::{Segment, Segments, segment};
pub use split::{CLAUSE_DELIMITERS, Piece, SENTENCE_TERMINATORS, split_keeping, split_padding};
