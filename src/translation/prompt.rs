pub const TRANSLATION_PROMPT_TEMPLATE: &str = "You are a translator. Translate the following text {source_clause}to {target_language}. \
     The text may mix languages and scripts; translate every part of it. \
     Output only the translated text without any explanations. \
     Preserve the original formatting including blank lines and whitespace.";

pub const DETECTION_PROMPT: &str = "Identify the language of the following text. \
     Reply with only its ISO 639-1 language code (for example: en, hi, fr) and nothing else.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_translation_prompt(source_language: Option<&str>, target_language: &str) -> String {
    // {source_clause} and {target_language} are placeholders for string replacement, not format arguments
    let source_clause = source_language.map_or_else(String::new, |name| format!("from {name} "));
    TRANSLATION_PROMPT_TEMPLATE
        .replace("{source_clause}", &source_clause)
        .replace("{target_language}", target_language)
}
