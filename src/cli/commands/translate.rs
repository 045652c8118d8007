use anyhow::{Result, bail};

use super::{build_service, build_transliteration};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::detect::DetectionResult;
use crate::fs::write_output;
use crate::input::InputReader;
use crate::translation::{
    AUTO, INDIAN_LANGUAGES, LanguageCode, LanguageTable, Mode, SmartReason, Strategy,
    TRANSLITERATION_LANGUAGES, TranslationService, Translator, choose_strategy, is_error_result,
};
use crate::ui::{Spinner, Style};
use crate::{status, warn};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub to: Option<String>,
    pub mode: Option<Mode>,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub no_cache: bool,
    pub no_transliteration: bool,
    pub output: Option<String>,
}

/// What a translation run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateOutcome {
    Translated,
    /// The backend failed; the in-band error was reported on stderr.
    Failed,
}

pub async fn run_translate(options: TranslateOptions) -> Result<TranslateOutcome> {
    let config_file = ConfigManager::new()?.load_or_default()?;
    let table = config_file.language_table();

    let resolve_options = ResolveOptions {
        to: options.to.clone(),
        provider: options.provider.clone(),
        model: options.model.clone(),
        mode: options.mode,
        no_transliteration: options.no_transliteration,
    };
    let config = resolve_config(&resolve_options, &config_file)?;
    let dest = config.target_language()?.to_string();
    config.languages.validate(&dest)?;

    let text = InputReader::read(options.text.as_deref(), options.file.as_deref())?;
    if text.trim().is_empty() {
        bail!("Input is empty");
    }

    let transliteration = build_transliteration(&config);
    if !transliteration.is_available() {
        status!(
            "{}",
            Style::hint("Transliteration disabled: romanized text is sent as-is")
        );
    }
    let translator = Translator::new(build_service(&config, options.no_cache), transliteration);

    let spinner = Spinner::new("Detecting languages...");
    let detection = translator.detect_mixed_languages(&text).await;
    spinner.stop();
    report_detection(&detection, &table, &dest);

    let strategy =
        Strategy::from_mode(config.mode).unwrap_or_else(|| choose_strategy(&text, &detection, false));
    announce_strategy(strategy, &detection, &table, &dest);

    let spinner = Spinner::new("Translating...");
    let (result, used_languages) = run_strategy(&translator, strategy, &text, &dest, &detection).await;
    spinner.stop();

    if is_error_result(&result) {
        eprintln!("{}", Style::error(&result));
        return Ok(TranslateOutcome::Failed);
    }

    if let Some(path) = &options.output {
        write_output(path, &result)?;
        status!("Wrote translation to {}", Style::value(path));
    } else {
        println!("{result}");
    }

    let used: Vec<String> = used_languages
        .iter()
        .filter(|code| code.as_str() != AUTO)
        .map(|code| format!("{} ({code})", table.display_name(code)))
        .collect();
    if !used.is_empty() {
        status!("{} {}", Style::label("Source:"), used.join(", "));
    }
    status!(
        "{} {} ({dest})",
        Style::label("Target:"),
        table.display_name(&dest)
    );

    Ok(TranslateOutcome::Translated)
}

async fn run_strategy<S: TranslationService>(
    translator: &Translator<S>,
    strategy: Strategy,
    text: &str,
    dest: &str,
    detection: &DetectionResult,
) -> (String, Vec<LanguageCode>) {
    let detected: Vec<LanguageCode> = detection.codes().map(str::to_string).collect();

    match strategy {
        Strategy::Whole | Strategy::Sentence => {
            let split = strategy == Strategy::Sentence;
            let result = translator.translate(text, dest, AUTO, split).await;
            let source = translator.detect_language(text).await;
            (result, vec![source])
        }
        Strategy::Smart(_) => (translator.translate_smart(text, dest).await, detected),
        Strategy::Transliterate => {
            let seed = detection
                .codes()
                .find(|code| TRANSLITERATION_LANGUAGES.contains(code));
            let mixed = translator
                .translate_with_transliteration(text, dest, seed)
                .await;
            (mixed.text, mixed.languages)
        }
    }
}

fn report_detection(detection: &DetectionResult, table: &LanguageTable, dest: &str) {
    if detection.count == 0 {
        return;
    }

    if detection.is_mixed {
        status!(
            "{}",
            Style::header(format!(
                "Mixed languages detected ({} languages found):",
                detection.count
            ))
        );
        for (i, lang) in detection.languages.iter().enumerate() {
            status!("  {}. {} ({})", i + 1, Style::value(&lang.name), Style::code(&lang.code));
        }
        status!(
            "{}",
            Style::hint(format!("All languages will be translated to {}", table.display_name(dest)))
        );
    } else if let Some(lang) = detection.languages.first() {
        status!(
            "Single language detected: {} ({})",
            Style::value(&lang.name),
            Style::code(&lang.code)
        );
    }
}

fn announce_strategy(
    strategy: Strategy,
    detection: &DetectionResult,
    table: &LanguageTable,
    dest: &str,
) {
    match strategy {
        Strategy::Smart(SmartReason::RomanizedIndian) => {
            let names: Vec<&str> = detection
                .codes()
                .filter(|code| TRANSLITERATION_LANGUAGES.contains(code))
                .map(|code| table.display_name(code))
                .collect();
            status!(
                "Romanized {} detected, using smart segmented translation",
                names.join(", ")
            );
        }
        Strategy::Smart(SmartReason::Mixed) => {
            status!("Mixed languages detected, using smart segmented translation");
        }
        Strategy::Smart(SmartReason::LongRomanized) => {
            status!("Long romanized text, using smart segmented translation");
        }
        Strategy::Smart(SmartReason::Requested) => status!("Using smart segmented translation"),
        Strategy::Transliterate => status!("Transliterating and translating clause by clause"),
        Strategy::Sentence if INDIAN_LANGUAGES.contains(&dest) && !detection.is_mixed => {
            warn!("whole-text mode gives better results for Indian languages");
        }
        Strategy::Sentence | Strategy::Whole => {}
    }
}
