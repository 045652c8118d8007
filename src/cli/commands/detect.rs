//! `mixtl detect`: report the languages in a text without translating it.

use anyhow::{Context, Result, bail};
use serde::Serialize;

use super::build_service;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::detect::{DetectionResult, LanguageDetector, Segment, is_romanized, segment};
use crate::input::InputReader;
use crate::status;
use crate::translation::{OfflineService, TranslationService};
use crate::ui::{Spinner, Style};

pub struct DetectOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub json: bool,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub no_cache: bool,
}

#[derive(Debug, Serialize)]
struct DetectReport<'a> {
    #[serde(flatten)]
    detection: &'a DetectionResult,
    romanized: bool,
    segments: Vec<Segment>,
}

pub async fn run_detect(options: DetectOptions) -> Result<()> {
    let config_file = ConfigManager::new()?.load_or_default()?;

    let text = InputReader::read(options.text.as_deref(), options.file.as_deref())?;
    if text.trim().is_empty() {
        bail!("Input is empty");
    }

    // without a provider, only the word tables are consulted
    let service: Box<dyn TranslationService> =
        if options.provider.is_some() || config_file.mixtl.provider.is_some() {
            let resolve_options = ResolveOptions {
                provider: options.provider.clone(),
                model: options.model.clone(),
                ..ResolveOptions::default()
            };
            let config = resolve_config(&resolve_options, &config_file)?;
            build_service(&config, options.no_cache)
        } else {
            status!(
                "{}",
                Style::hint("No provider configured: detecting from the word tables only")
            );
            Box::new(OfflineService::new(config_file.language_table()))
        };

    let spinner = Spinner::new("Detecting languages...");
    let detection = LanguageDetector::new(service.as_ref())
        .detect_mixed_languages(&text)
        .await;
    spinner.stop();

    let report = DetectReport {
        detection: &detection,
        romanized: is_romanized(&text),
        segments: segment(&text).collect(),
    };

    if options.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &DetectReport<'_>) {
    let detection = report.detection;
    let heading = if detection.is_mixed {
        format!("Mixed languages ({} found)", detection.count)
    } else {
        "Single language".to_string()
    };
    println!("{}", Style::header(heading));

    for lang in &detection.languages {
        println!("  {:8} {}", Style::code(&lang.code), Style::value(&lang.name));
    }

    println!(
        "{} {}",
        Style::label("romanized:"),
        if report.romanized { "yes" } else { "no" }
    );

    if report.segments.len() > 1 {
        println!("{}", Style::header("Segments"));
        for seg in &report.segments {
            println!("  {:8} {}", Style::code(seg.lang), seg.text);
        }
    }
}
