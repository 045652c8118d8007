//! # mixtl - Mixed-Language Translation CLI
//!
//! `mixtl` translates text that mixes languages, or that writes Indian
//! languages in Latin script ("Speaker diarization ek process hai"), using
//! an OpenAI-compatible endpoint as the translation backend.
//!
//! ## Features
//!
//! - **Language detection**: word tables first, the backend second, with
//!   corrections for the codes generic detectors report for short Hinglish
//! - **Mixed-language detection**: every language present in a text
//! - **Transliteration**: romanized Indian words converted to native script
//!   before translation
//! - **Strategies**: whole text, sentence by sentence, clause by clause with
//!   transliteration, or smart segmented translation in a single call
//! - **Caching**: SQLite cache of backend answers
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate an argument
//! mixtl --to hi "Speaker diarization ek process hai"
//!
//! # Translate from stdin
//! cat notes.txt | mixtl --to en
//!
//! # Only report the languages
//! mixtl detect "Hello world namaste aap kaise ho"
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/mixtl/config.toml`:
//!
//! ```toml
//! [mixtl]
//! provider = "ollama"
//! model = "gemma3:12b"
//! to = "hi"
//!
//! [providers.ollama]
//! endpoint = "http://localhost:11434"
//! models = ["gemma3:12b"]
//! ```

/// Translation cache management using `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Script classification, word tables, segmentation, and language detection.
pub mod detect;

/// Writing translations to `--output` files.
pub mod fs;

/// Input reading from arguments, files, and stdin.
pub mod input;

/// Diagnostic logging with `tracing`.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Translation backends and strategies.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
