use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{INPUT_TOOLS_ENDPOINT, LanguageTable, Mode};
use crate::ui::Style;

/// Default settings in the `[mixtl]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MixtlConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Default model name.
    pub model: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
    /// Default translation mode.
    pub mode: Option<Mode>,
}

/// Configuration for a translation provider.
///
/// Each provider has an endpoint and optional API key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// List of available models for this provider.
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The `[transliteration]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransliterationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Input Tools endpoint; the public one when unset.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for TransliterationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: None,
        }
    }
}

const fn default_true() -> bool {
    true
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/mixtl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub mixtl: MixtlConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    #[serde(default)]
    pub transliteration: TransliterationConfig,
    /// Extra language codes and names, added to the built-in table.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
}

impl ConfigFile {
    /// The built-in language table extended with the `[languages]` section.
    pub fn language_table(&self) -> LanguageTable {
        LanguageTable::default().with_extra(
            self.languages
                .iter()
                .map(|(code, name)| (code.clone(), name.clone())),
        )
    }

    /// The transliteration endpoint, or `None` when transliteration is off.
    pub fn transliteration_endpoint(&self, disabled_by_cli: bool) -> Option<String> {
        if disabled_by_cli || !self.transliteration.enabled {
            return None;
        }
        Some(
            self.transliteration
                .endpoint
                .clone()
                .unwrap_or_else(|| INPUT_TOOLS_ENDPOINT.to_string()),
        )
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name.
    pub provider_name: String,
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model to use for translation and detection.
    pub model: String,
    /// The API key (if required).
    pub api_key: Option<String>,
    /// The target language code, if one was given anywhere.
    pub target_language: Option<String>,
    pub mode: Mode,
    /// Input Tools endpoint, `None` when transliteration is disabled.
    pub transliteration_endpoint: Option<String>,
    pub languages: LanguageTable,
}

impl ResolvedConfig {
    /// Returns the target language, which translation requires.
    ///
    /// # Errors
    ///
    /// Returns an error naming both ways to supply it when it is missing.
    pub fn target_language(&self) -> Result<&str> {
        self.target_language.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'to' (target language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: mixtl --to <lang>\n  \
                 - Config file: ~/.config/mixtl/config.toml"
            )
        })
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language code override.
    pub to: Option<String>,
    /// Provider name override.
    pub provider: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Translation mode override.
    pub mode: Option<Mode>,
    /// Turns transliteration off regardless of the config file.
    pub no_transliteration: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if the provider or model is missing, if the specified
/// provider is not found, or if its API key is declared but unset.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    // Resolve provider
    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.mixtl.provider.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'provider'\n\n\
                 Please provide it via:\n  \
                 - CLI option: mixtl --provider <name>\n  \
                 - Config file: ~/.config/mixtl/config.toml"
            )
        })?;

    // Get provider config
    let provider_config = config_file.providers.get(&provider_name).ok_or_else(|| {
        let mut available: Vec<_> = config_file.providers.keys().map(String::as_str).collect();
        available.sort_unstable();
        if available.is_empty() {
            anyhow::anyhow!(
                "Provider '{provider_name}' not found\n\n\
                 No providers configured. Add providers to ~/.config/mixtl/config.toml"
            )
        } else {
            anyhow::anyhow!(
                "Provider '{provider_name}' not found\n\n\
                 Available providers:\n  \
                 - {}\n\n\
                 Add providers to ~/.config/mixtl/config.toml",
                available.join("\n  - ")
            )
        }
    })?;

    // Resolve model
    let model = options
        .model
        .as_ref()
        .or(config_file.mixtl.model.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'model'\n\n\
                 Please provide it via:\n  \
                 - CLI option: mixtl --model <name>\n  \
                 - Config file: ~/.config/mixtl/config.toml"
            )
        })?;

    // Warn if model is not in provider's models list
    if !provider_config.models.is_empty() && !provider_config.models.contains(&model) {
        eprintln!(
            "{} Model '{}' is not in the configured models list for '{}'\n\
             Configured models: {}\n\
             Proceeding anyway...\n",
            Style::warning("Warning:"),
            model,
            provider_name,
            provider_config.models.join(", ")
        );
    }

    let target_language = options
        .to
        .as_ref()
        .or(config_file.mixtl.to.as_ref())
        .cloned();

    let mode = options
        .mode
        .or(config_file.mixtl.mode)
        .unwrap_or_default();

    // Get API key
    let api_key = provider_config.get_api_key();

    // Check if API key is required but missing
    if provider_config.requires_api_key() && api_key.is_none() {
        let env_var = provider_config.api_key_env.as_deref().unwrap_or("API_KEY");
        bail!(
            "Provider '{provider_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/mixtl/config.toml"
        );
    }

    Ok(ResolvedConfig {
        provider_name,
        endpoint: provider_config.endpoint.clone(),
        model,
        api_key,
        target_language,
        mode,
        transliteration_endpoint: config_file
            .transliteration_endpoint(options.no_transliteration),
        languages: config_file.language_table(),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/mixtl/config.toml`
    /// or `~/.config/mixtl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
