mod manager;

pub use manager::{
    ConfigFile, ConfigManager, MixtlConfig, ProviderConfig, ResolveOptions, ResolvedConfig,
    TransliterationConfig, resolve_config,
};
