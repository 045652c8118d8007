use clap::{ArgAction, Parser, Subcommand};

use crate::translation::Mode;

#[derive(Parser, Debug)]
#[command(name = "mixtl")]
#[command(about = "Translate mixed-language and romanized Indian-language text")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads --file or stdin if not provided)
    pub text: Option<String>,

    /// File to translate
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Target language code (e.g., hi, en, kn)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation strategy
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Provider name from the config file
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Disable cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Never convert romanized text to native script
    #[arg(long)]
    pub no_transliteration: bool,

    /// Write the translation to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// More diagnostic logging (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report the languages found in a text
    Detect {
        /// Text to analyse (reads --file or stdin if not provided)
        text: Option<String>,

        /// File to analyse
        #[arg(short = 'f', long)]
        file: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Provider name from the config file
        #[arg(short = 'p', long)]
        provider: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,

        /// Disable cache
        #[arg(short = 'n', long)]
        no_cache: bool,
    },
    /// List supported language codes
    Languages {
        /// Only list the Indian languages
        #[arg(long)]
        indian: bool,
    },
    /// List configured providers
    Providers {
        /// Show details for one provider
        provider: Option<String>,
    },
}
