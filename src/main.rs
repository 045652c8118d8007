use anyhow::Result;
use clap::Parser;

use mixtl_cli::cli::commands::detect::{self, DetectOptions};
use mixtl_cli::cli::commands::translate::{self, TranslateOptions, TranslateOutcome};
use mixtl_cli::cli::commands::providers;
use mixtl_cli::cli::{Args, Command};
use mixtl_cli::config::ConfigManager;
use mixtl_cli::output::{self, OutputConfig};
use mixtl_cli::translation::print_languages;
use mixtl_cli::ui::Style;
use mixtl_cli::logging;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });
    logging::init(args.verbose, output::is_no_color());

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            exitcode::SOFTWARE
        }
    };
    std::process::exit(code);
}

async fn run(args: Args) -> Result<exitcode::ExitCode> {
    match args.command {
        Some(Command::Languages { indian }) => {
            let config_file = ConfigManager::new()?.load_or_default()?;
            print_languages(&config_file.language_table(), indian);
        }
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        Some(Command::Detect {
            text,
            file,
            json,
            provider,
            model,
            no_cache,
        }) => {
            let options = DetectOptions {
                text,
                file,
                json,
                provider,
                model,
                no_cache,
            };
            detect::run_detect(options).await?;
        }
        None => {
            let options = TranslateOptions {
                text: args.text,
                file: args.file,
                to: args.to,
                mode: args.mode,
                provider: args.provider,
                model: args.model,
                no_cache: args.no_cache,
                no_transliteration: args.no_transliteration,
                output: args.output,
            };
            if translate::run_translate(options).await? == TranslateOutcome::Failed {
                return Ok(exitcode::UNAVAILABLE);
            }
        }
    }

    Ok(exitcode::OK)
}
