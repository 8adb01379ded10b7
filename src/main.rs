// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::app_config::Config;
use app_controller::Controller;
use providers::libre::LibreTranslate;

mod app_config;
mod app_controller;
mod chain;
mod errors;
mod languages;
mod providers;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a translation chain (default command)
    Run(RunArgs),

    /// List the languages available for chain building
    Languages {
        /// Query the configured endpoint instead of the built-in table
        #[arg(long)]
        remote: bool,

        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },

    /// Generate shell completions for dengon
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Source text to send around the chain
    #[arg(value_name = "TEXT")]
    text: String,

    /// Intermediate language code, repeatable and ordered (e.g. -l ug -l la -l ky)
    #[arg(short = 'l', long = "lang", value_name = "CODE", required = true)]
    langs: Vec<String>,

    /// Translate endpoint URL, overrides the config file
    #[arg(short, long)]
    endpoint: Option<String>,

    /// API key for the endpoint
    #[arg(short, long, env = "DENGON_API_KEY")]
    api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// dengon - telephone-game translation
///
/// Routes Japanese text through an ordered chain of intermediate languages
/// and back to Japanese via a LibreTranslate-compatible endpoint, printing
/// each intermediate step and the final round-trip text.
#[derive(Parser, Debug)]
#[command(name = "dengon")]
#[command(version = "0.1.0")]
#[command(about = "Telephone-game translation over LibreTranslate")]
#[command(long_about = "dengon sends text from Japanese through a chain of intermediate languages
and back to Japanese, one translation call per hop.

EXAMPLES:
    dengon \"こんにちは\" -l ug -l la -l ky     # ja → ug → la → ky → ja
    dengon \"おはよう\" -l en                    # ja → en → ja
    dengon \"こんにちは\" -l ug --log-level debug
    dengon languages                            # Show the built-in language table
    dengon languages --remote                   # Ask the endpoint what it supports
    dengon completions bash > dengon.bash       # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Source text to send around the chain
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Intermediate language code, repeatable and ordered
    #[arg(short = 'l', long = "lang", value_name = "CODE")]
    langs: Vec<String>,

    /// Translate endpoint URL, overrides the config file
    #[arg(short, long)]
    endpoint: Option<String>,

    /// API key for the endpoint
    #[arg(short, long, env = "DENGON_API_KEY")]
    api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "dengon", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages {
            remote,
            config_path,
        }) => list_languages(remote, &config_path).await,
        Some(Commands::Run(args)) => run_chain(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let text = cli
                .text
                .ok_or_else(|| anyhow!("TEXT is required when no subcommand is specified"))?;
            if cli.langs.is_empty() {
                return Err(anyhow!("At least one --lang is required"));
            }

            let run_args = RunArgs {
                text,
                langs: cli.langs,
                endpoint: cli.endpoint,
                api_key: cli.api_key,
                timeout_secs: cli.timeout_secs,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_chain(run_args).await
        }
    }
}

async fn run_chain(options: RunArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let mut config = load_or_create_config(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(endpoint) = &options.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(api_key) = &options.api_key {
        config.api_key = api_key.clone();
    }
    if let Some(timeout_secs) = options.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    if options.text.trim().is_empty() {
        return Err(anyhow!("Source text must not be blank"));
    }
    if options.langs.contains(&config.anchor_language) {
        warn!(
            "Chain contains the anchor language '{}'; that hop will translate a language into itself",
            config.anchor_language
        );
    }

    let controller = Controller::with_config(config)?;
    let final_text = controller.run(&options.text, &options.langs).await?;

    println!("{}", final_text);
    Ok(())
}

async fn list_languages(remote: bool, config_path: &str) -> Result<()> {
    if remote {
        let config = load_or_create_config(config_path)?;
        config.validate().context("Configuration validation failed")?;

        let client = LibreTranslate::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
        .with_api_key(config.api_key.clone());

        info!("Fetching language list from {}", config.endpoint);
        let remote_languages = client.languages().await?;
        for lang in remote_languages {
            println!("{}  {}", lang.code, lang.name);
        }
        return Ok(());
    }

    for entry in languages::SUPPORTED_LANGUAGES {
        let english = languages::english_name(entry.code).unwrap_or("-");
        println!("{}  {}  {}", entry.code, entry.name, english);
    }
    Ok(())
}

// Helper to load an existing config file or create a default one
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        Ok(config)
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        Ok(config)
    }
}
