// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod catalog;
mod errors;
mod file_utils;
mod validation;

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check PO catalogs for mistranslated special tokens (default command)
    #[command(alias = "check")]
    Lint(LintArgs),

    /// Generate shell completions for polint
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct LintArgs {
    /// PO catalog files or directories to check
    #[arg(value_name = "INPUT_PATHS", required = true)]
    input_paths: Vec<PathBuf>,

    /// Print every parsed entry (useful to debug the parser)
    #[arg(short, long)]
    show_parsed_entries: bool,

    /// Also compare printf-style format tokens (has known false positives)
    #[arg(short = 'p', long)]
    lint_printf: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "polint.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// polint - PO catalog translation linter
///
/// Checks for grave translation errors and typos in command-line options
/// or printf-style instructions embedded in translated strings.
#[derive(Parser, Debug)]
#[command(name = "polint")]
#[command(version = "0.1.0")]
#[command(about = "Lint PO catalogs for mistranslated flags and format directives")]
#[command(long_about = "polint parses gettext PO catalogs and flags entries whose command-line
options or printf-style directives differ between msgid and msgstr.

EXAMPLES:
    polint de.po                     # Lint one catalog
    polint po/                       # Lint every *.po under a directory
    polint -p de.po fr.po            # Also compare printf-style tokens
    polint -s de.po                  # Dump parsed entries while linting
    polint --log-level debug de.po   # Verbose parser/linter tracing
    polint completions bash > polint.bash   # Generate bash completions

EXIT STATUS:
    0 - all catalogs parsed, no issues found
    1 - at least one token mismatch reported
    2 - at least one catalog was malformed

CONFIGURATION:
    Configuration is read from polint.json when present (use --config-path
    to point elsewhere). Command-line flags override the loaded values.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// PO catalog files or directories to check
    #[arg(value_name = "INPUT_PATHS")]
    input_paths: Vec<PathBuf>,

    /// Print every parsed entry (useful to debug the parser)
    #[arg(short, long)]
    show_parsed_entries: bool,

    /// Also compare printf-style format tokens (has known false positives)
    #[arg(short = 'p', long)]
    lint_printf: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "polint.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let mut stderr = std::io::stderr();
            let color = Self::get_color_for_level(record.level());
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Map a config log level to the log crate's filter
fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "polint", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Lint(args)) => {
            // Use the explicit lint subcommand args
            run_lint(args)
        }
        None => {
            // Default behavior - use top-level args for backwards compatibility
            if cli.input_paths.is_empty() {
                return Err(anyhow!(
                    "INPUT_PATHS is required when no subcommand is specified"
                ));
            }

            let lint_args = LintArgs {
                input_paths: cli.input_paths,
                show_parsed_entries: cli.show_parsed_entries,
                lint_printf: cli.lint_printf,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_lint(lint_args)
        }
    }
}

fn run_lint(options: LintArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load configuration when a config file is present; a linter must not
    // dirty the working tree, so a missing file just means defaults
    let config_path = &options.config_path;
    let mut config: Config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        debug!("Config file not found at '{}', using defaults.", config_path);
        Config::default()
    };

    // Override config with CLI options if provided
    if options.show_parsed_entries {
        config.show_parsed_entries = true;
    }

    if options.lint_printf {
        config.lint.format_tokens = true;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Create controller and lint every input
    let controller = Controller::with_config(config)?;
    let summary = controller.run(&options.input_paths)?;

    // Malformed input, lint findings and a clean run are three distinct
    // process outcomes
    if summary.parse_failures > 0 {
        std::process::exit(2);
    }
    if summary.issues_found > 0 {
        std::process::exit(1);
    }

    Ok(())
}
