//! GreetFlow CLI.

use clap::{ColorChoice, Parser};
use greetflow_cli::commands::{run_greet, run_health};
use greetflow_cli::logging::{LogConfig, LogFormat, init_logging};
use greetflow_client::ClientSettings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{print_health, print_outcome};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = settings_from_cli(&cli);
    let exit_code = match &cli.command {
        Command::Greet(args) => match run_greet(args.to_fields(), settings) {
            Ok(outcome) => {
                print_outcome(&outcome, args.json);
                if outcome.is_failure() { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Health => match run_health(settings) {
            Ok(status) => {
                print_health(&status);
                if status.ok { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Environment first, then explicit flags.
fn settings_from_cli(cli: &Cli) -> ClientSettings {
    let mut settings = ClientSettings::from_env();
    if let Some(base_url) = &cli.api_base {
        settings.base_url = base_url.clone();
    }
    if let Some(origin) = &cli.origin {
        settings.origin = origin.clone();
    }
    tracing::debug!(
        base_url = %settings.base_url,
        origin = %settings.origin,
        "Resolved service settings"
    );
    settings
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
