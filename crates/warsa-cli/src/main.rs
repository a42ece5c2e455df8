//! Prisoners of war register to RDF converter.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::Level;
use tracing::level_filters::LevelFilter;
use warsa_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_columns, run_convert};
use crate::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let log_level = log_config.level_filter.into_level().unwrap_or(Level::ERROR);
    let exit_code = match cli.command {
        Command::Convert(args) => match run_convert(&args, log_level) {
            Ok(summary) => {
                print_summary(&summary);
                0
            }
            Err(error) => {
                tracing::error!("{error:#}");
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Columns(args) => match run_columns(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default()
        .with_level_filter(cli.verbosity.tracing_level_filter())
        .with_format(match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        })
        .with_log_file(cli.log_file.clone());
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
