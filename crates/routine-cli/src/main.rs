//! Routine CSV to JSON converter CLI.

use clap::error::ErrorKind;
use clap::{ColorChoice, Parser};
use routine_cli::commands::{ConvertRequest, run_convert};
use routine_cli::logging::{LogConfig, LogFormat, init_logging};
use routine_transform::{AggregateOptions, EmptyIngredients};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                // Usage errors go to stdout with status 1.
                print!("{error}");
                std::process::exit(1);
            }
        },
    };
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let request = ConvertRequest::new(&cli.input, &cli.output)
        .with_options(aggregate_options_from_cli(&cli))
        .with_dry_run(cli.dry_run);
    let exit_code = match run_convert(&request) {
        Ok(result) => {
            if !cli.no_summary {
                print_summary(&result);
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn aggregate_options_from_cli(cli: &Cli) -> AggregateOptions {
    let mode = if cli.drop_empty_ingredients {
        EmptyIngredients::Drop
    } else {
        EmptyIngredients::Preserve
    };
    AggregateOptions::literal().with_empty_ingredients(mode)
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
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
