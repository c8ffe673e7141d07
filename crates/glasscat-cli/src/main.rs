//! Catalog processor CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};

use glasscat_cli::cli::{Cli, LogFormatArg};
use glasscat_cli::logging::{LogConfig, LogFormat, init_logging};
use glasscat_cli::pipeline::{RunConfig, run};
use glasscat_cli::summary::print_summary;
use glasscat_ingest::{SheetSelector, SourceOptions};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let config = RunConfig {
        source: cli.source.clone(),
        mapping: cli.mapping.clone(),
        output: cli.output.clone(),
        extraction_log: cli.extraction_log.clone(),
        validation_log: cli.validation_log.clone(),
        options: SourceOptions {
            sheet: SheetSelector::parse(&cli.sheet),
            header_row: cli.header_row,
        },
    };

    let exit_code = match run(&config) {
        Ok(result) => {
            print_summary(&result);
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
