//! CLI argument definitions for the prisoners register converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use warsa_model::LabelLanguage;

#[derive(Parser)]
#[command(
    name = "warsa-prisoners",
    version,
    about = "Convert the prisoners of war register to RDF",
    long_about = "Convert the prisoners of war register to RDF.\n\n\
                  Reads a tab-separated table with one prisoner per row and writes\n\
                  prisoners.ttl (the data) and schema.ttl (the predicates) as Turtle."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(
        long = "loglevel",
        visible_alias = "log-level",
        value_enum,
        ignore_case = true,
        global = true
    )]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Append logs to a file instead of writing them to stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a register table into data and schema Turtle files.
    Convert(ConvertArgs),

    /// List the mapped columns and their predicates.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Register table, tab-separated UTF-8 with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for prisoners.ttl and schema.ttl (created if missing).
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Field delimiter of the input table.
    #[arg(long = "delimiter", value_name = "CHAR", default_value_t = '\t')]
    pub delimiter: char,

    /// Write inline sources and order numbers as reified statements.
    #[arg(long = "reify")]
    pub reify: bool,

    /// Language of the predicate labels in schema.ttl.
    #[arg(long = "label-language", value_enum, default_value = "fi")]
    pub label_language: LabelLanguageArg,

    /// Also write the run summary as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Language of the labels shown.
    #[arg(long = "label-language", value_enum, default_value = "fi")]
    pub label_language: LabelLanguageArg,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    #[value(alias = "critical")]
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LabelLanguageArg {
    Fi,
    En,
}

impl From<LabelLanguageArg> for LabelLanguage {
    fn from(value: LabelLanguageArg) -> Self {
        match value {
            LabelLanguageArg::Fi => Self::Fi,
            LabelLanguageArg::En => Self::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_accepts_positional_paths_and_options() {
        let cli = Cli::try_parse_from([
            "warsa-prisoners",
            "convert",
            "vangit.tsv",
            "out",
            "--loglevel",
            "WARNING",
            "--reify",
            "--label-language",
            "en",
        ])
        .expect("valid arguments");
        assert_eq!(cli.log_level, Some(LogLevelArg::Warn));
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input, PathBuf::from("vangit.tsv"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.delimiter, '\t');
        assert!(args.reify);
        assert_eq!(args.label_language, LabelLanguageArg::En);
    }

    #[test]
    fn log_level_alias_is_accepted() {
        let cli = Cli::try_parse_from(["warsa-prisoners", "--log-level", "debug", "columns"])
            .expect("valid arguments");
        assert_eq!(cli.log_level, Some(LogLevelArg::Debug));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        assert!(
            Cli::try_parse_from(["warsa-prisoners", "columns", "--loglevel", "loud"]).is_err()
        );
    }
}
