//! CLI argument definitions for the mapping generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "wos-map",
    version,
    about = "Generate mapping-table rows for WooCommerce order CSV columns",
    long_about = "Convert a WooCommerce order CSV header line into mapping-table rows.\n\n\
                  Each column is normalized to a wos_ internal field name and printed\n\
                  as one row declaration. Without a subcommand, rows for the embedded\n\
                  order export header are printed to stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one mapping row per header column (default).
    Generate(GenerateArgs),

    /// Show how each column resolves, as a table.
    Preview(InputArgs),

    /// Report columns that resolve to the same field name.
    Check(InputArgs),
}

#[derive(Args, Default)]
pub struct InputArgs {
    /// Read the header line from the first line of this CSV file instead of
    /// the embedded order export header.
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write rows to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "rows")]
    pub format: RowFormatArg,

    /// Group tag stamped on every row.
    #[arg(long = "group-tag", value_name = "TAG")]
    pub group_tag: Option<String>,

    /// Description stamped on every row.
    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,

    /// Stability tag stamped on every row.
    #[arg(long = "stability", value_name = "TAG")]
    pub stability: Option<String>,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum RowFormatArg {
    #[default]
    Rows,
    Csv,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
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

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["wos-map"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::try_parse_from([
            "wos-map",
            "generate",
            "--input",
            "orders.csv",
            "--format",
            "csv",
            "--stability",
            "draft",
        ])
        .unwrap();
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.input.input, Some(PathBuf::from("orders.csv")));
        assert!(matches!(args.format, RowFormatArg::Csv));
        assert_eq!(args.stability.as_deref(), Some("draft"));
        assert!(args.group_tag.is_none());
    }

    #[test]
    fn global_log_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["wos-map", "check", "--log-format", "json"]).unwrap();
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(matches!(cli.command, Some(Command::Check(_))));
    }
}
