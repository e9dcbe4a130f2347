//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "placard",
    bin_name = "placard",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Placeholder checks for notification templates",
    long_about = "Placard finds {placeholder} tokens in notification templates and \
                  checks them against a catalog of known placeholders and a set of \
                  required ones.",
    after_help = "EXAMPLES:\n\
        \x20 placard check reminder.txt -r customer_name -r appointment_date\n\
        \x20 placard extract reminder.txt --spans\n\
        \x20 placard catalog --format list\n\
        \x20 cat reminder.txt | placard check - --format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a template against the catalog and required placeholders.
    #[command(
        visible_alias = "c",
        about = "Validate a template",
        after_help = "EXAMPLES:\n\
            \x20 placard check reminder.txt\n\
            \x20 placard check reminder.txt -r customer_name -r appointment_date\n\
            \x20 placard check - --format json < reminder.txt\n\n\
            Exits with status 2 when the template is invalid."
    )]
    Check(CheckArgs),

    /// List the placeholder tokens a template uses.
    #[command(
        visible_alias = "x",
        about = "List placeholders used in a template",
        after_help = "EXAMPLES:\n\
            \x20 placard extract reminder.txt\n\
            \x20 placard extract reminder.txt --spans"
    )]
    Extract(ExtractArgs),

    /// List the available placeholders.
    #[command(
        visible_alias = "ls",
        about = "List available placeholders",
        after_help = "EXAMPLES:\n\
            \x20 placard catalog\n\
            \x20 placard catalog --format json\n\
            \x20 placard catalog --catalog ./catalogs --format csv"
    )]
    Catalog(CatalogArgs),

    /// Append a placeholder token to a template and print the result.
    #[command(
        about = "Insert a placeholder into a template",
        after_help = "EXAMPLES:\n\
            \x20 placard insert reminder.txt appointment_time\n\
            \x20 echo 'Hi' | placard insert - customer_name"
    )]
    Insert(InsertArgs),

    /// Show the display name and description of a placeholder.
    #[command(
        about = "Describe a placeholder",
        after_help = "EXAMPLES:\n\
            \x20 placard describe customer_name"
    )]
    Describe(DescribeArgs),

    /// Initialise a Placard configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 placard init           # platform config directory\n\
            \x20 placard init --local   # .placard.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 placard completions bash > ~/.local/share/bash-completion/completions/placard\n\
            \x20 placard completions zsh  > ~/.zfunc/_placard\n\
            \x20 placard completions fish > ~/.config/fish/completions/placard.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Placard configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 placard config get catalog.path\n\
            \x20 placard config list\n\
            \x20 placard config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `placard check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Template file, or `-` for stdin.
    #[arg(value_name = "FILE", help = "Template file ('-' reads stdin)")]
    pub template: PathBuf,

    /// Required placeholder keys. Replaces `validation.required` from config.
    #[arg(
        short = 'r',
        long = "require",
        value_name = "KEY",
        action = clap::ArgAction::Append,
        help = "Placeholder that must appear (repeatable)"
    )]
    pub require: Vec<String>,

    /// Report format. Defaults to `output.format` from config.
    #[arg(long = "format", value_enum, help = "Report format")]
    pub format: Option<ReportFormat>,
}

// ── extract ───────────────────────────────────────────────────────────────────

/// Arguments for `placard extract`.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Template file, or `-` for stdin.
    #[arg(value_name = "FILE", help = "Template file ('-' reads stdin)")]
    pub template: PathBuf,

    /// Print every occurrence with its line and column.
    #[arg(long = "spans", help = "Show every occurrence with line:column")]
    pub spans: bool,

    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ReportFormat>,
}

// ── catalog ───────────────────────────────────────────────────────────────────

/// Arguments for `placard catalog`.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `catalog` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One key per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── insert ────────────────────────────────────────────────────────────────────

/// Arguments for `placard insert`.
#[derive(Debug, Args)]
pub struct InsertArgs {
    /// Template file, or `-` for stdin.
    #[arg(value_name = "FILE", help = "Template file ('-' reads stdin)")]
    pub template: PathBuf,

    /// Placeholder key to insert, without braces.
    #[arg(value_name = "KEY", help = "Placeholder key (without braces)")]
    pub key: String,

    /// Insert a key the catalog does not define.
    #[arg(long = "allow-unknown", help = "Allow keys missing from the catalog")]
    pub allow_unknown: bool,
}

// ── describe ──────────────────────────────────────────────────────────────────

/// Arguments for `placard describe`.
#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Placeholder key, without braces.
    #[arg(value_name = "KEY", help = "Placeholder key (without braces)")]
    pub key: String,

    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ReportFormat>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `placard init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.placard.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `placard completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `placard config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `catalog.path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Report format for `check`, `extract` and `describe`, also read from
/// `output.format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable, colored when stdout is a terminal.
    #[default]
    Human,
    /// JSON on stdout.
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_with_repeated_require() {
        let cli = Cli::parse_from([
            "placard",
            "check",
            "reminder.txt",
            "-r",
            "customer_name",
            "--require",
            "appointment_date",
        ]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.template, PathBuf::from("reminder.txt"));
                assert_eq!(args.require, ["customer_name", "appointment_date"]);
                assert_eq!(args.format, None);
            }
            other => panic!("expected Check command, got {other:?}"),
        }
    }

    #[test]
    fn stdin_dash_is_accepted_as_template() {
        let cli = Cli::parse_from(["placard", "extract", "-", "--spans"]);
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.template, PathBuf::from("-"));
                assert!(args.spans);
            }
            other => panic!("expected Extract command, got {other:?}"),
        }
    }

    #[test]
    fn catalog_flag_is_global() {
        let cli = Cli::parse_from(["placard", "catalog", "--catalog", "./catalogs"]);
        assert_eq!(cli.global.catalog, Some(PathBuf::from("./catalogs")));
    }

    #[test]
    fn catalog_format_defaults_to_table() {
        let cli = Cli::parse_from(["placard", "ls"]);
        match cli.command {
            Commands::Catalog(args) => assert_eq!(args.format, ListFormat::Table),
            other => panic!("expected Catalog command, got {other:?}"),
        }
    }

    #[test]
    fn report_format_displays_as_its_config_value() {
        assert_eq!(ReportFormat::Json.to_string(), "json");
        assert_eq!(ReportFormat::Human.to_string(), "human");
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["placard", "--quiet", "--verbose", "catalog"]);
        assert!(result.is_err());
    }

    #[test]
    fn insert_requires_key() {
        let result = Cli::try_parse_from(["placard", "insert", "reminder.txt"]);
        assert!(result.is_err());
    }
}
