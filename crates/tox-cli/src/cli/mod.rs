use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `toxs` binary.
#[derive(Debug, Parser)]
#[command(
    name = "toxs",
    version,
    about = "toxscreen - livestock pollutant toxicity screening"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Dataset: pollutants or ld50 (overrides config)
    #[arg(short, long, global = true)]
    pub dataset: Option<String>,

    /// JSON seed file to load instead of the configured one
    #[arg(short, long, global = true)]
    pub seed: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            dataset: self.dataset.clone(),
            seed: self.seed.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "toxs",
            "--format",
            "table",
            "--dataset",
            "ld50",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.dataset.as_deref(), Some("ld50"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["toxs", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["toxs", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn list_arguments_parse() {
        let cli = Cli::try_parse_from([
            "toxs", "list", "--search", "tetra", "--category", "ALL", "--sort", "value",
            "--order", "desc", "--page", "2",
        ])
        .expect("cli should parse");

        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.query.search.as_deref(), Some("tetra"));
        assert_eq!(args.query.category.as_deref(), Some("ALL"));
        assert_eq!(args.query.sort.as_deref(), Some("value"));
        assert_eq!(args.query.order.as_deref(), Some("desc"));
        assert_eq!(args.page, 2);
    }

    #[test]
    fn export_accepts_query_flags() {
        let cli = Cli::try_parse_from([
            "toxs", "export", "--csv", "--category", "antibiotic", "--search", "tyl",
            "--sort", "name", "--order", "desc",
        ])
        .expect("cli should parse");

        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert!(args.csv);
        assert_eq!(args.query.category.as_deref(), Some("antibiotic"));
        assert_eq!(args.query.search.as_deref(), Some("tyl"));
        assert_eq!(args.query.sort.as_deref(), Some("name"));
        assert_eq!(args.query.order.as_deref(), Some("desc"));
    }

    #[test]
    fn compare_accepts_any_number_of_ids() {
        let cli = Cli::try_parse_from(["toxs", "compare"]).expect("cli should parse");
        let Commands::Compare(args) = cli.command else {
            panic!("expected compare command");
        };
        assert!(args.ids.is_empty());

        let cli = Cli::try_parse_from(["toxs", "compare", "p1", "p2", "p4"])
            .expect("cli should parse");
        let Commands::Compare(args) = cli.command else {
            panic!("expected compare command");
        };
        assert_eq!(args.ids, vec!["p1", "p2", "p4"]);
    }

    #[test]
    fn export_flags_parse() {
        let cli = Cli::try_parse_from(["toxs", "export", "--csv", "--out", "/tmp/out"])
            .expect("cli should parse");
        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert!(args.csv);
        assert_eq!(args.out.as_deref(), Some("/tmp/out"));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["toxs", "--seed", "/tmp/seed.json", "dashboard"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.seed.as_deref(), Some("/tmp/seed.json"));
        assert_eq!(flags.color, ColorMode::Auto);
    }
}
