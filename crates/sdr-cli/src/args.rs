//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sdr_core::config::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL};
use sdr_eval::{Category, ReportFormat};

#[derive(Parser)]
#[command(name = "sdr-eval")]
#[command(about = "Evaluate AI lead scoring and outreach generation")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection options shared by commands that talk to the API
#[derive(Args, Clone, Debug)]
pub struct ConnectionArgs {
    /// xAI API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat-completions base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the evaluation suite
    Run {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Evaluation config file (JSON, TOML or YAML); defaults to ~/.sdr/eval.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Fixture catalog (YAML or JSON) replacing the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only run these categories (repeatable)
        #[arg(long = "category", value_parser = parse_category)]
        categories: Vec<Category>,

        /// Where to write the JSON report
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Do not write the JSON report
        #[arg(long)]
        no_save: bool,

        /// Terminal output format: table, markdown or json
        #[arg(long, short, default_value = "table")]
        format: ReportFormat,

        /// Number of recommendations to highlight
        #[arg(long, default_value_t = 3)]
        top: usize,
    },

    /// Check connectivity to the scoring API
    Check {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// List the fixtures that would be run
    List {
        /// Fixture catalog (YAML or JSON) replacing the built-in one
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Render a saved report
    Report {
        /// Report written by `run`
        #[arg(long, short, default_value = "evaluation_report.json")]
        input: PathBuf,

        /// Output format: table, markdown or json
        #[arg(long, short, default_value = "table")]
        format: ReportFormat,
    },

    /// Compare two saved reports and flag regressions
    Compare {
        #[arg(long)]
        baseline: PathBuf,

        #[arg(long)]
        current: PathBuf,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        format!("unknown category '{}' (expected one of: {})", s, names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_arguments() {
        let cli = Cli::try_parse_from([
            "sdr-eval",
            "run",
            "--api-key",
            "xai-test",
            "--category",
            "security",
            "--category",
            "scoring",
            "--format",
            "markdown",
            "--top",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                connection,
                categories,
                format,
                top,
                ..
            } => {
                assert_eq!(connection.api_key.as_deref(), Some("xai-test"));
                assert_eq!(connection.model, DEFAULT_MODEL);
                assert_eq!(categories, vec![Category::Security, Category::Scoring]);
                assert_eq!(format, ReportFormat::Markdown);
                assert_eq!(top, 5);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = Cli::try_parse_from(["sdr-eval", "run", "--category", "latency"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["sdr-eval", "list", "-v"]).unwrap();
        assert!(cli.verbose);
    }
}
