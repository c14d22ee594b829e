//! Evaluation commands

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::*;
use sdr_core::GrokScoringClient;
use sdr_eval::report::generate_report;
use sdr_eval::{
    Category, EvalConfig, EvalExecutor, EvalProgress, EvaluationReport, RegressionDetector,
    ReportFormat, TestCatalog,
};
use tokio_util::sync::CancellationToken;

use super::{client_config, grok_client};
use crate::args::ConnectionArgs;
use crate::console::CliConsole;

/// Options for `sdr-eval run`
pub struct RunOptions {
    pub connection: ConnectionArgs,
    pub config: Option<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub categories: Vec<Category>,
    pub output: Option<PathBuf>,
    pub no_save: bool,
    pub format: ReportFormat,
    pub top: usize,
    pub verbose: bool,
}

/// Merge the config file with command-line overrides
fn eval_config(options: &RunOptions) -> Result<EvalConfig> {
    let mut config = match options.config.clone().or_else(EvalConfig::default_path) {
        Some(path) => EvalConfig::load(&path)?,
        None => EvalConfig::default(),
    };

    if let Some(catalog) = &options.catalog {
        config = config.with_catalog_path(catalog.clone());
    }
    if !options.categories.is_empty() {
        config = config.with_categories(options.categories.clone());
    }
    if let Some(output) = &options.output {
        config = config.with_output_path(output.clone());
    }
    if options.no_save {
        config = config.without_save();
    }

    Ok(config)
}

/// Cancel the run on the first Ctrl-C, exit on the second
fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        tracing::warn!("Interrupt received, cancelling evaluation");
        cancel.cancel();

        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
}

/// Run the evaluation suite
pub async fn run(options: RunOptions) -> Result<()> {
    let console = CliConsole::new(options.verbose);
    let config = eval_config(&options)?;

    let connection = client_config(&options.connection)
        .with_request_timeout(config.request_timeout_secs)
        .with_connect_timeout(config.connect_timeout_secs);
    if !connection.has_api_key() {
        bail!("No API key: pass --api-key or set XAI_API_KEY");
    }
    let model = connection.model.clone();
    let client = GrokScoringClient::new(grok_client(connection)?);

    let save = config.save_results;
    let output_path = config.output_path.clone();
    let mut executor = EvalExecutor::new(config)?.with_model(model.clone());
    executor.set_progress_callback(Box::new(move |progress: EvalProgress| {
        CliConsole::new(false).progress(&progress);
    }));

    console.print_header(&format!("Evaluating {}", model));
    console.info(&format!(
        "{} fixtures loaded",
        executor.catalog().fixture_count()
    ));

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(cancel.clone());

    let report = executor.run(&client, cancel).await?;

    println!("{}", generate_report(&report, options.format)?);

    if report.cancelled {
        console.warn("Evaluation was cancelled; the report covers completed probes only");
    }

    let rate = format!("{:.1}%", report.overall_success_rate);
    let rate = if report.overall_success_rate >= 80.0 {
        rate.green().bold()
    } else if report.overall_success_rate >= 50.0 {
        rate.yellow().bold()
    } else {
        rate.red().bold()
    };
    println!("\nOverall Success Rate: {}", rate);
    println!("Total Tests Run: {}", report.tests_run);

    for issue in &report.summary.critical_issues {
        console.error(&issue.message);
    }

    let top = report.top_recommendations(options.top);
    if !top.is_empty() {
        console.print_header("Top Recommendations");
        for (i, rec) in top.iter().enumerate() {
            console.recommendation(i + 1, rec);
        }
        println!();
    }

    if save {
        console.success(&format!("Report exported to {}", output_path.display()));
    }

    Ok(())
}

fn load_catalog(catalog: Option<&Path>) -> Result<TestCatalog> {
    match catalog {
        Some(path) => TestCatalog::load(path),
        None => Ok(TestCatalog::builtin()),
    }
}

/// List catalog fixtures
pub fn list(catalog: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog)?;

    println!("{}", "Scoring consistency".bold());
    for case in &catalog.consistency {
        println!(
            "  {:<45} [{:.0}-{:.0}]",
            case.description,
            case.expected_range.min(),
            case.expected_range.max()
        );
    }

    println!("\n{}", "Message personalization".bold());
    for case in &catalog.personalization {
        let elements: Vec<&str> = case.required_elements.iter().map(|e| e.as_str()).collect();
        println!(
            "  {:<20} {:<18} {}",
            case.lead.full_name(),
            case.message_type.as_str(),
            elements.join(", ")
        );
    }

    println!("\n{}", "Edge cases".bold());
    for case in &catalog.edge_cases {
        println!("  {}", case.test_type);
    }

    println!("\n{}", "Prompt injection".bold());
    for case in &catalog.injection {
        println!("  {}", case.test_name);
    }

    println!("\n{}", "Response time".bold());
    println!(
        "  scoring: {} | message: {} ({})",
        catalog.latency.scoring_lead.full_name(),
        catalog.latency.message_lead.full_name(),
        catalog.latency.message_type
    );

    println!("\nTotal: {} fixtures", catalog.fixture_count());
    Ok(())
}

/// Show evaluation report from a previous run
pub async fn report(input: &Path, format: ReportFormat) -> Result<()> {
    let report = EvaluationReport::read_json(input).await?;
    println!("{}", generate_report(&report, format)?);
    Ok(())
}

/// Compare two evaluation reports
pub async fn compare(baseline: &Path, current: &Path) -> Result<()> {
    let baseline_report = EvaluationReport::read_json(baseline).await?;
    let current_report = EvaluationReport::read_json(current).await?;

    let regressions = RegressionDetector::with_defaults().detect(&baseline_report, &current_report);

    println!("Comparison: {} vs {}\n", baseline.display(), current.display());
    println!(
        "{:<22} {:>15} {:>15} {:>15}",
        "Metric", "Baseline", "Current", "Change"
    );
    println!("{:-<70}", "");

    let change = current_report.overall_success_rate - baseline_report.overall_success_rate;
    println!(
        "{:<22} {:>14.1}% {:>14.1}% {:>+14.1}%",
        "Success Rate",
        baseline_report.overall_success_rate,
        current_report.overall_success_rate,
        change
    );
    println!(
        "{:<22} {:>15} {:>15} {:>+15}",
        "Tests Run",
        baseline_report.tests_run,
        current_report.tests_run,
        current_report.tests_run as i64 - baseline_report.tests_run as i64
    );

    for (name, base) in &baseline_report.summary.category_performance {
        if let Some(curr) = current_report.summary.category_performance.get(name) {
            println!(
                "{:<22} {:>14.1}% {:>14.1}% {:>+14.1}%",
                base.category.display_name(),
                base.success_rate,
                curr.success_rate,
                curr.success_rate - base.success_rate
            );
        }
    }
    println!();

    if regressions.is_empty() {
        println!("{}", "No regressions detected.".green());
    } else {
        println!("{}", RegressionDetector::summarize(&regressions).red());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdr_core::config::DEFAULT_MODEL;
    use sdr_eval::EvaluationResult;

    fn options(config: Option<PathBuf>) -> RunOptions {
        RunOptions {
            connection: ConnectionArgs {
                api_key: Some("xai-test".to_string()),
                base_url: "https://api.x.ai/v1".to_string(),
                model: DEFAULT_MODEL.to_string(),
            },
            config,
            catalog: None,
            categories: vec![Category::Security],
            output: Some(PathBuf::from("out/report.json")),
            no_save: false,
            format: ReportFormat::Table,
            top: 3,
            verbose: false,
        }
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.toml");
        std::fs::write(
            &path,
            "consistency_repeats = 5\ncategories = [\"scoring\"]\nsave_results = true\n",
        )
        .unwrap();

        let config = eval_config(&options(Some(path))).unwrap();
        assert_eq!(config.consistency_repeats, 5);
        assert_eq!(config.categories, vec![Category::Security]);
        assert_eq!(config.output_path, PathBuf::from("out/report.json"));
    }

    #[tokio::test]
    async fn test_report_and_compare_saved_files() {
        let dir = tempfile::tempdir().unwrap();
        let baseline = dir.path().join("baseline.json");
        let current = dir.path().join("current.json");

        let passing = vec![EvaluationResult::new(
            "Injection Resistance - SQL injection attempt",
            Category::Security,
            true,
            100.0,
        )];
        let failing = vec![EvaluationResult::new(
            "Injection Resistance - SQL injection attempt",
            Category::Security,
            false,
            0.0,
        )];
        EvaluationReport::build(passing, "grok-3", false)
            .write_json(&baseline)
            .await
            .unwrap();
        EvaluationReport::build(failing, "grok-3", false)
            .write_json(&current)
            .await
            .unwrap();

        report(&current, ReportFormat::Markdown).await.unwrap();
        compare(&baseline, &current).await.unwrap();
    }

    #[test]
    fn test_list_builtin_catalog() {
        list(None).unwrap();
    }
}
