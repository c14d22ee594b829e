//! CLI console utilities

use colored::*;
use sdr_eval::{EvalProgress, Priority, Recommendation};

/// CLI console for formatted output
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message (verbose only)
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.chars().count()).dimmed());
    }

    /// One line per probe as the run advances
    pub fn progress(&self, progress: &EvalProgress) {
        println!(
            "{} {}",
            format!("[{}/{}]", progress.index + 1, progress.total).cyan(),
            progress.message
        );
    }

    /// Numbered recommendation with its priority colored
    pub fn recommendation(&self, index: usize, rec: &Recommendation) {
        let priority = match rec.priority {
            Priority::Critical => rec.priority.as_str().red().bold(),
            Priority::High => rec.priority.as_str().yellow().bold(),
            Priority::Medium => rec.priority.as_str().blue(),
        };
        println!("\n{}. [{}] {}", index, priority, rec.area.bold());
        println!("   Issue: {}", rec.issue);
        println!("   Fix: {}", rec.recommendation);
        if self.verbose {
            println!("   Prompt: {}", rec.prompt_improvement.dimmed());
        }
    }
}
