//! Evaluation configuration
//!
//! Configuration options for running evaluations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sdr_core::config::timeouts;
use serde::{Deserialize, Serialize};

use crate::result::Category;

/// Configuration for evaluation runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Timeout per scoring/generation call in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Timeout for the connectivity check in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Scoring calls per consistency fixture
    #[serde(default = "default_consistency_repeats")]
    pub consistency_repeats: u32,

    /// Scoring calls in the response-time probe
    #[serde(default = "default_scoring_latency_calls")]
    pub scoring_latency_calls: u32,

    /// Message-generation calls in the response-time probe
    #[serde(default = "default_message_latency_calls")]
    pub message_latency_calls: u32,

    /// Categories to run (empty = all)
    #[serde(default)]
    pub categories: Vec<Category>,

    /// Where the JSON report is written
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Optional fixture file replacing the built-in catalog
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Whether to write the report after the run
    #[serde(default = "default_save_results")]
    pub save_results: bool,
}

fn default_request_timeout() -> u64 {
    timeouts::llm::REQUEST_SECS
}

fn default_connect_timeout() -> u64 {
    timeouts::connect::CHECK_SECS
}

fn default_consistency_repeats() -> u32 {
    3
}

fn default_scoring_latency_calls() -> u32 {
    5
}

fn default_message_latency_calls() -> u32 {
    3
}

fn default_output_path() -> PathBuf {
    PathBuf::from("evaluation_report.json")
}

fn default_save_results() -> bool {
    true
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            consistency_repeats: default_consistency_repeats(),
            scoring_latency_calls: default_scoring_latency_calls(),
            message_latency_calls: default_message_latency_calls(),
            categories: Vec::new(),
            output_path: default_output_path(),
            catalog_path: None,
            save_results: default_save_results(),
        }
    }
}

impl EvalConfig {
    /// Load configuration from a file
    ///
    /// Supports JSON, TOML, and YAML formats based on file extension.
    /// Returns default config if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read eval config: {:?}", path))?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {:?}", path))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {:?}", path))?,
            _ => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {:?}", path))?,
        };

        Ok(config)
    }

    /// Default config location (`~/.sdr/eval.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".sdr").join("eval.toml"))
    }

    /// Set the call timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set scoring calls per consistency fixture
    pub fn with_consistency_repeats(mut self, repeats: u32) -> Self {
        self.consistency_repeats = repeats;
        self
    }

    /// Set categories to run
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Set the report path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set a custom catalog file
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Disable report export
    pub fn without_save(mut self) -> Self {
        self.save_results = false;
        self
    }

    /// Whether a category is selected
    pub fn includes(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}
