//! Catalog loading from YAML/JSON files

use std::path::Path;

use anyhow::{Context, Result, bail};

use super::TestCatalog;

/// Load a catalog from a file; format chosen by extension (YAML or JSON)
pub fn load_catalog(path: &Path) -> Result<TestCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;

    let catalog: TestCatalog = if path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
    {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML catalog: {:?}", path))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON catalog: {:?}", path))?
    };

    catalog.validate()?;
    tracing::info!(
        "Loaded catalog from {:?} ({} fixtures)",
        path,
        catalog.fixture_count()
    );
    Ok(catalog)
}

/// Load a catalog from a YAML string (useful for testing)
pub fn load_catalog_from_yaml(yaml: &str) -> Result<TestCatalog> {
    let catalog: TestCatalog = serde_yaml::from_str(yaml)?;
    catalog.validate()?;
    Ok(catalog)
}

impl TestCatalog {
    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        load_catalog(path)
    }

    /// Reject fixtures that cannot be graded
    ///
    /// Empty sections are allowed; they produce no results.
    pub fn validate(&self) -> Result<()> {
        for case in &self.consistency {
            if case.expected_range.min() > case.expected_range.max() {
                bail!(
                    "consistency fixture '{}' has inverted range {:?}",
                    case.description,
                    case.expected_range
                );
            }
        }

        for case in &self.personalization {
            if case.required_elements.is_empty() {
                bail!(
                    "personalization fixture for '{}' ({}) has no required elements",
                    case.lead.first_name,
                    case.message_type
                );
            }
        }

        Ok(())
    }
}
