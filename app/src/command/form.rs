//! Validate a whole JSON form submission.

use fieldcheck_config::Config;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Input parameters for the Form command strategy.
#[derive(Debug, Clone)]
pub struct FormInput {
    /// JSON file holding a flat object of field -> string; `-` reads stdin
    pub source: PathBuf,
    pub config: Config,
}

/// Strategy for validating a form.
///
/// Prints the `FormReport` as JSON and fails if any field was rejected.
#[derive(Debug, Clone, Copy)]
pub struct FormStrategy;

impl super::CommandStrategy for FormStrategy {
    type Input = FormInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let content = read_source(&input.source)?;
        let values: BTreeMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Form must be a JSON object of strings: {e}"))?;

        info!("Validating {} form fields", values.len());
        let report = input.config.form_validator().validate(&values);
        println!("{}", serde_json::to_string_pretty(&report)?);

        if !report.is_valid() {
            for violation in &report.violations {
                warn!("{}", violation.message());
            }
            anyhow::bail!("{} field(s) failed validation", report.violations.len());
        }

        Ok(())
    }
}

fn read_source(source: &Path) -> anyhow::Result<String> {
    if source.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    std::fs::read_to_string(source)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", source.display()))
}
