use fieldcheck_core::{Registry, validate_and_normalize};
use tracing::{debug, warn};

/// Input parameters for the Check command strategy.
#[derive(Debug, Clone)]
pub struct CheckInput {
    /// Field kind wire name (`email`, `tg`, ...)
    pub kind: String,
    /// Raw value to validate
    pub value: String,
}

/// Strategy for validating a single value.
///
/// Prints the normalized value on success and fails when the value does not
/// match the field kind.
#[derive(Debug, Clone, Copy)]
pub struct CheckStrategy;

impl super::CommandStrategy for CheckStrategy {
    type Input = CheckInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let entry = Registry::global().lookup(&input.kind)?;
        debug!(kind = %entry.kind(), "Checking value");

        let Some(normalized) = validate_and_normalize(entry, &input.value) else {
            warn!(kind = %entry.kind(), "Value rejected");
            anyhow::bail!("Value does not match the `{}` field format", entry.kind());
        };

        println!("{normalized}");
        Ok(())
    }
}
