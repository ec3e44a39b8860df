use fieldcheck_core::Registry;

/// Strategy for listing the registered field kinds.
///
/// Prints each kind with its matching pattern and whether accepted values
/// are rewritten into a canonical form.
#[derive(Debug, Clone, Copy)]
pub struct KindsStrategy;

impl super::CommandStrategy for KindsStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        println!("=== Field kinds ===\n");

        for entry in Registry::global().iter() {
            println!("{}:", entry.kind());
            match entry.pattern() {
                Some(pattern) => println!("  Pattern: {}", pattern.as_str()),
                None => println!("  Pattern: (any)"),
            }
            println!(
                "  Normalizes: {}",
                if entry.has_normalizer() { "yes" } else { "no" }
            );
        }

        Ok(())
    }
}
