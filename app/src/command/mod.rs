//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with its own input type, so
//! dispatch in `main` is a plain `match` with no boxing.

mod check;
mod form;
mod init;
mod kinds;
mod version;

pub use check::{CheckInput, CheckStrategy};
pub use form::{FormInput, FormStrategy};
pub use init::InitStrategy;
pub use kinds::KindsStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

