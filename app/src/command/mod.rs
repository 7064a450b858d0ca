//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own type and input, so
//! dispatch in `main` is resolved at compile time.

mod alerts;
mod info;
mod init;
mod version;

pub use alerts::{AlertsInput, AlertsStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
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
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
