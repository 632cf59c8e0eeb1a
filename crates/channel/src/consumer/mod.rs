//! Line-oriented output consumers
//!
//! A consumer is a stateful parser bound to a single command execution.
//! The command channel feeds it output one line at a time; once the call
//! returns, the caller reads the accumulated result through the
//! consumer's typed accessor. Consumers are never reused across calls.

mod install;
mod list;
mod version;

pub use install::InstallOutcomeConsumer;
pub use list::PackageListConsumer;
pub use version::VersionInfoConsumer;

/// Capability interface the command channel drives
pub trait LineConsumer: Send {
    /// Process one line of command output, without its trailing newline
    fn on_line(&mut self, line: &str);

    /// Called once after the final line, when the command has finished
    fn done(&mut self) {}
}
