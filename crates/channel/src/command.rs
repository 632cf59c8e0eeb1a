//! Command channel contract

use async_trait::async_trait;
use droidmgr_errors::Error;
use droidmgr_types::Device;

use crate::consumer::LineConsumer;

/// Executes a shell-style command on a device and streams its text output
///
/// Implementations deliver output line by line to the supplied consumer;
/// passing `None` discards whatever the command prints. A command that the
/// device itself reports as failed (for example a failed `pm install`) is
/// still a successful channel call: the failure travels as text through
/// the consumer, not as a channel error.
#[async_trait]
pub trait CommandChannel: Send + Sync {
    /// Run `command` on `device`, feeding output lines to `consumer`
    ///
    /// # Errors
    ///
    /// Returns an error only for transport-level failures: connection
    /// loss, protocol violations, or the bridge refusing the command.
    async fn execute(
        &self,
        device: &Device,
        command: &str,
        consumer: Option<&mut dyn LineConsumer>,
    ) -> Result<(), Error>;
}
