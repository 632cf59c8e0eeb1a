//! Sync channel contract

use async_trait::async_trait;
use droidmgr_errors::Error;
use droidmgr_types::Device;
use std::time::SystemTime;
use tokio::io::AsyncRead;

use crate::cancel::CancelSignal;

/// Byte-count callback for an in-flight transfer
///
/// Purely informational; implementations must not fail the transfer.
pub trait TransferProgress: Send + Sync {
    /// Called after each chunk with the cumulative byte count
    fn transferred(&self, bytes: u64);
}

/// One open file-transfer session to a device
///
/// A session is a scoped resource: implementations release the underlying
/// connection when the session is dropped, so every exit path of a caller
/// gives the session back.
#[async_trait]
pub trait SyncChannel: Send {
    /// Push the contents of `source` to `remote_path` on the device
    ///
    /// `mode` carries POSIX permission bits and `modified` the timestamp
    /// to stamp on the remote file. `cancel` is checked between chunks;
    /// a cancelled transfer fails with [`Error::Cancelled`] and leaves
    /// the remote file in an undefined state.
    ///
    /// # Errors
    ///
    /// Returns an error for any read failure on `source`, any transport
    /// failure, or cancellation.
    async fn push(
        &mut self,
        source: &mut (dyn AsyncRead + Send + Unpin),
        remote_path: &str,
        mode: u32,
        modified: SystemTime,
        progress: Option<&dyn TransferProgress>,
        cancel: Option<&CancelSignal>,
    ) -> Result<(), Error>;
}

/// Opens sync sessions for devices
///
/// Injected at orchestrator construction so tests and alternative
/// transports can substitute their own session type; there is no shared
/// default factory.
#[async_trait]
pub trait SyncChannelFactory: Send + Sync {
    /// Open a new transfer session to `device`
    ///
    /// # Errors
    ///
    /// Returns an error if the bridge cannot open a sync connection.
    async fn open(&self, device: &Device) -> Result<Box<dyn SyncChannel>, Error>;
}
