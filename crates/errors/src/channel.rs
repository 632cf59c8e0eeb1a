//! Bridge channel error types
//!
//! Failures from the command/sync transport are opaque to the core and
//! propagated unchanged.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelError {
    #[error("connection to device lost: {message}")]
    ConnectionLost { message: String },

    #[error("bridge protocol violation: {message}")]
    Protocol { message: String },

    #[error("command transport failed: {command}: {message}")]
    CommandFailed { command: String, message: String },

    #[error("sync transfer failed: {message}")]
    TransferFailed { message: String },
}
