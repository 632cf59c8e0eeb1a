//! Package installation error types
//!
//! Install and uninstall failures carry the device-reported message
//! verbatim; the text is never re-interpreted by this crate.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstallError {
    #[error("package installation failed: {message}")]
    InstallFailed { message: String },

    #[error("package uninstallation failed: {message}")]
    UninstallFailed { message: String },
}
