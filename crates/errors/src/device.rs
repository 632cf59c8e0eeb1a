//! Device state error types

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceError {
    #[error("device {serial} is not ready: state is {state}")]
    NotReady { serial: String, state: String },
}
