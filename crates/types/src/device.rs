//! Device references and connection state

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::RwLock;

/// Connection state of a bridged device
///
/// The state field is owned and updated by the bridge's device tracker;
/// the package-management core only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceState {
    /// Connected and ready for shell/sync traffic
    Online,
    /// Known to the bridge but not responding
    Offline,
    /// Connected but the host key has not been accepted on-device
    Unauthorized,
    /// Rebooted into the bootloader
    Bootloader,
    /// Rebooted into recovery
    Recovery,
    /// Reported a state this library does not recognize
    Unknown,
}

impl DeviceState {
    #[must_use]
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Offline => write!(f, "offline"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Bootloader => write!(f, "bootloader"),
            Self::Recovery => write!(f, "recovery"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Handle for a single bridged device
///
/// Identity is the bridge serial number. The connection state is mutable
/// because it belongs to whatever tracks the device's lifecycle; consumers
/// that hold a `Device` across a state change will observe the new state on
/// the next read. A state read immediately before an operation can still
/// race with a disconnect; that window is accepted.
#[derive(Debug)]
pub struct Device {
    serial: String,
    state: RwLock<DeviceState>,
}

impl Device {
    #[must_use]
    pub fn new(serial: impl Into<String>, state: DeviceState) -> Self {
        Self {
            serial: serial.into(),
            state: RwLock::new(state),
        }
    }

    /// Bridge serial number identifying this device
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Current connection state
    ///
    /// # Panics
    ///
    /// Panics if the state lock was poisoned by a panicking writer.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        *self.state.read().unwrap()
    }

    /// Update the connection state
    ///
    /// Intended for the external device tracker, not for the
    /// package-management core.
    ///
    /// # Panics
    ///
    /// Panics if the state lock was poisoned by a panicking writer.
    pub fn set_state(&self, state: DeviceState) {
        *self.state.write().unwrap() = state;
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.state().is_online()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.serial, self.state())
    }
}
