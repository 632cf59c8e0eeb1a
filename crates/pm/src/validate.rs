//! Device readiness validation

use droidmgr_errors::{DeviceError, Error};
use droidmgr_types::Device;

/// Check that a device is online before issuing remote traffic
///
/// First step of every public operation. Reads already-tracked state and
/// performs no I/O. The state can still change between this check and the
/// channel call that follows; that window belongs to the external device
/// tracker and is accepted.
///
/// # Errors
///
/// Returns [`DeviceError::NotReady`] when the device is in any state
/// other than online.
pub fn ensure_online(device: &Device) -> Result<(), Error> {
    let state = device.state();
    if state.is_online() {
        Ok(())
    } else {
        Err(DeviceError::NotReady {
            serial: device.serial().to_string(),
            state: state.to_string(),
        }
        .into())
    }
}
