//! Package manager orchestration

use droidmgr_channel::{
    CommandChannel, InstallOutcomeConsumer, PackageListConsumer, SyncChannelFactory,
    VersionInfoConsumer,
};
use droidmgr_errors::{Error, InstallError};
use droidmgr_types::{Device, VersionInfo};
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tracing::{debug, error};

use crate::inventory::PackageInventory;
use crate::validate::ensure_online;

/// Writable staging directory for pushed packages, fixed on all devices
pub const REMOTE_INSTALL_DIR: &str = "/data/local/tmp/";

/// Permission bits stamped on pushed package files
const PUSH_FILE_MODE: u32 = 0o644;

const LIST_PACKAGES: &str = "pm list packages -f";
const LIST_PACKAGES_THIRD_PARTY: &str = "pm list packages -f -3";

/// Orchestrates package installation, removal, and enumeration on one device
///
/// Construction takes the device handle and both channel dependencies
/// explicitly; there is no fallback to a shared default bridge client.
/// Operations are sequenced internally but not serialized against each
/// other: callers that interleave operations on the same manager must
/// impose their own ordering.
pub struct PackageManager {
    device: Arc<Device>,
    commands: Arc<dyn CommandChannel>,
    sync: Arc<dyn SyncChannelFactory>,
    third_party_only: bool,
    inventory: PackageInventory,
}

impl std::fmt::Debug for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageManager")
            .field("device", &self.device)
            .field("third_party_only", &self.third_party_only)
            .finish_non_exhaustive()
    }
}

impl PackageManager {
    /// Create a manager bound to one device
    #[must_use]
    pub fn new(
        device: Arc<Device>,
        commands: Arc<dyn CommandChannel>,
        sync: Arc<dyn SyncChannelFactory>,
        third_party_only: bool,
    ) -> Self {
        Self {
            device,
            commands,
            sync,
            third_party_only,
            inventory: PackageInventory::new(),
        }
    }

    /// The device this manager operates on
    #[must_use]
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Whether listing refreshes are restricted to third-party packages
    #[must_use]
    pub fn third_party_only(&self) -> bool {
        self.third_party_only
    }

    /// Read access to the cached package inventory
    #[must_use]
    pub fn inventory(&self) -> &PackageInventory {
        &self.inventory
    }

    /// Refresh the inventory using the configured listing scope
    ///
    /// # Errors
    ///
    /// Returns an error if the device is not online or the listing
    /// command fails at the channel level. The previous inventory is kept
    /// on any failure.
    pub async fn refresh_packages(&self) -> Result<(), Error> {
        self.refresh_packages_with(self.third_party_only).await
    }

    /// Refresh the inventory, overriding the listing scope for this call
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::refresh_packages`].
    pub async fn refresh_packages_with(&self, third_party_only: bool) -> Result<(), Error> {
        ensure_online(&self.device)?;
        let command = if third_party_only {
            LIST_PACKAGES_THIRD_PARTY
        } else {
            LIST_PACKAGES
        };
        debug!(device = %self.device.serial(), command, "refreshing package inventory");
        let mut consumer = PackageListConsumer::new();
        self.commands
            .execute(&self.device, command, Some(&mut consumer))
            .await?;
        // Replacement happens only after the channel call succeeded
        self.inventory.replace(consumer.into_entries());
        Ok(())
    }

    /// Push a local package file into the device's staging directory
    ///
    /// The remote path is always `/data/local/tmp/<basename>`; the
    /// staging directory is not configurable per call. Returns the remote
    /// path the file was pushed to. A file that fails mid-transfer is not
    /// removed here; cleanup belongs to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the device is not online, the local file
    /// cannot be opened, or the transfer fails. I/O failures are logged
    /// with their cause before propagation.
    pub async fn push_package(&self, local: &Path) -> Result<String, Error> {
        ensure_online(&self.device)?;
        let file_name = local
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| Error::io_other("local package path has no file name", local))?;
        // Forward-slash join: the remote side is not the host platform
        let remote_path = format!("{REMOTE_INSTALL_DIR}{file_name}");

        let mut session = self.sync.open(&self.device).await?;
        let mut file = tokio::fs::File::open(local).await.map_err(|e| {
            error!(device = %self.device.serial(), path = %local.display(), cause = %e,
                "failed to open local package");
            Error::io_with_path(&e, local)
        })?;
        let modified = file
            .metadata()
            .await
            .and_then(|meta| meta.modified())
            .map_err(|e| {
                error!(device = %self.device.serial(), path = %local.display(), cause = %e,
                    "failed to read local package metadata");
                Error::io_with_path(&e, local)
            })?;

        debug!(device = %self.device.serial(), remote = %remote_path, "pushing package");
        session
            .push(
                &mut file as &mut (dyn AsyncRead + Send + Unpin),
                &remote_path,
                PUSH_FILE_MODE,
                modified,
                None,
                None,
            )
            .await
            .map_err(|e| {
                error!(device = %self.device.serial(), remote = %remote_path, cause = %e,
                    "package transfer failed");
                e
            })?;
        Ok(remote_path)
    }

    /// Install an already-pushed package file
    ///
    /// The device reports the install outcome as text, not as a channel
    /// failure; a non-empty captured failure message is the sole failure
    /// signal here and is carried verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::InstallFailed`] with the device's message,
    /// or a device/channel error.
    pub async fn install_remote_package(
        &self,
        remote_path: &str,
        reinstall: bool,
    ) -> Result<(), Error> {
        ensure_online(&self.device)?;
        let command = if reinstall {
            format!("pm install -r {remote_path}")
        } else {
            format!("pm install {remote_path}")
        };
        debug!(device = %self.device.serial(), %command, "installing package");
        let mut consumer = InstallOutcomeConsumer::new();
        self.commands
            .execute(&self.device, &command, Some(&mut consumer))
            .await?;
        match consumer.error_message() {
            Some(message) => Err(InstallError::InstallFailed {
                message: message.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Push, install, and clean up a local package in one sequence
    ///
    /// Steps: validate, push to the staging directory, install from
    /// there, then delete the staged file. Each failure short-circuits
    /// the rest.
    ///
    /// Known limitation, kept for compatibility with existing tooling:
    /// the staged file is deleted only after a successful install. When
    /// the install step fails, the file pushed in step two stays in
    /// `/data/local/tmp/` on the device.
    ///
    /// # Errors
    ///
    /// Propagates the first failing step's error unchanged.
    pub async fn install_package(&self, local: &Path, reinstall: bool) -> Result<(), Error> {
        ensure_online(&self.device)?;
        let remote_path = self.push_package(local).await?;
        self.install_remote_package(&remote_path, reinstall).await?;
        self.remove_remote_package(&remote_path).await?;
        Ok(())
    }

    /// Delete a staged package file from the device
    ///
    /// Output of the delete command, if any, is discarded. Best effort:
    /// a failure here does not undo a completed install.
    ///
    /// # Errors
    ///
    /// Returns an I/O error wrapping the channel failure, after logging
    /// it with its cause.
    pub async fn remove_remote_package(&self, remote_path: &str) -> Result<(), Error> {
        let command = format!("rm {remote_path}");
        self.commands
            .execute(&self.device, &command, None)
            .await
            .map_err(|e| {
                error!(device = %self.device.serial(), remote = %remote_path, cause = %e,
                    "failed to remove staged package");
                Error::io_other(
                    format!("failed to remove {remote_path}: {e}"),
                    remote_path,
                )
            })
    }

    /// Uninstall a package by identifier
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::UninstallFailed`] with the device's
    /// message, or a device/channel error.
    pub async fn uninstall_package(&self, package: &str) -> Result<(), Error> {
        ensure_online(&self.device)?;
        let command = format!("pm uninstall {package}");
        debug!(device = %self.device.serial(), %command, "uninstalling package");
        let mut consumer = InstallOutcomeConsumer::new();
        self.commands
            .execute(&self.device, &command, Some(&mut consumer))
            .await?;
        match consumer.error_message() {
            Some(message) => Err(InstallError::UninstallFailed {
                message: message.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Query version metadata for a package
    ///
    /// A package the device does not know yields the default (empty)
    /// [`VersionInfo`], not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only for device validation or channel failures.
    pub async fn version_info(&self, package: &str) -> Result<VersionInfo, Error> {
        ensure_online(&self.device)?;
        let command = format!("dumpsys package {package}");
        debug!(device = %self.device.serial(), %command, "querying package version");
        let mut consumer = VersionInfoConsumer::new();
        self.commands
            .execute(&self.device, &command, Some(&mut consumer))
            .await?;
        Ok(consumer.into_info())
    }
}
