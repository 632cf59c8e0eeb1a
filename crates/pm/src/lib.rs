#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Application lifecycle management for bridged devices
//!
//! This crate is the orchestration core: it sequences the remote
//! operations that install, uninstall, and enumerate application
//! packages on a device reached through the bridge's command and sync
//! channels, and maintains the cached package inventory those listings
//! produce.
//!
//! The channels themselves are injected trait objects from
//! `droidmgr-channel`; this crate issues the commands, interprets the
//! consumers' accumulated results, and guarantees the ordering and
//! cleanup semantics of the install pipeline.

mod inventory;
mod manager;
mod validate;

pub use inventory::PackageInventory;
pub use manager::{PackageManager, REMOTE_INSTALL_DIR};
pub use validate::ensure_online;
