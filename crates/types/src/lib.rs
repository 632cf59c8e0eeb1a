#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the droidmgr device package manager
//!
//! This crate provides the fundamental value types used throughout the
//! system: device references and their connection state, installed
//! package entries, and package version metadata.

pub mod device;
pub mod package;
pub mod version;

// Re-export commonly used types
pub use device::{Device, DeviceState};
pub use package::InstalledPackage;
pub use version::VersionInfo;
