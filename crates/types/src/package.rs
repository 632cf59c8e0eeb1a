//! Installed package entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry from a device package listing
///
/// Pairs a package identifier with the on-device path of its installed
/// archive, exactly as the listing reported it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstalledPackage {
    /// Package identifier, e.g. `com.example.app`
    pub name: String,
    /// On-device install path, e.g. `/data/app/com.example.app-1.apk`
    pub apk_path: String,
}

impl InstalledPackage {
    #[must_use]
    pub fn new(name: impl Into<String>, apk_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            apk_path: apk_path.into(),
        }
    }
}

impl fmt::Display for InstalledPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.apk_path)
    }
}
