//! Package version metadata

use serde::{Deserialize, Serialize};

/// Version fields extracted from a device's package metadata dump
///
/// All fields are optional: a package the device does not know about
/// produces the default (empty) value rather than an error, and older
/// platform versions omit the SDK fields entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Monotonic numeric version code
    pub version_code: Option<u64>,
    /// Human-readable version string
    pub version_name: Option<String>,
    /// Minimum SDK level the package declares
    pub min_sdk: Option<u32>,
    /// SDK level the package targets
    pub target_sdk: Option<u32>,
}

impl VersionInfo {
    /// True when no metadata field was found for the queried package
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.version_code.is_none()
            && self.version_name.is_none()
            && self.min_sdk.is_none()
            && self.target_sdk.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(VersionInfo::default().is_empty());
    }

    #[test]
    fn any_field_makes_it_non_empty() {
        let info = VersionInfo {
            version_name: Some("1.2.3".to_string()),
            ..VersionInfo::default()
        };
        assert!(!info.is_empty());
    }

    #[test]
    fn round_trips_through_json() {
        let info = VersionInfo {
            version_code: Some(71),
            version_name: Some("1.2.3".to_string()),
            min_sdk: Some(24),
            target_sdk: Some(30),
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: VersionInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
