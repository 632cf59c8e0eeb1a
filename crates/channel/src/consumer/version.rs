//! Version info consumer

use droidmgr_types::VersionInfo;

use super::LineConsumer;

/// Extracts version fields from `dumpsys package <name>` output
///
/// The dump interleaves `key=value` tokens on indented lines, e.g.
/// `versionCode=71 minSdk=24 targetSdk=30` followed by
/// `versionName=1.2.3`. The first occurrence of each field wins; later
/// sections of the dump repeat them for other users and are ignored. A
/// package the device does not know produces no matching lines and the
/// accumulated value stays at its default.
#[derive(Debug, Default)]
pub struct VersionInfoConsumer {
    info: VersionInfo,
}

impl VersionInfoConsumer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated version fields
    #[must_use]
    pub fn info(&self) -> &VersionInfo {
        &self.info
    }

    /// Consume the accumulated value
    #[must_use]
    pub fn into_info(self) -> VersionInfo {
        self.info
    }
}

impl LineConsumer for VersionInfoConsumer {
    fn on_line(&mut self, line: &str) {
        for token in line.split_whitespace() {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            match key {
                "versionCode" if self.info.version_code.is_none() => {
                    self.info.version_code = value.parse().ok();
                }
                "versionName" if self.info.version_name.is_none() => {
                    self.info.version_name = Some(value.to_string());
                }
                "minSdk" if self.info.min_sdk.is_none() => {
                    self.info.min_sdk = value.parse().ok();
                }
                "targetSdk" if self.info.target_sdk.is_none() => {
                    self.info.target_sdk = value.parse().ok();
                }
                _ => {}
            }
        }
    }
}
