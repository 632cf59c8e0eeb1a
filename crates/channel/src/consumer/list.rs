//! Package listing consumer

use std::collections::HashMap;

use super::LineConsumer;

/// Accumulates `pm list packages -f` output into (name, apk path) pairs
///
/// Listing lines have the shape `package:<apk-path>=<name>`. The apk path
/// may itself contain `=` characters, so the name is taken after the last
/// one. Lines that do not match the shape are skipped.
#[derive(Debug, Default)]
pub struct PackageListConsumer {
    entries: HashMap<String, String>,
}

impl PackageListConsumer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated name → apk path pairs
    #[must_use]
    pub fn entries(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Consume the accumulated pairs
    #[must_use]
    pub fn into_entries(self) -> HashMap<String, String> {
        self.entries
    }
}

impl LineConsumer for PackageListConsumer {
    fn on_line(&mut self, line: &str) {
        let Some(rest) = line.trim().strip_prefix("package:") else {
            return;
        };
        let Some((path, name)) = rest.rsplit_once('=') else {
            return;
        };
        if name.is_empty() {
            return;
        }
        self.entries.insert(name.to_string(), path.to_string());
    }
}
