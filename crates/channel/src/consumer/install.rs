//! Install outcome consumer

use super::LineConsumer;

/// Captures the success/failure line printed by `pm install`/`pm uninstall`
///
/// The package manager reports the outcome as text on stdout: a line
/// reading `Success`, or `Failure [REASON]` with a machine-readable reason
/// between the brackets. The reason is captured verbatim; this consumer
/// never rewrites it.
#[derive(Debug, Default)]
pub struct InstallOutcomeConsumer {
    success: bool,
    error: Option<String>,
}

impl InstallOutcomeConsumer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a `Success` line was seen
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.success
    }

    /// The captured failure text, if the device reported one
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl LineConsumer for InstallOutcomeConsumer {
    fn on_line(&mut self, line: &str) {
        let line = line.trim();
        if line == "Success" {
            self.success = true;
        } else if let Some(rest) = line.strip_prefix("Failure") {
            let rest = rest.trim();
            // `Failure [REASON]`; tolerate a bare `Failure` with no reason
            let message = rest
                .strip_prefix('[')
                .and_then(|r| r.strip_suffix(']'))
                .unwrap_or(rest);
            if message.is_empty() {
                self.error = Some(line.to_string());
            } else {
                self.error = Some(message.to_string());
            }
        }
    }
}
