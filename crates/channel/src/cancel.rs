//! Cancellation signal for sync transfers

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable flag a caller can raise to abort an in-flight transfer
///
/// The package-management core only forwards the signal it is given; it
/// never raises one itself and performs no cancellation-specific cleanup.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal {
    flag: Arc<AtomicBool>,
}

impl CancelSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the transfer holding this signal
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let signal = CancelSignal::new();
        let observer = signal.clone();
        assert!(!observer.is_cancelled());
        signal.cancel();
        assert!(observer.is_cancelled());
    }
}
