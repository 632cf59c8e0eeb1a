//! Cached package inventory

use droidmgr_types::InstalledPackage;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Mapping of installed package names to on-device apk paths
///
/// The inventory always holds the complete result of the most recent
/// successful listing refresh. It is replaced wholesale, never mutated
/// entry by entry, so a reader sees either the previous snapshot or the
/// next one. Readers take an `Arc` to the current snapshot and keep it
/// valid across later refreshes.
#[derive(Debug, Default)]
pub struct PackageInventory {
    entries: RwLock<Arc<HashMap<String, String>>>,
}

impl PackageInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole mapping with a fresh listing result
    pub(crate) fn replace(&self, entries: HashMap<String, String>) {
        *self.entries.write().unwrap() = Arc::new(entries);
    }

    /// The current snapshot of name → apk path
    ///
    /// # Panics
    ///
    /// Panics if the inventory lock was poisoned by a panicking writer.
    #[must_use]
    pub fn snapshot(&self) -> Arc<HashMap<String, String>> {
        Arc::clone(&self.entries.read().unwrap())
    }

    /// On-device apk path for a package, if the last refresh listed it
    #[must_use]
    pub fn install_path(&self, package: &str) -> Option<String> {
        self.snapshot().get(package).cloned()
    }

    #[must_use]
    pub fn contains(&self, package: &str) -> bool {
        self.snapshot().contains_key(package)
    }

    /// The current entries as owned values, in no particular order
    #[must_use]
    pub fn packages(&self) -> Vec<InstalledPackage> {
        self.snapshot()
            .iter()
            .map(|(name, path)| InstalledPackage::new(name.clone(), path.clone()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}
