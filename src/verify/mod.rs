//! Manifest verification: the committed manifest against the live resources

use crate::resource::{Resource, ResourceSet};

/// Differences between a committed manifest and the live resources
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    /// In the live resources but missing from the manifest
    pub added: Vec<Resource>,
    /// In the manifest but no longer declared
    pub removed: Vec<Resource>,
}

impl Verification {
    pub fn is_up_to_date(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn total_changes(&self) -> usize {
        self.added.len() + self.removed.len()
    }
}

/// Compare the manifest's resources (`old`) with the live ones (`new`)
pub fn verify(old: &ResourceSet, new: &ResourceSet) -> Verification {
    Verification {
        added: new.difference(old).cloned().collect(),
        removed: old.difference(new).cloned().collect(),
    }
}
