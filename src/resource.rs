//! Resource identifiers and sets of them

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A declared Android resource, identified by its type and name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Resource {
    /// Resource type (e.g., "string", "color", "layout")
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Resource name (e.g., "app_name")
    pub name: String,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.name)
    }
}

/// A deduplicated set of resources, iterated in `(type, name)` order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSet {
    resources: BTreeSet<Resource>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, returning false if it was already present
    pub fn insert(&mut self, resource: Resource) -> bool {
        self.resources.insert(resource)
    }

    pub fn contains(&self, resource: &Resource) -> bool {
        self.resources.contains(resource)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Resources in `self` that are not in `other`, in sorted order
    pub fn difference<'a>(&'a self, other: &'a ResourceSet) -> impl Iterator<Item = &'a Resource> {
        self.resources.difference(&other.resources)
    }

    /// Project this set through an exclusion mapping
    pub fn without(&self, exclusions: &ResourceSet) -> ResourceSet {
        self.difference(exclusions).cloned().collect()
    }
}

impl FromIterator<Resource> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        Self {
            resources: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResourceSet {
    type Item = Resource;
    type IntoIter = std::collections::btree_set::IntoIter<Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a Resource;
    type IntoIter = std::collections::btree_set::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}
