use crate::config::Config;
use crate::error::{OverlayableError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Kind of resource directory a file lives in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `values*` directories: each XML file declares many resources
    Values,
    /// Any other directory: each file is one resource of this type
    File { resource_type: String },
}

impl ResourceKind {
    /// Determine the kind from a resource directory name, dropping qualifiers
    /// (`values-night-v29` -> values, `drawable-hdpi` -> drawable)
    pub fn from_dir_name(dir_name: &str) -> Self {
        let base = dir_name.split('-').next().unwrap_or(dir_name);
        if base == "values" {
            ResourceKind::Values
        } else {
            ResourceKind::File {
                resource_type: base.to_string(),
            }
        }
    }

    pub fn is_values(&self) -> bool {
        matches!(self, ResourceKind::Values)
    }
}

/// A discovered resource file
#[derive(Debug, Clone)]
pub struct ResourceFile {
    pub path: PathBuf,
    pub kind: ResourceKind,
}

impl ResourceFile {
    pub fn new(path: PathBuf, kind: ResourceKind) -> Self {
        Self { path, kind }
    }

    pub fn is_xml(&self) -> bool {
        self.path.extension().map(|e| e == "xml").unwrap_or(false)
    }

    /// Resource name of a file-based resource: the file name up to its first
    /// dot, so `ic_back.9.png` is `ic_back`
    pub fn resource_name(&self) -> Option<&str> {
        let file_name = self.path.file_name()?.to_str()?;
        file_name.split('.').next().filter(|name| !name.is_empty())
    }

    pub fn read_contents(&self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|source| OverlayableError::Read {
            path: self.path.clone(),
            source,
        })
    }
}

/// Finds resource files under a `res/` directory
pub struct FileFinder<'a> {
    config: &'a Config,
}

impl<'a> FileFinder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Find all resource files in `res_dir/<kind>[-qualifiers]/`, in path order
    pub fn find_files(&self, res_dir: &Path) -> Result<Vec<ResourceFile>> {
        debug!("Scanning for resource files in: {}", res_dir.display());

        if !res_dir.is_dir() {
            return Err(OverlayableError::ResDirNotFound {
                path: res_dir.to_path_buf(),
            });
        }

        // Resource directories sit at depth 1, so hidden ones are pruned whole
        let walker = WalkDir::new(res_dir)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| OverlayableError::Walk {
                path: res_dir.to_path_buf(),
                source,
            })?;

            if entry.depth() != 2 || !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.config.should_exclude(path.strip_prefix(res_dir).unwrap_or(path)) {
                trace!("Excluding: {}", path.display());
                continue;
            }

            let Some(dir_name) = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
            else {
                continue;
            };

            let file = ResourceFile::new(path.to_path_buf(), ResourceKind::from_dir_name(dir_name));
            if file.kind.is_values() && !file.is_xml() {
                trace!("Skipping non-XML values file: {}", path.display());
                continue;
            }

            trace!("Found {:?}: {}", file.kind, path.display());
            files.push(file);
        }

        debug!("Found {} resource files", files.len());
        Ok(files)
    }
}

/// Statistics about discovered files
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileStats {
    pub values_files: usize,
    pub file_resources: usize,
}

impl FileStats {
    pub fn from_files(files: &[ResourceFile]) -> Self {
        let mut stats = Self::default();
        for file in files {
            match file.kind {
                ResourceKind::Values => stats.values_files += 1,
                ResourceKind::File { .. } => stats.file_resources += 1,
            }
        }
        stats
    }

    pub fn total(&self) -> usize {
        self.values_files + self.file_resources
    }
}

impl std::fmt::Display for FileStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files ({} values files, {} file resources)",
            self.total(),
            self.values_files,
            self.file_resources
        )
    }
}
