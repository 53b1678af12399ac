//! Resource scanning
//!
//! Walks a `res/` tree and collects every declared `(type, name)` pair, and
//! reads resource sets back out of overlayable files (the generated manifest
//! and the exclusion mapping).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::discovery::{FileFinder, FileStats, ResourceFile, ResourceKind};
use crate::error::{OverlayableError, Result};
use crate::parser::xml::{IdParser, OverlayableParser, ValuesParser};
use crate::resource::{Resource, ResourceSet};

/// Result of scanning a resource tree
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Every declared resource
    pub resources: ResourceSet,
    /// First file that declared each resource
    pub origins: BTreeMap<Resource, PathBuf>,
    /// Files parsed or counted during the scan
    pub files_scanned: usize,
}

impl ScanResult {
    /// Record a resource, keeping the first origin seen
    pub fn insert(&mut self, resource: Resource, origin: &Path) {
        self.origins
            .entry(resource.clone())
            .or_insert_with(|| origin.to_path_buf());
        self.resources.insert(resource);
    }
}

/// Scanner for Android resource trees and overlayable files
pub struct ResourceScanner<'a> {
    config: &'a Config,
    values: ValuesParser,
    ids: IdParser,
    overlayable: OverlayableParser,
}

impl<'a> ResourceScanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            values: ValuesParser::new(),
            ids: IdParser::new(),
            overlayable: OverlayableParser::new(),
        }
    }

    /// Collect every resource declared under `res_dir`
    pub fn scan(&self, res_dir: &Path) -> Result<ScanResult> {
        let files = FileFinder::new(self.config).find_files(res_dir)?;
        info!("Scanning {}", FileStats::from_files(&files));

        let mut result = ScanResult::default();
        for file in &files {
            self.scan_file(file, &mut result)?;
            result.files_scanned += 1;
        }

        info!(
            "Found {} resources in {} files under {}",
            result.resources.len(),
            result.files_scanned,
            res_dir.display()
        );
        Ok(result)
    }

    fn scan_file(&self, file: &ResourceFile, result: &mut ScanResult) -> Result<()> {
        match &file.kind {
            ResourceKind::Values => {
                let contents = file.read_contents()?;
                for resource in self.values.parse(&file.path, &contents)? {
                    result.insert(resource, &file.path);
                }
            }
            ResourceKind::File { resource_type } => {
                let Some(name) = file.resource_name() else {
                    debug!("Skipping unnamed resource file {}", file.path.display());
                    return Ok(());
                };
                result.insert(Resource::new(resource_type.as_str(), name), &file.path);

                if file.is_xml() && resource_type != "raw" {
                    let contents = file.read_contents()?;
                    for id in self.ids.parse(&file.path, &contents)? {
                        result.insert(id, &file.path);
                    }
                }
            }
        }
        Ok(())
    }

    /// Load the resources listed in a previously generated manifest
    pub fn load_manifest(&self, path: &Path) -> Result<ResourceSet> {
        if !path.is_file() {
            return Err(OverlayableError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        let resources = self.load_overlayable(path)?;
        info!("Manifest {} lists {} resources", path.display(), resources.len());
        Ok(resources)
    }

    /// Load the exclusion mapping; a missing file means nothing is excluded
    pub fn load_exclusions(&self, path: &Path) -> Result<ResourceSet> {
        if !path.exists() {
            debug!("No exclusion file at {}", path.display());
            return Ok(ResourceSet::new());
        }
        let exclusions = self.load_overlayable(path)?;
        info!("Excluding {} resources listed in {}", exclusions.len(), path.display());
        Ok(exclusions)
    }

    fn load_overlayable(&self, path: &Path) -> Result<ResourceSet> {
        let contents = std::fs::read_to_string(path).map_err(|source| OverlayableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.overlayable.parse(path, &contents)?.into_iter().collect())
    }
}
