mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::resource::Resource;
use crate::verify::Verification;
use miette::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Output format for verification reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter for manifest verification results
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    project_root: PathBuf,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>, project_root: PathBuf) -> Self {
        Self {
            format,
            output_path,
            project_root,
        }
    }

    /// Report the differences found for `manifest`; `origins` locates added resources
    pub fn report(
        &self,
        verification: &Verification,
        origins: &BTreeMap<Resource, PathBuf>,
        manifest: &Path,
    ) -> Result<()> {
        let manifest = relative_to(manifest, &self.project_root);
        let origin = |resource: &Resource| {
            origins
                .get(resource)
                .map(|path| relative_to(path, &self.project_root))
        };

        match &self.format {
            ReportFormat::Terminal => {
                TerminalReporter::new().report(verification, &manifest, origin)
            }
            ReportFormat::Json => {
                JsonReporter::new(self.output_path.clone()).report(verification, &manifest, origin)
            }
        }
    }
}

/// Display form of `path`, relative to `root` when it lives under it
fn relative_to(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
