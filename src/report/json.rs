use crate::resource::Resource;
use crate::verify::Verification;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for CI tooling
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report<F>(&self, verification: &Verification, manifest: &str, origin: F) -> Result<()>
    where
        F: Fn(&Resource) -> Option<String>,
    {
        let report = JsonReport::new(verification, manifest, origin);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    manifest: &'a str,
    up_to_date: bool,
    added: Vec<JsonResource<'a>>,
    removed: Vec<JsonResource<'a>>,
}

#[derive(Serialize)]
struct JsonResource<'a> {
    #[serde(flatten)]
    resource: &'a Resource,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin: Option<String>,
}

impl<'a> JsonReport<'a> {
    fn new<F>(verification: &'a Verification, manifest: &'a str, origin: F) -> Self
    where
        F: Fn(&Resource) -> Option<String>,
    {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            manifest,
            up_to_date: verification.is_up_to_date(),
            added: verification
                .added
                .iter()
                .map(|resource| JsonResource {
                    resource,
                    origin: origin(resource),
                })
                .collect(),
            removed: verification
                .removed
                .iter()
                .map(|resource| JsonResource {
                    resource,
                    origin: None,
                })
                .collect(),
        }
    }
}
