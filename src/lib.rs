//! overlayable - Maintain an Android app's overlayable.xml allow-list
//!
//! Two tools share this library:
//! - **generate-overlayable** scans `res/`, drops resources listed in the
//!   exclusion file, and writes every remaining `(type, name)` pair into
//!   `overlayable.xml`
//! - **verify-overlayable** re-scans `res/` and fails when the committed
//!   manifest no longer matches
//!
//! # Pipeline
//!
//! 1. **File Discovery** - Find resource files under `res/<kind>[-qualifiers]/`
//! 2. **Parsing** - Read declarations from values files, file names and
//!    inline `@+id/` ids
//! 3. **Generation** - Sort and render the manifest
//! 4. **Verification** - Diff the committed manifest against the live set

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod generator;
pub mod parser;
pub mod report;
pub mod resource;
pub mod scanner;
pub mod verify;

pub use config::Config;
pub use discovery::FileFinder;
pub use error::{OverlayableError, Result};
pub use generator::ManifestGenerator;
pub use report::{ReportFormat, Reporter};
pub use resource::{Resource, ResourceSet};
pub use scanner::{ResourceScanner, ScanResult};
pub use verify::{verify, Verification};
