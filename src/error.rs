//! Error types for scanning, generating and verifying overlayable manifests.
//!
//! Uses `thiserror` for the definitions and `miette` for the rendered
//! diagnostics the binaries print.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning resources or writing the manifest
#[derive(Error, Diagnostic, Debug)]
pub enum OverlayableError {
    #[error("Failed to read {}", .path.display())]
    #[diagnostic(code(overlayable::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    #[diagnostic(code(overlayable::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk resource directory {}", .path.display())]
    #[diagnostic(code(overlayable::io::walk))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Resource directory not found: {}", .path.display())]
    #[diagnostic(
        code(overlayable::scan::res_dir_not_found),
        help("Pass the project root as PATH, or set `res_dir` in the config file")
    )]
    ResDirNotFound { path: PathBuf },

    #[error("Manifest not found: {}", .path.display())]
    #[diagnostic(
        code(overlayable::verify::manifest_not_found),
        help("Run generate-overlayable to create it")
    )]
    ManifestNotFound { path: PathBuf },

    #[error("Malformed XML in {}", .path.display())]
    #[diagnostic(code(overlayable::xml::malformed))]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Expected <{expected}> as the root element of {}, found {found}", .path.display())]
    #[diagnostic(code(overlayable::xml::unexpected_root))]
    UnexpectedRoot {
        path: PathBuf,
        expected: &'static str,
        found: String,
    },

    #[error("Unclosed element in {}", .path.display())]
    #[diagnostic(code(overlayable::xml::unclosed))]
    UnclosedElement { path: PathBuf },

    #[error("<{tag}> in {} is missing the `{attribute}` attribute", .path.display())]
    #[diagnostic(code(overlayable::xml::missing_attribute))]
    MissingAttribute {
        path: PathBuf,
        tag: String,
        attribute: &'static str,
    },

    #[error("Failed to build the manifest document")]
    #[diagnostic(code(overlayable::generate::emit))]
    Emit {
        #[source]
        source: quick_xml::Error,
    },
}

pub type Result<T> = std::result::Result<T, OverlayableError>;

impl OverlayableError {
    pub(crate) fn xml(path: &std::path::Path, source: quick_xml::Error) -> Self {
        Self::Xml {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn missing_attribute(
        path: &std::path::Path,
        tag: &str,
        attribute: &'static str,
    ) -> Self {
        Self::MissingAttribute {
            path: path.to_path_buf(),
            tag: tag.to_string(),
            attribute,
        }
    }
}
