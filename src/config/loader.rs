use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration shared by generate-overlayable and verify-overlayable
///
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Resource directory to scan
    pub res_dir: PathBuf,

    /// Generated manifest file
    pub manifest: PathBuf,

    /// Overlayable file listing resources exposed through another mechanism
    pub exclusions: PathBuf,

    /// Name of the `<overlayable>` element
    pub overlayable_name: String,

    /// Policy type of the `<policy>` element
    pub policy: String,

    /// Patterns of resource files to skip while scanning
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            res_dir: PathBuf::from("res"),
            manifest: PathBuf::from("res/values/overlayable.xml"),
            exclusions: PathBuf::from("chassis_overlayable.xml"),
            overlayable_name: "CarSettings".to_string(),
            policy: "public".to_string(),
            exclude: vec![],
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".overlayable.toml",
            ".overlayable.yml",
            ".overlayable.yaml",
            "overlayable.toml",
            "overlayable.yml",
            "overlayable.yaml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.is_file() {
                tracing::debug!("Using config file {}", path.display());
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    pub fn res_dir_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.res_dir)
    }

    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.manifest)
    }

    pub fn exclusions_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.exclusions)
    }

    /// Check if a resource file, given relative to `res_dir`, matches one of
    /// the exclude patterns
    pub fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy().replace('\\', "/");
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        self.exclude
            .iter()
            .any(|pattern| glob_match(pattern, &path_str) || glob_match(pattern, &file_name))
    }
}

/// Simple glob matching for patterns like "*_test.xml" or "**/values-xx/**"
fn glob_match(pattern: &str, text: &str) -> bool {
    if pattern.starts_with('*') && !pattern.contains('/') {
        // "*.png" matches "icon.png"
        return text.ends_with(&pattern[1..]);
    }

    if pattern.ends_with('*') && !pattern.contains('/') {
        // "debug_*" matches "debug_strings.xml"
        return text.starts_with(&pattern[..pattern.len() - 1]);
    }

    if pattern.contains("**") {
        // "**/values-xx/**" matches a complete directory name anywhere in the path
        if pattern.starts_with("**/") && pattern.ends_with("/**") {
            let dir_name = pattern.trim_start_matches("**/").trim_end_matches("/**");
            return text.starts_with(&format!("{}/", dir_name))
                || text.contains(&format!("/{}/", dir_name));
        }

        let parts: Vec<&str> = pattern.split("**").collect();
        if parts.len() == 2 {
            let prefix = parts[0].trim_end_matches('/');
            let suffix = parts[1].trim_start_matches('/');

            if prefix.is_empty() && suffix.is_empty() {
                return true;
            }

            if prefix.is_empty() {
                return text.ends_with(suffix) || text.contains(&format!("/{}", suffix));
            }

            if suffix.is_empty() {
                return text.starts_with(prefix) || text.contains(&format!("{}/", prefix));
            }

            return (text.starts_with(prefix) || text.contains(&format!("/{}/", prefix)))
                && (text.ends_with(suffix) || text.contains(&format!("/{}", suffix)));
        }
    }

    text == pattern
}
