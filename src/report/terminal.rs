use crate::resource::Resource;
use crate::verify::Verification;
use colored::Colorize;
use miette::Result;

/// Binary users are pointed at when the manifest is stale
pub const REGENERATE_COMMAND: &str = "generate-overlayable";

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    /// Print the report; an up-to-date manifest prints nothing
    pub fn report<F>(&self, verification: &Verification, manifest: &str, origin: F) -> Result<()>
    where
        F: Fn(&Resource) -> Option<String>,
    {
        print!("{}", self.render(verification, manifest, origin));
        Ok(())
    }

    pub fn render<F>(&self, verification: &Verification, manifest: &str, origin: F) -> String
    where
        F: Fn(&Resource) -> Option<String>,
    {
        if verification.is_up_to_date() {
            return String::new();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{}\n\n",
            format!(
                "{} is out of date: {} added, {} removed",
                manifest,
                verification.added.len(),
                verification.removed.len()
            )
            .yellow()
            .bold()
        ));

        if !verification.removed.is_empty() {
            out.push_str(&format!("{}\n", "Removed resources:".red().bold()));
            for resource in &verification.removed {
                out.push_str(&format!("  {} {}\n", "-".red(), resource));
            }
            out.push('\n');
        }

        if !verification.added.is_empty() {
            out.push_str(&format!("{}\n", "Added resources:".green().bold()));
            for resource in &verification.added {
                match origin(resource) {
                    Some(file) => out.push_str(&format!(
                        "  {} {} {}\n",
                        "+".green(),
                        resource,
                        format!("({})", file).dimmed()
                    )),
                    None => out.push_str(&format!("  {} {}\n", "+".green(), resource)),
                }
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "Run {} to regenerate {}.\n",
            REGENERATE_COMMAND.cyan().bold(),
            manifest
        ));
        out
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
