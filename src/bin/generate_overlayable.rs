use clap::Parser;
use colored::Colorize;
use miette::Result;
use tracing::info;

use overlayable::cli::{init_logging, CommonArgs};
use overlayable::{ManifestGenerator, ResourceScanner};

/// Regenerate overlayable.xml from the resources declared under res/
#[derive(Parser, Debug)]
#[command(name = "generate-overlayable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Copyright year for the header (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Print the manifest instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.common.verbose, cli.common.quiet);
    info!("generate-overlayable v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.common.load_config()?;
    let root = &cli.common.path;

    let scanner = ResourceScanner::new(&config);
    let scan = scanner.scan(&config.res_dir_path(root))?;
    let exclusions = scanner.load_exclusions(&config.exclusions_path(root))?;

    let mut generator = ManifestGenerator::new(&config.overlayable_name).with_policy(&config.policy);
    if let Some(year) = cli.year {
        generator = generator.with_year(year);
    }

    let overlayable = generator.project(&scan.resources, &exclusions);
    let document = generator.render(&overlayable)?;

    if cli.dry_run {
        print!("{}", document);
        return Ok(());
    }

    let manifest = config.manifest_path(root);
    generator.write(&document, &manifest)?;

    if !cli.common.quiet {
        println!(
            "{}",
            format!(
                "✓ Wrote {} ({} overlayable resources from {} files, {} excluded)",
                manifest.display(),
                overlayable.len(),
                scan.files_scanned,
                scan.resources.len() - overlayable.len()
            )
            .green()
        );
    }

    Ok(())
}
