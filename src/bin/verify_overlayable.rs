use clap::Parser;
use miette::Result;
use std::path::PathBuf;
use tracing::info;

use overlayable::cli::{init_logging, CommonArgs};
use overlayable::{verify, ReportFormat, Reporter, ResourceScanner};

/// Check that overlayable.xml matches the resources declared under res/
#[derive(Parser, Debug)]
#[command(name = "verify-overlayable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.common.verbose, cli.common.quiet);
    info!("verify-overlayable v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.common.load_config()?;
    let root = &cli.common.path;

    let scanner = ResourceScanner::new(&config);
    let scan = scanner.scan(&config.res_dir_path(root))?;
    let exclusions = scanner.load_exclusions(&config.exclusions_path(root))?;
    let manifest = config.manifest_path(root);
    let committed = scanner.load_manifest(&manifest)?;

    let live = scan.resources.without(&exclusions);
    let verification = verify(&committed, &live);

    let reporter = Reporter::new(cli.format.into(), cli.output.clone(), root.clone());
    reporter.report(&verification, &scan.origins, &manifest)?;

    if !verification.is_up_to_date() {
        info!("{} resources changed", verification.total_changes());
        std::process::exit(1);
    }

    info!("{} is up to date", manifest.display());
    Ok(())
}
