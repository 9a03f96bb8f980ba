//! Uno Icons CLI - regenerate the icon package
//!
//! Clears the output directory, then writes every icon, `index.json` and
//! `types.ts`. Returns non-zero on any failure.

use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

use uno_icons::{GeneratorConfig, IconPipeline};

#[derive(Parser)]
#[command(name = "uno-icons")]
#[command(about = "Uno Icons - generate the SVG icon library")]
struct Cli {
    /// Path to a JSON config file (replaces the built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides `output_dir` from the config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug detail
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => match GeneratorConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GeneratorConfig::default(),
    };

    let config = match cli.output {
        Some(output) => config.with_output_dir(output),
        None => config,
    };

    let pipeline = IconPipeline::new(config);

    match pipeline.run() {
        Ok(report) => {
            info!(
                "Wrote {} icons, {}, {} into {}",
                report.icons_written,
                report.manifest_path.display(),
                report.types_path.display(),
                report.output_dir.display(),
            );
            info!("Output digest: sha256:{}", report.digest);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Icon generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
