use bmp565::BmpPermissiveness;
use bmp565::batch::{self, BatchOptions};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(about = "Convert BMP assets to raw RGB565 data")]
struct Args {
    /// Directory containing BMP files
    #[arg(default_value = "assets_src")]
    source: PathBuf,
    /// Destination directory for RGB565 output (default: same as source)
    destination: Option<PathBuf>,
    /// Extension for generated files
    #[arg(long, default_value = batch::DEFAULT_EXTENSION)]
    extension: String,
    /// Required image width
    #[arg(long, default_value_t = bmp565::DEFAULT_WIDTH)]
    width: u32,
    /// Required image height
    #[arg(long, default_value_t = bmp565::DEFAULT_HEIGHT)]
    height: u32,
    /// Reject non-standard BI_BITFIELDS masks and bad pixel offsets
    #[arg(long)]
    strict: bool,
    /// Log per-run details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let source_dir = args.source.canonicalize().unwrap_or(args.source);
    let options = BatchOptions {
        dest_dir: args.destination,
        extension: args.extension,
        width: args.width,
        height: args.height,
        permissiveness: if args.strict {
            BmpPermissiveness::Strict
        } else {
            BmpPermissiveness::Standard
        },
        ..BatchOptions::new(source_dir)
    };

    info!("{}", "=".repeat(60));
    info!("Converting BMP assets to RGB565 raw format");
    info!(" Source: {}", options.source_dir.display());
    info!(" Dest:   {}", options.dest_dir().display());
    info!("{}", "=".repeat(60));

    let report = match batch::convert_dir(&options) {
        Ok(report) => report,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let failed = report.failed().count();
    info!("{}", "=".repeat(60));
    if failed == 0 {
        info!("Conversion complete.");
        ExitCode::SUCCESS
    } else {
        error!(
            "Conversion finished with {failed} of {} files failing.",
            report.outcomes.len()
        );
        ExitCode::FAILURE
    }
}
