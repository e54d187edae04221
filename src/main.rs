use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use svg_coords::{ExtractOptions, PathPolicy, ScanMode, extract, write_json};
use tracing_subscriber::EnvFilter;

/// Extract POI coordinates from a directory of SVG layouts into JSON
#[derive(Parser, Debug)]
#[command(name = "svg-coords", version)]
struct Cli {
    /// Directory containing the SVG files
    svg_dir: PathBuf,

    /// JSON file to write
    output_json: PathBuf,

    /// Which <path> elements of each file to read. Defaults to every path,
    /// unlike the old layout script which kept one path per file. Use
    /// --policy first to get that output back
    #[arg(long, value_enum, default_value_t = Policy::Every)]
    policy: Policy,

    /// How numbers are taken from path data
    #[arg(long, value_enum, default_value_t = Scan::Numbers)]
    scan: Scan,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// First path of each file, keyed by file name
    First,
    /// Every path, keyed by id or file name
    Every,
    /// Last path of each file only (legacy layout output)
    Last,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scan {
    /// All signed decimal numbers, paired in order
    Numbers,
    /// Only explicit x,y pairs
    CommaPairs,
}

impl From<Policy> for PathPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::First => PathPolicy::First,
            Policy::Every => PathPolicy::Every,
            Policy::Last => PathPolicy::Last,
        }
    }
}

impl From<Scan> for ScanMode {
    fn from(scan: Scan) -> Self {
        match scan {
            Scan::Numbers => ScanMode::Numbers,
            Scan::CommaPairs => ScanMode::CommaPairs,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("svg_coords=info")),
        )
        .with_target(false)
        .init();

    let options = ExtractOptions {
        policy: cli.policy.into(),
        scan: cli.scan.into(),
    };

    let extraction = match extract(&cli.svg_dir, options) {
        Ok(extraction) => extraction,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = write_json(&extraction.coordinates, &cli.output_json) {
        eprintln!("Error: {}", e);
        process::exit(3);
    }

    println!(
        "Extracted coordinates for {} POI types to {}",
        extraction.coordinates.len(),
        cli.output_json.display()
    );
}
