//! VectorCut command-line interface

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use vectorcut::{
    convert_svg_file, estimate_breakdown, init_logging, Config, GCodeValidator, SvgParser,
};

#[derive(Parser)]
#[command(name = "vectorcut")]
#[command(about = "Convert SVG drawings into G-Code")]
#[command(version)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an SVG file to G-Code
    Convert(ConvertArgs),

    /// Check a G-Code file for unrecognized lines
    Validate {
        /// G-Code file
        file: PathBuf,
    },

    /// Estimate the run time of a G-Code file
    Estimate {
        /// G-Code file
        file: PathBuf,

        /// Configuration file (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the parsed elements of an SVG file as JSON
    Inspect {
        /// SVG file
        input: PathBuf,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
struct ConvertArgs {
    /// SVG file to convert
    input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scale factor applied to X/Y
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f64>,

    /// X offset after scaling (mm)
    #[arg(long, allow_negative_numbers = true)]
    x_offset: Option<f64>,

    /// Y offset after scaling (mm)
    #[arg(long, allow_negative_numbers = true)]
    y_offset: Option<f64>,

    /// Cutting feed rate (mm/min)
    #[arg(long)]
    feed: Option<f64>,

    /// Laser power or spindle speed
    #[arg(long)]
    power: Option<u32>,

    /// Fractional digits in coordinates
    #[arg(long)]
    decimals: Option<usize>,

    /// Omit comments from the program
    #[arg(long)]
    no_comments: bool,

    /// Spindle mode instead of laser mode
    #[arg(long)]
    spindle: bool,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Write a default configuration file
    Init {
        /// Destination (platform config directory when omitted)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load_or_default().context("Failed to load default config"),
    }
}

fn convert(args: ConvertArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    let gcode = &mut config.gcode;
    if let Some(scale) = args.scale {
        gcode.scale_factor = scale;
    }
    if let Some(x) = args.x_offset {
        gcode.x_offset = x;
    }
    if let Some(y) = args.y_offset {
        gcode.y_offset = y;
    }
    if let Some(feed) = args.feed {
        gcode.cut_feed_rate = feed;
    }
    if let Some(power) = args.power {
        gcode.laser_power = power;
    }
    if let Some(decimals) = args.decimals {
        gcode.decimal_places = decimals;
    }
    if args.no_comments {
        gcode.include_comments = false;
    }
    if args.spindle {
        gcode.use_laser_mode = false;
    }

    let report = convert_svg_file(&args.input, &config.gcode, &config.flattening)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &report.gcode)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", report.gcode),
    }

    info!(
        "{} elements, valid: {}, estimated time: {:.1}s",
        report.element_count,
        report.valid,
        report.estimated_seconds()
    );
    if !report.valid {
        warn!("Generated program did not pass validation");
    }
    Ok(())
}

fn validate(file: &Path) -> anyhow::Result<()> {
    let gcode = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    if let Err(e) = GCodeValidator::new().check(&gcode) {
        bail!("{}: {}", file.display(), e);
    }
    println!("{}: valid", file.display());
    Ok(())
}

fn estimate(file: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let gcode = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let estimate = estimate_breakdown(&gcode, &config.gcode);

    println!(
        "Rapid moves:   {:>10.2} mm {:>10.1} s",
        estimate.rapid_distance, estimate.rapid_seconds
    );
    println!(
        "Cutting moves: {:>10.2} mm {:>10.1} s",
        estimate.cut_distance, estimate.cut_seconds
    );
    println!("Total:         {:>24.1} s", estimate.total_seconds());
    Ok(())
}

fn inspect(input: &Path) -> anyhow::Result<()> {
    let config = load_config(None)?;
    let elements = SvgParser::with_flattening(config.flattening)
        .parse_file(input)
        .with_context(|| format!("Failed to parse {}", input.display()))?;
    println!("{}", serde_json::to_string_pretty(&elements)?);
    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(Config::default_path);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Convert(args) => convert(args),
        Commands::Validate { file } => validate(&file),
        Commands::Estimate { file, config } => estimate(&file, config.as_deref()),
        Commands::Inspect { input } => inspect(&input),
        Commands::Config(ConfigCommand::Init { path, force }) => init_config(path, force),
    }
}
