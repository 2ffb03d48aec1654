//! Command-line interface.
//!
//! Usage:
//!     stitchkit export design.json -o design.txt --format txt
//!     stitchkit plan design.json --instructions
//!     stitchkit check

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use stitchkit_core::{units, InstructionKind};
use stitchkit_export::{EncoderRegistry, ExportOptions, ExportService};
use stitchkit_planner::{parse_request, StitchPlanBuilder};
use stitchkit_settings::Config;
use tracing::{error, info};

/// Stitchkit - embroidery machine files from design-tool stitches
#[derive(Debug, Parser)]
#[command(name = "stitchkit")]
#[command(version)]
#[command(about = "Convert stitch coordinates into embroidery machine files", long_about = None)]
pub struct Cli {
    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a stitch request into a machine file
    Export(ExportArgs),

    /// Build the stitch plan and print its statistics
    Plan(PlanArgs),

    /// Report which encoders are available
    Check,
}

/// Parameters shared by commands that build a plan
#[derive(Debug, Args)]
pub struct PlanningArgs {
    /// Request file: {"stitches": [...]} or a bare point array; "-" reads stdin
    pub input: PathBuf,

    /// Maximum stitch distance, in design units or with an "mm" suffix
    #[arg(long, value_parser = units::parse_distance)]
    pub max_stitch_distance: Option<f64>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub planning: PlanningArgs,

    /// Output file; defaults to embroidery.<ext> in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<String>,

    /// Design name stored in the file
    #[arg(long)]
    pub name: Option<String>,

    /// Author stored in the file
    #[arg(long)]
    pub author: Option<String>,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub planning: PlanningArgs,

    /// Also print every instruction
    #[arg(long)]
    pub instructions: bool,
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    info!("stitchkit {} (built {})", crate::VERSION, crate::BUILD_DATE);
    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;

    // Encoder availability is decided once, here, and handed to the service.
    let registry = EncoderRegistry::probe();

    match cli.command {
        Command::Export(args) => export(&ExportService::new(registry), &config, args),
        Command::Plan(args) => plan(&config, args),
        Command::Check => check(&registry),
    }
}

fn export(service: &ExportService, config: &Config, args: ExportArgs) -> anyhow::Result<ExitCode> {
    let options = export_options(config, &args);
    let body = read_input(&args.planning.input)?;

    let output = match service.export_bytes(&body, &options) {
        Ok(output) => output,
        Err(e) => return Ok(report_failure(&e)),
    };

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&output.file_name));
    std::fs::write(&path, &output.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} ({} bytes)", path.display(), output.bytes.len());
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn plan(config: &Config, args: PlanArgs) -> anyhow::Result<ExitCode> {
    let body = read_input(&args.planning.input)?;
    let max = args
        .planning
        .max_stitch_distance
        .unwrap_or(config.plan.max_stitch_distance);

    let result = serde_json::from_slice::<serde_json::Value>(&body)
        .map_err(stitchkit_core::Error::from)
        .and_then(|value| Ok(parse_request(&value)?))
        .and_then(|points| Ok(StitchPlanBuilder::new(max).build_with_statistics(&points)?));

    let (plan, stats) = match result {
        Ok(built) => built,
        Err(e) => return Ok(report_failure(&e)),
    };

    println!("Points:       {}", stats.point_count);
    println!("Stitches:     {}", stats.stitch_count);
    println!("Jumps:        {}", stats.jump_count);
    println!("Instructions: {}", plan.len());
    for kind in [
        InstructionKind::Move,
        InstructionKind::Stitch,
        InstructionKind::Trim,
        InstructionKind::End,
    ] {
        println!("  {:<10} {}", kind, plan.count(kind));
    }
    println!(
        "Size:         {} x {}",
        units::format_mm(stats.bounds.width()),
        units::format_mm(stats.bounds.height())
    );

    if args.instructions {
        for instruction in &plan {
            println!("{}", instruction);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn check(registry: &EncoderRegistry) -> anyhow::Result<ExitCode> {
    let capabilities = registry.capabilities();
    println!("{}", serde_json::to_string_pretty(&capabilities)?);
    Ok(ExitCode::SUCCESS)
}

/// Config values overridden by whatever was given on the command line
fn export_options(config: &Config, args: &ExportArgs) -> ExportOptions {
    let mut options = config.export_options();
    if let Some(format) = &args.format {
        options.format = format.clone();
    }
    if let Some(max) = args.planning.max_stitch_distance {
        options.max_stitch_distance = max;
    }
    if let Some(name) = &args.name {
        options.metadata.name = name.clone();
    }
    if let Some(author) = &args.author {
        options.metadata.author = author.clone();
    }
    options
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .context("Failed to read request from stdin")?;
        return Ok(body);
    }
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Prints the structured error and picks the exit status: 1 for bad input,
/// 2 for a service-side failure.
fn report_failure(err: &stitchkit_core::Error) -> ExitCode {
    error!("Request failed: {}", err);
    match serde_json::to_string(&err.report()) {
        Ok(report) => eprintln!("{}", report),
        Err(_) => eprintln!("{}", err),
    }
    if err.is_input_error() {
        ExitCode::from(1)
    } else {
        ExitCode::from(2)
    }
}
