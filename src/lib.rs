//! # Stitchkit
//!
//! Converts the stitch coordinates produced by a browser-based design tool
//! into embroidery machine instruction files.
//!
//! ## Architecture
//!
//! Stitchkit is organized as a workspace with multiple crates:
//!
//! 1. **stitchkit-core** - Points, instructions, stitch plans, errors
//! 2. **stitchkit-planner** - Request parsing and the stitch plan builder
//! 3. **stitchkit-export** - Patterns, encoders, encoder availability
//! 4. **stitchkit-settings** - Configuration files
//! 5. **stitchkit** - Command-line binary that integrates all crates

pub mod cli;

pub use stitchkit_core::{
    units, Bounds, EncodingError, Error, ErrorReport, Instruction, InstructionKind, PlanError,
    Point, Result, StitchPlan, DEFAULT_MAX_STITCH_DISTANCE,
};

pub use stitchkit_planner::{parse_points, parse_request, PlanStatistics, StitchPlanBuilder};

pub use stitchkit_export::{
    Capabilities, EmbroideryPattern, EncoderInfo, EncoderRegistry, ExportOptions, ExportOutput,
    ExportService, JsonPatternEncoder, Metadata, PatternEncoder, Rgb, StitchListEncoder, Thread,
};

pub use stitchkit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so command output on stdout stays machine-readable
/// - RUST_LOG environment variable support
/// - Pretty or JSON formatting
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
