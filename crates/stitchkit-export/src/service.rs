//! Conversion requests, from raw request body to encoded file.

use crate::encoder::PatternEncoder;
use crate::pattern::{EmbroideryPattern, Metadata, Thread};
use crate::registry::EncoderRegistry;
use serde_json::Value;
use stitchkit_core::{EncodingError, Point, Result, DEFAULT_MAX_STITCH_DISTANCE};
use stitchkit_planner::{parse_request, PlanStatistics, StitchPlanBuilder};
use tracing::{debug, info, warn};

/// Per-request export parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Encoder format identifier
    pub format: String,
    /// Maximum single-instruction travel, in tenths of a millimeter
    pub max_stitch_distance: f64,
    pub metadata: Metadata,
    /// Thread attached to the pattern
    pub thread: Thread,
    /// Output file name without extension
    pub file_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            max_stitch_distance: DEFAULT_MAX_STITCH_DISTANCE,
            metadata: Metadata::default(),
            thread: Thread::default(),
            file_stem: "embroidery".to_string(),
        }
    }
}

/// An encoded design
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutput {
    pub bytes: Vec<u8>,
    /// Suggested download name, e.g. `embroidery.json`
    pub file_name: String,
    pub mime_type: String,
    pub statistics: PlanStatistics,
}

/// Runs conversion requests against a fixed set of encoders.
///
/// Holds no per-request state; one service can handle concurrent requests.
#[derive(Debug, Clone)]
pub struct ExportService {
    registry: EncoderRegistry,
}

impl ExportService {
    /// Creates a service over the encoders probed at startup.
    pub fn new(registry: EncoderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &EncoderRegistry {
        &self.registry
    }

    /// Exports a raw JSON request body.
    pub fn export_bytes(&self, body: &[u8], options: &ExportOptions) -> Result<ExportOutput> {
        let encoder = self.registry.require(&options.format)?;
        let value: Value = serde_json::from_slice(body)?;
        let points = parse_request(&value)?;
        self.run(encoder, &points, options)
    }

    /// Exports an already-decoded JSON request.
    pub fn export_value(&self, body: &Value, options: &ExportOptions) -> Result<ExportOutput> {
        let encoder = self.registry.require(&options.format)?;
        let points = parse_request(body)?;
        self.run(encoder, &points, options)
    }

    /// Exports a list of points.
    pub fn export_points(&self, points: &[Point], options: &ExportOptions) -> Result<ExportOutput> {
        let encoder = self.registry.require(&options.format)?;
        self.run(encoder, points, options)
    }

    fn run(
        &self,
        encoder: &dyn PatternEncoder,
        points: &[Point],
        options: &ExportOptions,
    ) -> Result<ExportOutput> {
        info!("Received {} stitches for export", points.len());

        let builder = StitchPlanBuilder::new(options.max_stitch_distance);
        let (plan, statistics) = builder.build_with_statistics(points)?;
        statistics.log();

        let pattern = EmbroideryPattern::with_thread(
            options.metadata.clone(),
            options.thread.clone(),
            plan,
        );
        if let Some(bounds) = pattern.bounds() {
            debug!("Pattern bounds: {}", bounds);
        }

        let bytes = encoder.encode(&pattern)?;
        if bytes.is_empty() {
            warn!("{} encoder produced no output", encoder.format());
            return Err(EncodingError::Failed {
                format: encoder.format().to_string(),
                reason: "encoder produced no output".to_string(),
            }
            .into());
        }
        info!("{} file generated: {} bytes", encoder.format(), bytes.len());

        Ok(ExportOutput {
            bytes,
            file_name: format!("{}.{}", options.file_stem, encoder.extension()),
            mime_type: encoder.mime_type().to_string(),
            statistics,
        })
    }
}
