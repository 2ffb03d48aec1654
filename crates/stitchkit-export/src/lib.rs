//! # Stitchkit Export
//!
//! Wraps a finished stitch plan into an embroidery pattern and hands it to
//! a file encoder.
//!
//! - **Pattern**: design metadata, the default thread, and the plan
//! - **Encoders**: the `PatternEncoder` seam plus the built-in JSON and
//!   stitch-list writers
//! - **Registry**: encoder availability, probed once at startup
//! - **Service**: one request from raw body to encoded bytes

pub mod encoder;
pub mod pattern;
pub mod registry;
pub mod service;

pub use encoder::{JsonPatternEncoder, PatternEncoder, StitchListEncoder};
pub use pattern::{EmbroideryPattern, Metadata, Rgb, Thread};
pub use registry::{Capabilities, EncoderInfo, EncoderRegistry};
pub use service::{ExportOptions, ExportOutput, ExportService};
