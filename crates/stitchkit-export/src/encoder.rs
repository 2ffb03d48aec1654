//! Pattern encoders.
//!
//! An encoder turns a finished [`EmbroideryPattern`] into the bytes of one
//! file format. Machine-specific binary writers plug in through
//! [`PatternEncoder`]; the crate ships a JSON document writer and a
//! line-oriented stitch list.

use crate::pattern::EmbroideryPattern;
use serde::Serialize;
use std::fmt;
use stitchkit_core::{Bounds, EncodingError, Instruction};

/// Writes a pattern in one file format.
pub trait PatternEncoder: Send + Sync {
    /// Short format identifier used to select the encoder, e.g. `"json"`
    fn format(&self) -> &'static str;

    /// File extension without the leading dot
    fn extension(&self) -> &'static str;

    /// Encoder version reported by capability checks
    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn mime_type(&self) -> &'static str {
        "application/octet-stream"
    }

    /// Serialize the whole pattern.
    fn encode(&self, pattern: &EmbroideryPattern) -> Result<Vec<u8>, EncodingError>;
}

/// Writes the pattern as a pretty-printed JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPatternEncoder;

#[derive(Serialize)]
struct JsonDocument<'a> {
    format: &'static str,
    version: u32,
    #[serde(flatten)]
    pattern: &'a EmbroideryPattern,
    bounds: Option<Bounds>,
}

impl PatternEncoder for JsonPatternEncoder {
    fn format(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn encode(&self, pattern: &EmbroideryPattern) -> Result<Vec<u8>, EncodingError> {
        let document = JsonDocument {
            format: "stitchkit",
            version: 1,
            pattern,
            bounds: pattern.bounds(),
        };
        serde_json::to_vec_pretty(&document).map_err(|e| EncodingError::Failed {
            format: self.format().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Writes a plain-text listing: `#` header lines followed by one
/// `KIND,x,y` line per instruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct StitchListEncoder;

impl StitchListEncoder {
    /// Writes the full listing for `pattern` into `out`.
    pub fn encode_into<W: fmt::Write>(
        &self,
        out: &mut W,
        pattern: &EmbroideryPattern,
    ) -> Result<(), EncodingError> {
        Self::write_listing(out, pattern).map_err(|e| EncodingError::Failed {
            format: self.format().to_string(),
            reason: e.to_string(),
        })
    }

    fn write_listing<W: fmt::Write>(out: &mut W, pattern: &EmbroideryPattern) -> fmt::Result {
        let plan = pattern.plan();

        writeln!(out, "# name: {}", pattern.metadata.name)?;
        writeln!(out, "# author: {}", pattern.metadata.author)?;
        for (index, thread) in pattern.threads.iter().enumerate() {
            writeln!(out, "# thread {}: {}", index, thread)?;
        }
        if let Some(bounds) = pattern.bounds() {
            writeln!(
                out,
                "# bounds: {},{} {},{}",
                bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y
            )?;
        }
        writeln!(out, "# instructions: {}", plan.len())?;

        for instruction in plan {
            Self::write_instruction(out, instruction)?;
        }
        Ok(())
    }

    fn write_instruction<W: fmt::Write>(out: &mut W, instruction: &Instruction) -> fmt::Result {
        writeln!(
            out,
            "{},{},{}",
            instruction.kind.mnemonic(),
            instruction.x,
            instruction.y
        )
    }
}

impl PatternEncoder for StitchListEncoder {
    fn format(&self) -> &'static str {
        "txt"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn encode(&self, pattern: &EmbroideryPattern) -> Result<Vec<u8>, EncodingError> {
        let mut out = String::with_capacity(pattern.plan().len() * 16 + 128);
        self.encode_into(&mut out, pattern)?;
        Ok(out.into_bytes())
    }
}
