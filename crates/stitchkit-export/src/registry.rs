//! Encoder availability.
//!
//! The set of usable encoders is determined once, when the process starts,
//! and then passed by value to whatever serves requests.

use crate::encoder::{JsonPatternEncoder, PatternEncoder, StitchListEncoder};
use serde::Serialize;
use std::sync::Arc;
use stitchkit_core::EncodingError;
use tracing::info;

/// Description of one available encoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncoderInfo {
    pub format: String,
    pub extension: String,
    pub version: String,
}

/// Result of a capability check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub status: String,
    pub version: String,
    pub encoders: Vec<EncoderInfo>,
}

impl Capabilities {
    pub fn supports(&self, format: &str) -> bool {
        self.encoders
            .iter()
            .any(|e| e.format.eq_ignore_ascii_case(format))
    }
}

/// Encoders available to this process, keyed by format.
#[derive(Clone, Default)]
pub struct EncoderRegistry {
    encoders: Vec<Arc<dyn PatternEncoder>>,
}

impl std::fmt::Debug for EncoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.encoders.iter().map(|e| e.format()))
            .finish()
    }
}

impl EncoderRegistry {
    /// A registry with no encoders at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers every built-in encoder and logs what is available.
    pub fn probe() -> Self {
        let mut registry = Self::empty();
        registry.register(JsonPatternEncoder);
        registry.register(StitchListEncoder);

        for encoder in &registry.encoders {
            info!(
                "Encoder available: {} v{} (.{})",
                encoder.format(),
                encoder.version(),
                encoder.extension()
            );
        }
        registry
    }

    /// Adds an encoder, replacing any existing encoder for the same format.
    pub fn register<E: PatternEncoder + 'static>(&mut self, encoder: E) {
        self.encoders
            .retain(|e| !e.format().eq_ignore_ascii_case(encoder.format()));
        self.encoders.push(Arc::new(encoder));
    }

    pub fn get(&self, format: &str) -> Option<&dyn PatternEncoder> {
        self.encoders
            .iter()
            .find(|e| e.format().eq_ignore_ascii_case(format))
            .map(|e| &**e)
    }

    /// Looks up an encoder, failing with [`EncodingError::Unavailable`].
    pub fn require(&self, format: &str) -> Result<&dyn PatternEncoder, EncodingError> {
        self.get(format).ok_or_else(|| EncodingError::Unavailable {
            format: format.to_string(),
        })
    }

    pub fn is_available(&self, format: &str) -> bool {
        self.get(format).is_some()
    }

    pub fn formats(&self) -> Vec<&'static str> {
        self.encoders.iter().map(|e| e.format()).collect()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            encoders: self
                .encoders
                .iter()
                .map(|e| EncoderInfo {
                    format: e.format().to_string(),
                    extension: e.extension().to_string(),
                    version: e.version().to_string(),
                })
                .collect(),
        }
    }
}
