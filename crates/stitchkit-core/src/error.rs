//! Error handling for Stitchkit
//!
//! Provides error types for each stage of a conversion request:
//! - Plan errors (input validation while building a stitch plan)
//! - Encoding errors (encoder availability and serialization)
//!
//! All error types use `thiserror` for ergonomic error handling. Every
//! failure is local to a single request and none is retried automatically.

use serde::Serialize;
use thiserror::Error;

/// Stitch plan error type
///
/// Raised while turning a request's point list into a stitch plan.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// The point list is empty or missing, or a build parameter is unusable
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// The reason the input was rejected.
        reason: String,
    },

    /// A point lacks a numeric coordinate
    #[error("Malformed point at index {index}: {reason}")]
    MalformedPoint {
        /// Position of the offending point in the input list.
        index: usize,
        /// What is wrong with the point.
        reason: String,
    },
}

impl PlanError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn malformed_point(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedPoint {
            index,
            reason: reason.into(),
        }
    }
}

/// Encoding error type
///
/// Represents failures of the encoder collaborator that turns a finished
/// pattern into file bytes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    /// No encoder is registered for the requested format
    #[error("Encoder for format '{format}' is not available")]
    Unavailable {
        /// The requested output format.
        format: String,
    },

    /// The encoder ran but did not produce a usable file
    #[error("Failed to encode {format} file: {reason}")]
    Failed {
        /// The output format being written.
        format: String,
        /// The reason encoding failed.
        reason: String,
    },
}

/// Main error type for Stitchkit
///
/// A unified error type that can represent any error from a conversion
/// request. This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation error
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Encoder error
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this error was caused by the caller's input
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Plan(_) | Error::Json(_))
    }

    /// Check if this is a service-level failure (encoder missing or broken)
    pub fn is_service_error(&self) -> bool {
        !self.is_input_error()
    }

    /// Check if the requested encoder is missing
    pub fn is_encoding_unavailable(&self) -> bool {
        matches!(self, Error::Encoding(EncodingError::Unavailable { .. }))
    }

    /// Short machine-readable category name
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Plan(PlanError::InvalidInput { .. }) => "invalid_input",
            Error::Plan(PlanError::MalformedPoint { .. }) => "malformed_point",
            Error::Encoding(EncodingError::Unavailable { .. }) => "encoding_unavailable",
            Error::Encoding(EncodingError::Failed { .. }) => "encoding_failed",
            Error::Json(_) => "invalid_request",
        }
    }

    /// Structured description suitable for returning to a caller
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            error: self.to_string(),
            kind: self.kind().to_string(),
        }
    }
}

/// Serializable error description returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// Human-readable message
    pub error: String,
    /// Error category, see [`Error::kind`]
    pub kind: String,
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
