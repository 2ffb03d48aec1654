//! # Stitchkit Core
//!
//! Core types and utilities for Stitchkit.
//! Provides the point and instruction data model shared by the planner and
//! the exporters, unit helpers for tenths of a millimeter, and the error
//! taxonomy used across the workspace.

pub mod data;
pub mod error;
pub mod instruction;
pub mod units;

pub use data::{Bounds, Point};

pub use instruction::{Instruction, InstructionKind, StitchPlan, DEFAULT_MAX_STITCH_DISTANCE};

pub use error::{EncodingError, Error, ErrorReport, PlanError, Result};
