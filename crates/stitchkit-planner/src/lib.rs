//! # Stitchkit Planner
//!
//! Turns the ordered point list produced by a design tool into a machine
//! instruction stream.
//!
//! - **Input**: decoding of JSON point lists with per-point validation
//! - **Builder**: centering, stitch/jump classification and long-jump
//!   segmentation
//! - **Statistics**: diagnostic counts reported alongside each plan

pub mod builder;
pub mod input;
pub mod stats;

pub use builder::StitchPlanBuilder;
pub use input::{parse_points, parse_request};
pub use stats::PlanStatistics;
