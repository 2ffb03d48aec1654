//! Diagnostic statistics reported alongside a stitch plan.

use serde::Serialize;
use stitchkit_core::units;
use stitchkit_core::{Bounds, Point};
use tracing::info;

/// Counts and geometry gathered while building a plan.
///
/// Purely informational; nothing here feeds back into the plan itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanStatistics {
    /// Number of input points
    pub point_count: usize,
    /// Points reached directly: the initial positioning move plus every
    /// in-range stitch
    pub stitch_count: usize,
    /// Long jumps that were split into trim-and-move chains
    pub jump_count: usize,
    /// Length of the emitted instruction stream
    pub instruction_count: usize,
    /// Raw bounds of the input, before centering
    pub bounds: Bounds,
    /// Center subtracted from every input point
    pub center: Point,
}

impl PlanStatistics {
    pub(crate) fn new(point_count: usize, bounds: Bounds) -> Self {
        Self {
            point_count,
            stitch_count: 0,
            jump_count: 0,
            instruction_count: 0,
            center: bounds.center(),
            bounds,
        }
    }

    /// Design width in millimeters
    pub fn width_mm(&self) -> f64 {
        units::to_mm(self.bounds.width())
    }

    /// Design height in millimeters
    pub fn height_mm(&self) -> f64 {
        units::to_mm(self.bounds.height())
    }

    /// Emit the statistics through `tracing`
    pub fn log(&self) {
        info!(
            "Raw bounds: ({}, {}) to ({}, {})",
            self.bounds.min_x, self.bounds.min_y, self.bounds.max_x, self.bounds.max_y
        );
        info!(
            "Design size: {:.1}mm x {:.1}mm",
            self.width_mm(),
            self.height_mm()
        );
        info!(
            "Center: ({:.1}mm, {:.1}mm)",
            units::to_mm(self.center.x),
            units::to_mm(self.center.y)
        );
        info!(
            "Plan created: {} stitches, {} jumps, {} instructions",
            self.stitch_count, self.jump_count, self.instruction_count
        );
    }
}
