//! Stitch plan construction.
//!
//! Converts an ordered point cloud into a centered instruction stream in
//! which no single move exceeds the machine's maximum stitch distance.
//!
//! Coordinates are rounded half away from zero (`f64::round`) both when
//! centering input points and when interpolating long-jump sub-steps.

use crate::stats::PlanStatistics;
use stitchkit_core::{
    Bounds, Instruction, PlanError, Point, StitchPlan, DEFAULT_MAX_STITCH_DISTANCE,
};
use tracing::debug;

/// Builds stitch plans for a fixed maximum stitch distance.
///
/// The builder holds no per-request state and can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StitchPlanBuilder {
    max_stitch_distance: f64,
}

impl Default for StitchPlanBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STITCH_DISTANCE)
    }
}

impl StitchPlanBuilder {
    /// Creates a builder for the given maximum stitch distance, in tenths of
    /// a millimeter. The distance is validated when a plan is built.
    pub fn new(max_stitch_distance: f64) -> Self {
        Self {
            max_stitch_distance,
        }
    }

    pub fn max_stitch_distance(&self) -> f64 {
        self.max_stitch_distance
    }

    /// Builds the instruction stream for `points`.
    ///
    /// Fails with [`PlanError::InvalidInput`] when `points` is empty, and with
    /// [`PlanError::MalformedPoint`] when a point is not finite or its centered
    /// coordinates do not fit the machine's `i32` coordinate range.
    pub fn build(&self, points: &[Point]) -> Result<StitchPlan, PlanError> {
        self.build_with_statistics(points).map(|(plan, _)| plan)
    }

    /// Builds the instruction stream and returns diagnostic statistics with it.
    pub fn build_with_statistics(
        &self,
        points: &[Point],
    ) -> Result<(StitchPlan, PlanStatistics), PlanError> {
        self.validate_distance()?;

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(PlanError::malformed_point(
                index,
                "coordinates must be finite numbers",
            ));
        }

        let bounds = Bounds::from_points(points)
            .ok_or_else(|| PlanError::invalid_input("No stitches provided"))?;
        let center = bounds.center();
        let mut stats = PlanStatistics::new(points.len(), bounds);

        let mut instructions = Vec::with_capacity(points.len() + 1);
        let mut last: Option<(i32, i32)> = None;

        for (index, p) in points.iter().enumerate() {
            let target = match (
                centered_unit(p.x - center.x),
                centered_unit(p.y - center.y),
            ) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    return Err(PlanError::malformed_point(
                        index,
                        "centered coordinates exceed the machine coordinate range",
                    ))
                }
            };

            let Some(from) = last else {
                instructions.push(Instruction::move_to(target.0, target.1));
                stats.stitch_count += 1;
                last = Some(target);
                continue;
            };

            let dx = i64::from(target.0) - i64::from(from.0);
            let dy = i64::from(target.1) - i64::from(from.1);
            let dist = (dx as f64).hypot(dy as f64);

            if dist <= self.max_stitch_distance {
                instructions.push(Instruction::stitch(target.0, target.1));
                stats.stitch_count += 1;
            } else {
                self.push_long_jump(&mut instructions, from, (dx, dy), dist);
                stats.jump_count += 1;
            }

            // Snap to the true target, not the last interpolated sub-step.
            last = Some(target);
        }

        let (end_x, end_y) = last.unwrap_or_default();
        instructions.push(Instruction::end(end_x, end_y));
        stats.instruction_count = instructions.len();

        Ok((StitchPlan::from_instructions(instructions), stats))
    }

    fn validate_distance(&self) -> Result<(), PlanError> {
        if self.max_stitch_distance.is_finite() && self.max_stitch_distance > 0.0 {
            Ok(())
        } else {
            Err(PlanError::invalid_input(format!(
                "Maximum stitch distance must be a positive number, got {}",
                self.max_stitch_distance
            )))
        }
    }

    /// Trims at `from`, then moves to the target in equal sub-steps.
    ///
    /// Each sub-step is interpolated from `from` rather than from the
    /// previous sub-step, so rounding does not accumulate along the chain.
    fn push_long_jump(
        &self,
        instructions: &mut Vec<Instruction>,
        from: (i32, i32),
        (dx, dy): (i64, i64),
        dist: f64,
    ) {
        let steps = (dist / self.max_stitch_distance).floor() as u64 + 1;
        debug!(
            "Splitting jump of {:.1} units from ({}, {}) into {} moves",
            dist, from.0, from.1, steps
        );

        instructions.push(Instruction::trim(from.0, from.1));
        for step in 1..=steps {
            let fraction = step as f64 / steps as f64;
            let step_x = round_unit(f64::from(from.0) + dx as f64 * fraction);
            let step_y = round_unit(f64::from(from.1) + dy as f64 * fraction);
            instructions.push(Instruction::move_to(step_x, step_y));
        }
    }
}

/// Round to the nearest whole design unit, ties away from zero.
///
/// `value` must lie between two in-range coordinates.
fn round_unit(value: f64) -> i32 {
    value.round() as i32
}

/// Rounds a centered coordinate, or `None` when it does not fit in `i32`.
fn centered_unit(value: f64) -> Option<i32> {
    let rounded = value.round();
    (rounded >= f64::from(i32::MIN) && rounded <= f64::from(i32::MAX)).then(|| rounded as i32)
}
