// Stitch plan invariants over random point clouds.

use proptest::prelude::*;
use stitchkit_core::{InstructionKind, Point};
use stitchkit_planner::StitchPlanBuilder;

// Largest error two rounded sub-step endpoints can add to a sub-step length.
const ROUNDING_SLACK: f64 = std::f64::consts::SQRT_2;

fn point_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-3000.0f64..3000.0, -3000.0f64..3000.0), 1..64)
        .prop_map(|coords| coords.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn plan_starts_with_move_and_ends_with_end(points in point_cloud()) {
        let plan = StitchPlanBuilder::default().build(&points).unwrap();
        prop_assert!(plan.len() >= 2);
        prop_assert_eq!(plan.first().unwrap().kind, InstructionKind::Move);
        prop_assert_eq!(plan.last().unwrap().kind, InstructionKind::End);
        prop_assert_eq!(plan.count(InstructionKind::End), 1);
    }

    #[test]
    fn plan_is_centered(points in point_cloud()) {
        let plan = StitchPlanBuilder::default().build(&points).unwrap();
        let bounds = plan.bounds().unwrap();
        prop_assert!((bounds.min_x + bounds.max_x).abs() <= 1.0);
        prop_assert!((bounds.min_y + bounds.max_y).abs() <= 1.0);
    }

    #[test]
    fn consecutive_instructions_respect_max_distance(
        points in point_cloud(),
        max in 20.0f64..200.0,
    ) {
        let plan = StitchPlanBuilder::new(max).build(&points).unwrap();
        for pair in plan.instructions().windows(2) {
            let dist = pair[0].distance_to(&pair[1]);
            if pair[1].kind == InstructionKind::Stitch {
                prop_assert!(dist <= max, "{} -> {} is {}", pair[0], pair[1], dist);
            } else {
                prop_assert!(dist <= max + ROUNDING_SLACK, "{} -> {} is {}", pair[0], pair[1], dist);
            }
        }
    }

    #[test]
    fn every_trim_is_followed_by_a_move(points in point_cloud()) {
        let plan = StitchPlanBuilder::default().build(&points).unwrap();
        let instructions = plan.instructions();
        for (i, instruction) in instructions.iter().enumerate() {
            if instruction.kind == InstructionKind::Trim {
                prop_assert_eq!(instructions[i + 1].kind, InstructionKind::Move);
                if let Some(prev) = i.checked_sub(1).map(|p| instructions[p]) {
                    prop_assert_eq!((prev.x, prev.y), (instruction.x, instruction.y));
                }
            }
        }
    }

    #[test]
    fn end_sits_on_last_point(points in point_cloud()) {
        let plan = StitchPlanBuilder::default().build(&points).unwrap();
        let instructions = plan.instructions();
        let end = instructions[instructions.len() - 1];
        let before = instructions[instructions.len() - 2];
        prop_assert_eq!((end.x, end.y), (before.x, before.y));
    }
}
