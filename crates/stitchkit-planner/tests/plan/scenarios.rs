// Stitch plan scenarios
// End-to-end checks from a JSON request body to the instruction stream.

use serde_json::json;
use stitchkit_core::{Instruction, InstructionKind, PlanError};
use stitchkit_planner::{parse_request, StitchPlanBuilder};

fn build(body: serde_json::Value) -> Result<Vec<Instruction>, PlanError> {
    let points = parse_request(&body)?;
    let plan = StitchPlanBuilder::default().build(&points)?;
    Ok(plan.into_instructions())
}

#[test]
fn test_two_close_points() {
    let plan = build(json!({"stitches": [{"x": 0, "y": 0}, {"x": 10, "y": 0}]})).unwrap();
    assert_eq!(
        plan,
        vec![
            Instruction::move_to(-5, 0),
            Instruction::stitch(5, 0),
            Instruction::end(5, 0),
        ]
    );
}

#[test]
fn test_long_jump_chain() {
    let plan = build(json!({"stitches": [{"x": 0, "y": 0}, {"x": 500, "y": 0}]})).unwrap();
    assert_eq!(
        plan,
        vec![
            Instruction::move_to(-250, 0),
            Instruction::trim(-250, 0),
            Instruction::move_to(-125, 0),
            Instruction::move_to(0, 0),
            Instruction::move_to(125, 0),
            Instruction::move_to(250, 0),
            Instruction::end(250, 0),
        ]
    );
}

#[test]
fn test_single_point_is_centered() {
    let plan = build(json!({"stitches": [{"x": 7, "y": 3}]})).unwrap();
    assert_eq!(plan, vec![Instruction::move_to(0, 0), Instruction::end(0, 0)]);
}

#[test]
fn test_missing_coordinate() {
    let err = build(json!({"stitches": [{"x": 1}]})).unwrap_err();
    assert!(matches!(err, PlanError::MalformedPoint { index: 0, .. }));
}

#[test]
fn test_empty_list() {
    let err = build(json!({"stitches": []})).unwrap_err();
    assert!(matches!(err, PlanError::InvalidInput { .. }));
}

#[test]
fn test_diagonal_jump_interpolates_from_jump_start() {
    // Centered: (-150, -100) to (150, 100), distance ~360.6, 3 sub-steps.
    let plan = build(json!([{"x": 0, "y": 0}, {"x": 300, "y": 200}])).unwrap();
    assert_eq!(
        plan,
        vec![
            Instruction::move_to(-150, -100),
            Instruction::trim(-150, -100),
            Instruction::move_to(-50, -33),
            Instruction::move_to(50, 33),
            Instruction::move_to(150, 100),
            Instruction::end(150, 100),
        ]
    );
}

#[test]
fn test_stitching_resumes_after_jump() {
    let plan = build(json!([
        {"x": 0, "y": 0},
        {"x": 20, "y": 0},
        {"x": 400, "y": 0},
        {"x": 420, "y": 0}
    ]))
    .unwrap();

    let kinds: Vec<InstructionKind> = plan.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            InstructionKind::Move,
            InstructionKind::Stitch,
            InstructionKind::Trim,
            InstructionKind::Move,
            InstructionKind::Move,
            InstructionKind::Move,
            InstructionKind::Stitch,
            InstructionKind::End,
        ]
    );
    // Jump of 380 units from -190 to 190: floor(380 / 127) + 1 = 3 moves
    assert_eq!(plan[2], Instruction::trim(-190, 0));
    assert_eq!(plan[3], Instruction::move_to(-63, 0));
    assert_eq!(plan[4], Instruction::move_to(63, 0));
    assert_eq!(plan[5], Instruction::move_to(190, 0));
    assert_eq!(plan[6], Instruction::stitch(210, 0));
}

#[test]
fn test_repeated_jumps_do_not_drift() {
    // Uneven jumps whose sub-steps do not land on whole units.
    let body = json!([
        {"x": 0, "y": 0},
        {"x": 333, "y": 17},
        {"x": 1.4, "y": 350.6},
        {"x": 333, "y": 17},
        {"x": 0, "y": 0}
    ]);
    let plan = build(body).unwrap();

    // Every chain ends exactly on the rounded target, so the design returns
    // to its starting coordinate.
    let first = plan.first().copied().unwrap();
    let last = plan.last().copied().unwrap();
    assert_eq!((first.x, first.y), (last.x, last.y));

    assert_eq!(first, Instruction::move_to(-167, -175));
    assert!(plan.iter().all(|i| i.kind != InstructionKind::Stitch));
    assert_eq!(
        plan.iter().filter(|i| i.kind == InstructionKind::Trim).count(),
        4
    );
}
