//! Decoding of design-tool point lists.
//!
//! Requests arrive as JSON, either `{"stitches": [{"x": .., "y": ..}, ...]}`
//! or a bare array of point objects. Each point must carry numeric `x` and
//! `y` fields; anything else is reported with the point's index.

use serde_json::Value;
use stitchkit_core::{PlanError, Point};
use tracing::debug;

/// Extracts the point list from a decoded request body.
pub fn parse_request(body: &Value) -> Result<Vec<Point>, PlanError> {
    match body {
        Value::Array(_) => parse_points(body),
        Value::Object(map) => match map.get("stitches") {
            None | Some(Value::Null) => Err(PlanError::invalid_input("No stitches provided")),
            Some(stitches) => parse_points(stitches),
        },
        _ => Err(PlanError::invalid_input(
            "Request body must be an object with a 'stitches' list",
        )),
    }
}

/// Converts a JSON array of point objects into points, preserving order.
pub fn parse_points(value: &Value) -> Result<Vec<Point>, PlanError> {
    let items = value
        .as_array()
        .ok_or_else(|| PlanError::invalid_input("'stitches' must be a list"))?;

    if items.is_empty() {
        return Err(PlanError::invalid_input("No stitches provided"));
    }

    let points = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_point(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Received {} stitches", points.len());
    Ok(points)
}

fn parse_point(index: usize, item: &Value) -> Result<Point, PlanError> {
    let object = item
        .as_object()
        .ok_or_else(|| PlanError::malformed_point(index, "expected an object with 'x' and 'y'"))?;

    let coordinate = |field: &str| -> Result<f64, PlanError> {
        match object.get(field) {
            None | Some(Value::Null) => Err(PlanError::malformed_point(
                index,
                format!("missing numeric '{}'", field),
            )),
            Some(v) => v.as_f64().ok_or_else(|| {
                PlanError::malformed_point(index, format!("'{}' must be a number", field))
            }),
        }
    };

    Ok(Point::new(coordinate("x")?, coordinate("y")?))
}
