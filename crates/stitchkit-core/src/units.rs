//! Unit conversion utilities
//!
//! Design coordinates are fixed-point tenths of a millimeter.
//! Helpers here convert to and from millimeters for display and for
//! user-supplied distances such as `12.7mm`.

/// Design units per millimeter
pub const UNITS_PER_MM: f64 = 10.0;

/// Convert design units to millimeters
pub fn to_mm(units: f64) -> f64 {
    units / UNITS_PER_MM
}

/// Convert millimeters to design units
pub fn from_mm(mm: f64) -> f64 {
    mm * UNITS_PER_MM
}

/// Format a design-unit length for display in millimeters
///
/// * `units` - Length in tenths of a millimeter
pub fn format_mm(units: f64) -> String {
    format!("{:.1}mm", to_mm(units))
}

/// Parse a distance into design units
///
/// A bare number is taken as design units. A `mm` suffix converts from
/// millimeters, and a `u` suffix is accepted as explicit design units.
pub fn parse_distance(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty distance".to_string());
    }

    let (number, scale) = if let Some(mm) = input.strip_suffix("mm") {
        (mm, UNITS_PER_MM)
    } else if let Some(units) = input.strip_suffix('u') {
        (units, 1.0)
    } else {
        (input, 1.0)
    };

    let value = number
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid distance '{}': {}", input, e))?;

    if !value.is_finite() {
        return Err(format!("Distance must be finite: {}", input));
    }

    Ok(value * scale)
}
