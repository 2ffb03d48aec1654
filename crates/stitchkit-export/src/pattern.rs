//! Embroidery pattern model handed to encoders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stitchkit_core::{Bounds, StitchPlan};

/// 8-bit RGB thread color, serialized as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid color '{}': expected #rrggbb", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("Invalid color '{}': {}", s, e))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// A thread spool attached to a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thread {
    pub color: Rgb,
    pub description: String,
    pub catalog_number: String,
    pub brand: String,
    /// Index in the manufacturer's color chart
    pub chart: String,
}

impl Default for Thread {
    /// Blue, Brother chart color 7
    fn default() -> Self {
        Self {
            color: Rgb::new(59, 130, 246),
            description: "Blue".to_string(),
            catalog_number: String::new(),
            brand: "Brother".to_string(),
            chart: "7".to_string(),
        }
    }
}

impl fmt::Display for Thread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.description)?;
        if !self.brand.is_empty() {
            write!(f, " ({} {})", self.brand, self.chart)?;
        }
        Ok(())
    }
}

/// Descriptive design metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub author: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: "Stitchkit Design".to_string(),
            author: "Stitchkit".to_string(),
        }
    }
}

/// A complete design ready for encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbroideryPattern {
    pub metadata: Metadata,
    pub threads: Vec<Thread>,
    plan: StitchPlan,
}

impl EmbroideryPattern {
    /// Creates a pattern with no threads attached.
    pub fn new(metadata: Metadata, plan: StitchPlan) -> Self {
        Self {
            metadata,
            threads: Vec::new(),
            plan,
        }
    }

    /// Creates a pattern with a single thread, the usual case.
    pub fn with_thread(metadata: Metadata, thread: Thread, plan: StitchPlan) -> Self {
        let mut pattern = Self::new(metadata, plan);
        pattern.add_thread(thread);
        pattern
    }

    pub fn add_thread(&mut self, thread: Thread) {
        self.threads.push(thread);
    }

    pub fn plan(&self) -> &StitchPlan {
        &self.plan
    }

    /// Bounds of the centered instruction coordinates
    pub fn bounds(&self) -> Option<Bounds> {
        self.plan.bounds()
    }
}
