//! Machine instructions and stitch plans.
//!
//! A `StitchPlan` is the ordered instruction stream handed to an encoder.
//! Instruction order is machine execution order; plans are never reordered
//! or deduplicated after they are built.

use crate::data::Bounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest single-instruction travel supported by the reference machine
/// format, in tenths of a millimeter (12.7mm).
pub const DEFAULT_MAX_STITCH_DISTANCE: f64 = 127.0;

/// Kind of machine instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstructionKind {
    /// Reposition the needle without laying thread
    Move,
    /// Move the needle while laying thread
    Stitch,
    /// Cut the thread at the current position
    Trim,
    /// End of design
    End,
}

impl InstructionKind {
    /// Upper-case mnemonic used in listings and logs
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Move => "MOVE",
            Self::Stitch => "STITCH",
            Self::Trim => "TRIM",
            Self::End => "END",
        }
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

/// A single instruction at an absolute, centered integer coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub x: i32,
    pub y: i32,
}

impl Instruction {
    pub fn new(kind: InstructionKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    pub fn move_to(x: i32, y: i32) -> Self {
        Self::new(InstructionKind::Move, x, y)
    }

    pub fn stitch(x: i32, y: i32) -> Self {
        Self::new(InstructionKind::Stitch, x, y)
    }

    pub fn trim(x: i32, y: i32) -> Self {
        Self::new(InstructionKind::Trim, x, y)
    }

    pub fn end(x: i32, y: i32) -> Self {
        Self::new(InstructionKind::End, x, y)
    }

    /// Euclidean distance between the coordinates of two instructions
    pub fn distance_to(&self, other: &Instruction) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{})", self.kind, self.x, self.y)
    }
}

/// Ordered, immutable instruction stream for one design.
///
/// Only the planner constructs plans with content; consumers get read-only
/// access or take ownership of the instructions with [`StitchPlan::into_instructions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StitchPlan {
    instructions: Vec<Instruction>,
}

impl StitchPlan {
    /// Wrap an already-ordered instruction stream.
    pub fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn first(&self) -> Option<&Instruction> {
        self.instructions.first()
    }

    pub fn last(&self) -> Option<&Instruction> {
        self.instructions.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Number of instructions of the given kind
    pub fn count(&self, kind: InstructionKind) -> usize {
        self.instructions.iter().filter(|i| i.kind == kind).count()
    }

    /// Bounding box over all instruction coordinates
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.instructions.split_first()?;
        let mut bounds = Bounds {
            min_x: f64::from(first.x),
            max_x: f64::from(first.x),
            min_y: f64::from(first.y),
            max_y: f64::from(first.y),
        };
        for i in rest {
            bounds.include(f64::from(i.x), f64::from(i.y));
        }
        Some(bounds)
    }
}

impl<'a> IntoIterator for &'a StitchPlan {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
