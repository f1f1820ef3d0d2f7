//! Part health evaluation.
//!
//! Pure functions over the static range table. Naming problems are reported
//! through [`PartScore`] rather than as errors so a single bad reading never
//! aborts scoring of the rest of a batch.

use crate::machine::{MachineType, Part};
use crate::ranges::{rule, RangeClass, OUT_OF_RANGE_SCORE};
use crate::types::{PartReading, Score};

/// Numeric encoding of [`PartScore::InvalidPart`].
pub const INVALID_PART_SENTINEL: Score = -1.0;

/// Numeric encoding of [`PartScore::UnknownMachine`].
pub const UNKNOWN_MACHINE_SCORE: Score = 0.0;

/// Outcome of scoring one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartScore {
    /// A computed score in `[0, 100]`.
    Valid(Score),
    /// The machine is known but the part name is not one of its parts.
    InvalidPart,
    /// The machine type is not recognised.
    UnknownMachine,
}

impl PartScore {
    /// Collapse to the numeric form: the score itself, `-1` for an invalid
    /// part, `0` for an unknown machine.
    pub fn value(self) -> Score {
        match self {
            PartScore::Valid(score) => score,
            PartScore::InvalidPart => INVALID_PART_SENTINEL,
            PartScore::UnknownMachine => UNKNOWN_MACHINE_SCORE,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, PartScore::Valid(_))
    }

    /// Wire label used by the API.
    pub fn status(self) -> &'static str {
        match self {
            PartScore::Valid(_) => "valid",
            PartScore::InvalidPart => "invalidPart",
            PartScore::UnknownMachine => "unknownMachine",
        }
    }
}

/// A typed evaluation: the score plus the class of the band that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub score: Score,
    pub class: RangeClass,
}

/// Score `value` against the bands of `part`, first match wins.
pub fn assess(part: Part, value: f64) -> Assessment {
    rule(part)
        .iter()
        .find(|band| band.contains(value))
        .map(|band| Assessment {
            score: band.score(value).clamp(0.0, 100.0),
            class: band.class,
        })
        .unwrap_or(Assessment {
            score: OUT_OF_RANGE_SCORE,
            class: RangeClass::OutOfRange,
        })
}

/// Evaluate a reading for an already-resolved machine type.
pub fn evaluate_for(machine: MachineType, reading: &PartReading) -> PartScore {
    match machine.part(&reading.name) {
        Some(part) => PartScore::Valid(assess(part, reading.value).score),
        None => PartScore::InvalidPart,
    }
}

/// Evaluate a reading for a machine given by wire name.
///
/// The machine is checked before the part: an unknown machine yields
/// [`PartScore::UnknownMachine`] whatever the part name is.
pub fn evaluate_part(machine: &str, reading: &PartReading) -> PartScore {
    match machine.parse::<MachineType>() {
        Ok(machine) => evaluate_for(machine, reading),
        Err(_) => PartScore::UnknownMachine,
    }
}

/// Numeric form of [`evaluate_part`]: a score in `[0, 100]`, or `-1`.
pub fn calculate_part_health(machine: &str, reading: &PartReading) -> Score {
    evaluate_part(machine, reading).value()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
