//! Static range table mapping raw part readings onto health scores.
//!
//! Each part owns an ordered list of closed bands. A reading is scored by the
//! first band that contains it, so where two bands share a boundary the one
//! listed first owns that boundary value. Readings outside every band (and
//! NaN) score zero.

use serde::Serialize;

use crate::machine::{
    AssemblyLinePart, Part, PaintingStationPart, QualityControlStationPart, WeldingRobotPart,
};
use crate::types::Score;

/// Score awarded for any reading inside an optimal band.
pub const OPTIMAL_SCORE: Score = 100.0;

/// Score for readings that fall outside every band of a part.
pub const OUT_OF_RANGE_SCORE: Score = 0.0;

// ---------------------------------------------------------------------------
// Band types
// ---------------------------------------------------------------------------

/// Classification of the band a reading fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeClass {
    Optimal,
    Normal,
    Abnormal,
    OutOfRange,
}

/// How a band turns a reading into a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Scoring {
    /// Flat [`OPTIMAL_SCORE`] anywhere in the band, boundaries included.
    Optimal,
    /// `from` at the band's low bound, `to` at its high bound.
    Linear { from: Score, to: Score },
    Fixed { score: Score },
}

/// A closed interval `[low, high]` with its scoring function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub class: RangeClass,
    pub low: f64,
    pub high: f64,
    pub scoring: Scoring,
}

impl Band {
    const fn optimal(low: f64, high: f64) -> Self {
        Self {
            class: RangeClass::Optimal,
            low,
            high,
            scoring: Scoring::Optimal,
        }
    }

    const fn normal(low: f64, high: f64, from: Score, to: Score) -> Self {
        Self {
            class: RangeClass::Normal,
            low,
            high,
            scoring: Scoring::Linear { from, to },
        }
    }

    const fn abnormal(low: f64, high: f64, from: Score, to: Score) -> Self {
        Self {
            class: RangeClass::Abnormal,
            low,
            high,
            scoring: Scoring::Linear { from, to },
        }
    }

    const fn abnormal_fixed(low: f64, high: f64, score: Score) -> Self {
        Self {
            class: RangeClass::Abnormal,
            low,
            high,
            scoring: Scoring::Fixed { score },
        }
    }

    /// Whether `value` lies in `[low, high]`. Always false for NaN.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Score `value` with this band's function. The caller checks containment.
    pub fn score(&self, value: f64) -> Score {
        match self.scoring {
            Scoring::Optimal => OPTIMAL_SCORE,
            Scoring::Fixed { score } => score,
            Scoring::Linear { from, to } => {
                let span = self.high - self.low;
                if span == 0.0 {
                    return from;
                }
                from + (value - self.low) / span * (to - from)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Welding robot
// ---------------------------------------------------------------------------

const ERROR_RATE: &[Band] = &[
    Band::optimal(0.0, 0.0),
    Band::normal(0.0, 0.9, 100.0, 50.0),
    Band::abnormal(0.9, 3.0, 50.0, 0.0),
];

const VIBRATION_LEVEL: &[Band] = &[
    Band::optimal(0.0, 2.0),
    Band::normal(2.0, 11.0, 100.0, 50.0),
    Band::abnormal_fixed(11.0, 18.0, 20.0),
];

const ELECTRODE_WEAR: &[Band] = &[
    Band::optimal(0.0, 0.6),
    Band::normal(0.6, 1.4, 100.0, 50.0),
    Band::abnormal(1.4, 2.0, 50.0, 0.0),
];

const SHIELDING_PRESSURE: &[Band] = &[
    Band::optimal(10.0, 15.0),
    Band::normal(8.0, 10.0, 50.0, 100.0),
    Band::normal(15.0, 20.0, 100.0, 50.0),
    Band::abnormal_fixed(5.0, 8.0, 25.0),
    Band::abnormal_fixed(20.0, 25.0, 25.0),
];

const WIRE_FEED_RATE: &[Band] = &[
    Band::optimal(10.0, 14.0),
    Band::normal(5.0, 10.0, 50.0, 100.0),
    Band::normal(14.0, 18.0, 100.0, 50.0),
    Band::abnormal_fixed(2.0, 5.0, 20.0),
    Band::abnormal_fixed(18.0, 22.0, 20.0),
];

const ARC_STABILITY: &[Band] = &[
    Band::optimal(95.0, 100.0),
    Band::normal(80.0, 95.0, 50.0, 100.0),
    Band::abnormal(60.0, 80.0, 0.0, 50.0),
];

const SEAM_WIDTH: &[Band] = &[
    Band::optimal(2.0, 3.0),
    Band::normal(1.5, 2.0, 50.0, 100.0),
    Band::normal(3.0, 3.5, 100.0, 50.0),
    Band::abnormal_fixed(1.0, 1.5, 20.0),
    Band::abnormal_fixed(3.5, 4.5, 20.0),
];

const COOLING_EFFICIENCY: &[Band] = &[
    Band::optimal(95.0, 100.0),
    Band::normal(85.0, 95.0, 50.0, 100.0),
    Band::abnormal(70.0, 85.0, 0.0, 50.0),
];

// ---------------------------------------------------------------------------
// Assembly line
// ---------------------------------------------------------------------------

// The optimal band is narrower than the start of the normal curve, so scores
// drop from 100 straight to ~97 just past 0.05.
const ALIGNMENT_ACCURACY: &[Band] = &[
    Band::optimal(0.0, 0.05),
    Band::normal(0.0, 0.9, 100.0, 50.0),
    Band::abnormal_fixed(0.9, 2.0, 10.0),
];

const SPEED: &[Band] = &[
    Band::optimal(50.0, 60.0),
    Band::normal(30.0, 50.0, 50.0, 100.0),
    Band::normal(60.0, 70.0, 100.0, 50.0),
    Band::abnormal(10.0, 30.0, 0.0, 50.0),
];

const FITTING_TOLERANCE: &[Band] = &[
    Band::optimal(0.0, 0.02),
    Band::normal(0.02, 0.05, 100.0, 50.0),
    Band::abnormal(0.05, 0.1, 50.0, 0.0),
];

const BELT_SPEED: &[Band] = &[
    Band::optimal(2.0, 2.5),
    Band::normal(1.0, 2.0, 50.0, 100.0),
    Band::normal(2.5, 3.0, 100.0, 50.0),
    Band::abnormal(0.5, 1.0, 0.0, 50.0),
];

// ---------------------------------------------------------------------------
// Painting station
// ---------------------------------------------------------------------------

const FLOW_RATE: &[Band] = &[
    Band::optimal(20.0, 30.0),
    Band::normal(15.0, 20.0, 50.0, 100.0),
    Band::normal(30.0, 35.0, 100.0, 50.0),
    Band::abnormal_fixed(10.0, 15.0, 20.0),
    Band::abnormal_fixed(35.0, 40.0, 20.0),
];

const PRESSURE: &[Band] = &[
    Band::optimal(50.0, 60.0),
    Band::normal(40.0, 50.0, 50.0, 100.0),
    Band::normal(60.0, 70.0, 100.0, 50.0),
    Band::abnormal_fixed(30.0, 40.0, 25.0),
    Band::abnormal_fixed(70.0, 80.0, 25.0),
];

const COLOR_CONSISTENCY: &[Band] = &[
    Band::optimal(95.0, 100.0),
    Band::normal(85.0, 95.0, 50.0, 100.0),
    Band::abnormal(70.0, 85.0, 0.0, 50.0),
];

const NOZZLE_CONDITION: &[Band] = &[
    Band::optimal(90.0, 100.0),
    Band::normal(70.0, 90.0, 50.0, 100.0),
    Band::abnormal_fixed(50.0, 70.0, 20.0),
];

// ---------------------------------------------------------------------------
// Quality control station
// ---------------------------------------------------------------------------

const CAMERA_CALIBRATION: &[Band] = &[
    Band::optimal(-0.5, 0.5),
    Band::normal(-1.5, -0.5, 50.0, 100.0),
    Band::normal(0.5, 1.5, 100.0, 50.0),
    Band::abnormal_fixed(-3.0, -1.5, 20.0),
    Band::abnormal_fixed(1.5, 3.0, 20.0),
];

const LIGHT_INTENSITY: &[Band] = &[
    Band::optimal(95.0, 105.0),
    Band::normal(80.0, 95.0, 50.0, 100.0),
    Band::normal(105.0, 120.0, 100.0, 50.0),
    Band::abnormal_fixed(60.0, 80.0, 20.0),
    Band::abnormal_fixed(120.0, 140.0, 20.0),
];

const SOFTWARE_VERSION: &[Band] = &[
    Band::optimal(3.0, 4.0),
    Band::normal(2.0, 3.0, 50.0, 100.0),
    Band::abnormal_fixed(1.0, 2.0, 10.0),
];

const CRITERIA_SETTINGS: &[Band] = &[
    Band::optimal(95.0, 100.0),
    Band::normal(80.0, 95.0, 50.0, 100.0),
    Band::abnormal_fixed(50.0, 80.0, 20.0),
];

/// Ordered bands for `part`.
pub fn rule(part: Part) -> &'static [Band] {
    match part {
        Part::WeldingRobot(p) => match p {
            WeldingRobotPart::ErrorRate => ERROR_RATE,
            WeldingRobotPart::VibrationLevel => VIBRATION_LEVEL,
            WeldingRobotPart::ElectrodeWear => ELECTRODE_WEAR,
            WeldingRobotPart::ShieldingPressure => SHIELDING_PRESSURE,
            WeldingRobotPart::WireFeedRate => WIRE_FEED_RATE,
            WeldingRobotPart::ArcStability => ARC_STABILITY,
            WeldingRobotPart::SeamWidth => SEAM_WIDTH,
            WeldingRobotPart::CoolingEfficiency => COOLING_EFFICIENCY,
        },
        Part::AssemblyLine(p) => match p {
            AssemblyLinePart::AlignmentAccuracy => ALIGNMENT_ACCURACY,
            AssemblyLinePart::Speed => SPEED,
            AssemblyLinePart::FittingTolerance => FITTING_TOLERANCE,
            AssemblyLinePart::BeltSpeed => BELT_SPEED,
        },
        Part::PaintingStation(p) => match p {
            PaintingStationPart::FlowRate => FLOW_RATE,
            PaintingStationPart::Pressure => PRESSURE,
            PaintingStationPart::ColorConsistency => COLOR_CONSISTENCY,
            PaintingStationPart::NozzleCondition => NOZZLE_CONDITION,
        },
        Part::QualityControlStation(p) => match p {
            QualityControlStationPart::CameraCalibration => CAMERA_CALIBRATION,
            QualityControlStationPart::LightIntensity => LIGHT_INTENSITY,
            QualityControlStationPart::SoftwareVersion => SOFTWARE_VERSION,
            QualityControlStationPart::CriteriaSettings => CRITERIA_SETTINGS,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
