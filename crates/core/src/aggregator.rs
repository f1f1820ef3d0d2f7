//! Machine and factory health aggregation.
//!
//! A machine score is the arithmetic mean over every supplied reading, with
//! invalid part names contributing the `-1` sentinel instead of being dropped.
//! The factory score is the mean over every supplied machine key, with
//! unrecognised machines counted as zero.

use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::evaluator::{evaluate_for, UNKNOWN_MACHINE_SCORE};
use crate::machine::MachineType;
use crate::types::{PartReading, Score};

/// Factory-wide result: the overall mean plus the score of each machine key,
/// in the order the caller supplied them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoryHealth {
    pub factory: Score,
    pub machine_scores: IndexMap<String, Score>,
}

/// Score one machine whose type has already been resolved.
///
/// An empty reading set scores zero. The mean is floored at zero so a batch
/// dominated by invalid parts cannot go negative.
pub fn machine_score(machine: MachineType, readings: &[PartReading]) -> Score {
    if readings.is_empty() {
        return 0.0;
    }
    let total: Score = readings
        .iter()
        .map(|reading| evaluate_for(machine, reading).value())
        .sum();
    (total / readings.len() as f64).max(0.0)
}

/// Score one machine given by wire name. Unknown machines score zero without
/// evaluating any part.
pub fn calculate_machine_health(machine: &str, readings: &[PartReading]) -> Score {
    match machine.parse::<MachineType>() {
        Ok(machine) => machine_score(machine, readings),
        Err(_) => UNKNOWN_MACHINE_SCORE,
    }
}

/// Score every machine key and average them into a factory score.
pub fn aggregate_factory(machines: &IndexMap<String, Vec<PartReading>>) -> FactoryHealth {
    let machine_scores: IndexMap<String, Score> = machines
        .iter()
        .map(|(key, readings)| (key.clone(), calculate_machine_health(key, readings)))
        .collect();

    let factory = if machine_scores.is_empty() {
        0.0
    } else {
        machine_scores.values().sum::<Score>() / machine_scores.len() as f64
    };

    FactoryHealth {
        factory,
        machine_scores,
    }
}

/// Presentation form of a score: exactly two decimal places.
///
/// Rounding works on the exact binary value and sends a midpoint away from
/// zero, so `80.625` becomes `"80.63"` while `1.005` (stored just below the
/// midpoint) stays `"1.00"`.
pub fn format_score(score: Score) -> String {
    match Decimal::from_f64_retain(score) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        // Non-finite; scores never are.
        None => format!("{score:.2}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
