//! Handlers for machine, factory and single-part health scoring.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use factory_health_core::evaluator::{assess, evaluate_part};
use factory_health_core::ranges::RangeClass;
use factory_health_core::{aggregate_factory, format_score, MachineType, PartReading};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

// ── Factory scoring ──────────────────────────────────────────────────

/// Body of `POST /machine-health`: machine key → part key → reading.
#[derive(Debug, Deserialize)]
pub struct MachineHealthRequest {
    pub machines: IndexMap<String, IndexMap<String, f64>>,
}

/// Scores formatted to two decimal places, machine keys in request order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineHealthResponse {
    pub factory: String,
    pub machine_scores: IndexMap<String, String>,
}

impl MachineHealthRequest {
    /// Flatten the part maps into reading lists, failing on an empty
    /// `machines` object.
    pub fn into_readings(self) -> AppResult<IndexMap<String, Vec<PartReading>>> {
        if self.machines.is_empty() {
            return Err(AppError::InvalidInput);
        }
        Ok(self
            .machines
            .into_iter()
            .map(|(machine, parts)| {
                let readings = parts
                    .into_iter()
                    .map(|(name, value)| PartReading::new(name, value))
                    .collect();
                (machine, readings)
            })
            .collect())
    }
}

/// Drop readings whose part key is not in a known machine's taxonomy.
///
/// Unknown machine keys are left untouched; they still score zero and count
/// towards the factory mean.
pub fn retain_known_parts(machines: &mut IndexMap<String, Vec<PartReading>>) {
    for (key, readings) in machines.iter_mut() {
        let Ok(machine) = key.parse::<MachineType>() else {
            tracing::debug!(machine = %key, "Unknown machine type, scoring as zero");
            continue;
        };
        readings.retain(|reading| {
            let known = machine.part(&reading.name).is_some();
            if !known {
                tracing::debug!(%machine, part = %reading.name, "Ignoring unknown part");
            }
            known
        });
    }
}

/// POST /machine-health
///
/// Score every machine in the body and average them into a factory score.
/// Any body that is not `{ machines: { [key]: { [part]: number } } }` with at
/// least one machine is rejected with 400 `Invalid input format`.
pub async fn calculate(
    payload: Result<Json<MachineHealthRequest>, JsonRejection>,
) -> AppResult<Json<MachineHealthResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Malformed machine health body");
        AppError::InvalidInput
    })?;

    let mut machines = request.into_readings()?;
    retain_known_parts(&mut machines);

    let health = aggregate_factory(&machines);
    let response = MachineHealthResponse {
        factory: format_score(health.factory),
        machine_scores: health
            .machine_scores
            .into_iter()
            .map(|(key, score)| (key, format_score(score)))
            .collect(),
    };

    tracing::info!(
        machines = response.machine_scores.len(),
        factory = %response.factory,
        "Computed factory health"
    );

    Ok(Json(response))
}

// ── Single part ──────────────────────────────────────────────────────

/// Body of `POST /api/v1/part-health`.
#[derive(Debug, Deserialize)]
pub struct PartHealthRequest {
    pub machine: String,
    pub part: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct PartHealthResponse {
    pub score: String,
    pub status: &'static str,
    /// Band the reading fell into; `None` unless the part is valid.
    pub class: Option<RangeClass>,
}

/// POST /api/v1/part-health
///
/// Score one reading. Naming problems are reported in `status`, never as
/// an HTTP error.
pub async fn part_health(
    payload: Result<Json<PartHealthRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<PartHealthResponse>>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let reading = PartReading::new(request.part, request.value);
    let score = evaluate_part(&request.machine, &reading);
    let class = request
        .machine
        .parse::<MachineType>()
        .ok()
        .and_then(|machine| machine.part(&reading.name))
        .map(|part| assess(part, reading.value).class);

    Ok(Json(DataResponse {
        data: PartHealthResponse {
            score: format_score(score.value()),
            status: score.status(),
            class,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(key: &str, parts: &[(&str, f64)]) -> (String, Vec<PartReading>) {
        let readings = parts
            .iter()
            .map(|(name, value)| PartReading::new(*name, *value))
            .collect();
        (key.to_string(), readings)
    }

    #[test]
    fn unknown_parts_of_known_machines_are_dropped() {
        let mut input = IndexMap::from([machine(
            "weldingRobot",
            &[("errorRate", 0.5), ("unknownPart", 1000.0)],
        )]);
        retain_known_parts(&mut input);
        assert_eq!(input["weldingRobot"], vec![PartReading::new("errorRate", 0.5)]);
    }

    #[test]
    fn unknown_machines_keep_their_readings() {
        let mut input = IndexMap::from([machine("unknownMachine", &[("somePart", 999.0)])]);
        retain_known_parts(&mut input);
        assert_eq!(input["unknownMachine"].len(), 1);
    }

    #[test]
    fn empty_machines_object_is_invalid() {
        let request = MachineHealthRequest {
            machines: IndexMap::new(),
        };
        assert!(matches!(request.into_readings(), Err(AppError::InvalidInput)));
    }
}
