//! Handlers for the `/machines` resource: the scoring taxonomy and its bands.

use axum::extract::Path;
use axum::Json;
use factory_health_core::catalog::{self, MachineCatalogEntry, PartCatalogEntry};
use factory_health_core::MachineType;

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /api/v1/machines
pub async fn list_machines() -> Json<DataResponse<Vec<MachineCatalogEntry>>> {
    Json(DataResponse {
        data: catalog::catalog(),
    })
}

/// GET /api/v1/machines/{machine}
///
/// 404 if the machine type is not recognised.
pub async fn get_machine(
    Path(machine): Path<String>,
) -> AppResult<Json<DataResponse<MachineCatalogEntry>>> {
    let machine: MachineType = machine.parse()?;
    Ok(Json(DataResponse {
        data: catalog::machine_entry(machine),
    }))
}

/// GET /api/v1/machines/{machine}/parts/{part}
///
/// 404 if the machine type is not recognised or does not own the part.
pub async fn get_part(
    Path((machine, part)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<PartCatalogEntry>>> {
    let machine: MachineType = machine.parse()?;
    let part = machine.parse_part(&part)?;
    Ok(Json(DataResponse {
        data: catalog::part_entry(part),
    }))
}
