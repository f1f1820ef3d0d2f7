pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;

/// Root-level scoring route, kept at the path existing clients call.
pub fn scoring_routes() -> Router {
    Router::new().route("/machine-health", post(handlers::machine_health::calculate))
}

/// Build the `/api/v1` route tree.
///
/// ```text
/// /part-health                         score one reading (POST)
/// /machines                            taxonomy and range bands (GET)
/// /machines/{machine}                  one machine type (GET)
/// /machines/{machine}/parts/{part}     one part's bands (GET)
/// ```
pub fn api_routes() -> Router {
    Router::new()
        .route("/part-health", post(handlers::machine_health::part_health))
        .route("/machines", get(handlers::catalog::list_machines))
        .route("/machines/{machine}", get(handlers::catalog::get_machine))
        .route(
            "/machines/{machine}/parts/{part}",
            get(handlers::catalog::get_part),
        )
}
