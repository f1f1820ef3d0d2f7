//! Shared response envelope for the `/api/v1` handlers.
//!
//! The `/machine-health` endpoint keeps its flat legacy shape and does not
//! use this envelope.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
