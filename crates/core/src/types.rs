use serde::{Deserialize, Serialize};

/// Health score in `[0, 100]`, or the `-1` invalid-part sentinel.
pub type Score = f64;

/// One raw reading for a named part.
///
/// The name is kept as supplied by the caller so that readings for parts
/// outside a machine's taxonomy can still be carried into aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartReading {
    pub name: String,
    pub value: f64,
}

impl PartReading {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
