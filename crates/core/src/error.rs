use crate::machine::MachineType;

/// Lookup failures raised when a caller asks for a taxonomy entry by name.
///
/// Scoring never returns these: an unknown machine or part degrades to a
/// numeric score instead (see [`crate::evaluator::PartScore`]).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown machine type: '{0}'")]
    UnknownMachine(String),

    #[error("Unknown part '{part}' for machine type {machine}")]
    UnknownPart { machine: MachineType, part: String },
}
