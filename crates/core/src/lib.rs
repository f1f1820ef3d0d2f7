//! Factory health scoring core.
//!
//! Turns raw part readings into health scores in `[0, 100]`, averages part
//! scores into machine scores, and machine scores into a factory score.
//! Everything here is a pure function over the static range table in
//! [`ranges`]; the table is never modified at runtime, so callers may share
//! it across threads freely.

pub mod aggregator;
pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod machine;
pub mod ranges;
pub mod types;

pub use aggregator::{aggregate_factory, calculate_machine_health, format_score, FactoryHealth};
pub use evaluator::{calculate_part_health, evaluate_part, PartScore};
pub use machine::{MachineType, Part};
pub use types::PartReading;
