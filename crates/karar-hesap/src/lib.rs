//! Court fee, litigation cost and attorney-fee allocation for Turkish civil
//! court decisions, plus the labor court overtime wage calculation.

pub mod batch;
pub mod calculations;
pub mod config;
pub mod error;
pub mod money;
pub mod tariff;
pub mod telemetry;

pub use calculations::judgment::{
    calculate_full_accept, calculate_partial_accept, calculate_rejection, CaseInput,
    JudgmentEngine,
};
pub use calculations::overtime::{compute_overtime, OvertimeInput, OvertimeResult};
pub use calculations::{
    select_calculator, CalculationError, CalculationErrorKind, CalculationType, Calculator,
    CourtType, ResultClauses,
};
pub use tariff::Tariff;
