//! Judgment cost allocation and labor court overtime calculations.

mod error;
pub mod judgment;
pub mod overtime;
mod result;
mod selection;

pub use error::{CalculationError, CalculationErrorKind};
pub use result::ResultClauses;
pub use selection::{
    select_calculator, CalculationType, Calculator, CourtType, JudgmentCalculator,
    OvertimeCalculator,
};
