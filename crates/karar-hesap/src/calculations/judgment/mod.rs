//! Fee, expense, and attorney-fee allocation for civil court judgments.
//!
//! Each outcome parses a [`CaseInput`] into its typed case record and renders
//! the ordered decision clauses against a [`Tariff`].

mod attorney;
pub mod costs;
pub mod domain;
pub mod fee_decision;
mod full_accept;
pub mod party;
mod partial_accept;
mod rejection;
mod wording;

#[cfg(test)]
mod tests;

pub use attorney::attorney_fee;
pub use costs::{
    aggregate_expenses, aggregate_fees, ExpenseKind, FeeBreakdown, FeeKind, LineItem,
    ADDITIONAL_FEE_CATEGORIES, EXPENSE_CATEGORIES,
};
pub use domain::{
    AmountField, CaseAmounts, CaseFlags, CaseInput, Expenses, FullAcceptCase, PaidFees, Parties,
    PartialAcceptCase, RejectionCase,
};
pub use fee_decision::{decide_fee, FeeBasis, FeeDecision};
pub use party::{resolve_party, PartyPhrasing};

use crate::calculations::{CalculationError, CalculationErrorKind, CalculationType, ResultClauses};
use crate::tariff::Tariff;
use tracing::{info, warn};

/// Runs the judgment calculations against one tariff.
#[derive(Debug, Clone, Default)]
pub struct JudgmentEngine {
    tariff: Tariff,
}

impl JudgmentEngine {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn full_accept(&self, input: &CaseInput) -> Result<ResultClauses, CalculationError> {
        let case = parse_case::<FullAcceptCase>(CalculationType::FullAccept, input)?;
        let clauses = case
            .clauses(&self.tariff)
            .map_err(|kind| rejected(CalculationType::FullAccept, kind))?;
        info!(clauses = clauses.len(), "full accept decision prepared");
        Ok(clauses)
    }

    pub fn partial_accept(&self, input: &CaseInput) -> Result<ResultClauses, CalculationError> {
        let case = parse_case::<PartialAcceptCase>(CalculationType::PartialAccept, input)?;
        let clauses = case
            .clauses(&self.tariff)
            .map_err(|kind| rejected(CalculationType::PartialAccept, kind))?;
        info!(clauses = clauses.len(), "partial accept decision prepared");
        Ok(clauses)
    }

    pub fn rejection(&self, input: &CaseInput) -> Result<ResultClauses, CalculationError> {
        let case = parse_case::<RejectionCase>(CalculationType::Rejection, input)?;
        let clauses = case
            .clauses(&self.tariff)
            .map_err(|kind| rejected(CalculationType::Rejection, kind))?;
        info!(clauses = clauses.len(), "rejection decision prepared");
        Ok(clauses)
    }
}

fn parse_case<'a, C>(
    calculation: CalculationType,
    input: &'a CaseInput,
) -> Result<C, CalculationError>
where
    C: TryFrom<&'a CaseInput, Error = CalculationErrorKind>,
{
    C::try_from(input).map_err(|kind| rejected(calculation, kind))
}

fn rejected(calculation: CalculationType, kind: CalculationErrorKind) -> CalculationError {
    warn!(calculation = calculation.slug(), error = %kind, "case input rejected");
    CalculationError::new(calculation, kind)
}

/// Full accept under the built-in tariff.
pub fn calculate_full_accept(input: &CaseInput) -> Result<ResultClauses, CalculationError> {
    JudgmentEngine::default().full_accept(input)
}

/// Partial accept under the built-in tariff.
pub fn calculate_partial_accept(input: &CaseInput) -> Result<ResultClauses, CalculationError> {
    JudgmentEngine::default().partial_accept(input)
}

/// Rejection under the built-in tariff.
pub fn calculate_rejection(input: &CaseInput) -> Result<ResultClauses, CalculationError> {
    JudgmentEngine::default().rejection(input)
}
