use super::costs::{aggregate_expenses, aggregate_fees, EXPENSE_CATEGORIES};
use super::domain::RejectionCase;
use super::fee_decision::{decide_fee, FeeBasis};
use super::wording;
use crate::calculations::{CalculationErrorKind, ResultClauses};
use crate::tariff::Tariff;
use tracing::debug;

impl RejectionCase {
    /// Decision clauses for a rejected claim. The flat fee is charged to the
    /// plaintiff, expenses stay with the plaintiff, and a represented
    /// defendant is awarded the attorney fee on the claimed amount.
    pub fn clauses(&self, tariff: &Tariff) -> Result<ResultClauses, CalculationErrorKind> {
        let party = self.parties.phrasing();
        let fees = aggregate_fees(&self.fees)?;
        let mut clauses = ResultClauses::new();

        let decision = decide_fee(tariff, FeeBasis::Flat, fees.total());
        debug!(?decision, paid = %fees.total(), "rejection fee decision");
        clauses.push(wording::fee_ruling(&decision, FeeBasis::Flat, party.plaintiff_ablative));

        let expenses = aggregate_expenses(&self.expenses, &EXPENSE_CATEGORIES)?;
        if !expenses.is_empty() {
            clauses.push(wording::expenses_left_with_plaintiff(&party));
        }

        if self.has_defendant_attorney {
            let fee = tariff.attorney_fee(self.claim_amount);
            clauses.push(wording::attorney_fee_award(
                party.defendant_prefix,
                fee,
                party.plaintiff_ablative,
                party.defendant_dative,
            ));
        }

        clauses.push(wording::ADVANCE_REFUND);
        Ok(clauses)
    }
}
