use super::costs::{aggregate_expenses, aggregate_fees, EXPENSE_CATEGORIES};
use super::domain::FullAcceptCase;
use super::fee_decision::{decide_fee, FeeBasis};
use super::wording;
use crate::calculations::{CalculationErrorKind, ResultClauses};
use crate::tariff::Tariff;
use rust_decimal::Decimal;
use tracing::debug;

impl FullAcceptCase {
    /// Decision clauses for a claim accepted in full: the defendant bears the
    /// fee, the plaintiff's paid fees and expenses, and the plaintiff's attorney fee.
    pub fn clauses(&self, tariff: &Tariff) -> Result<ResultClauses, CalculationErrorKind> {
        let party = self.parties.phrasing();
        let fees = aggregate_fees(&self.fees)?;
        let mut clauses = ResultClauses::new();

        if self.exempt_from_fee {
            clauses.push(wording::EXEMPT_FROM_FEE);
        } else {
            let basis = FeeBasis::for_case(self.monetary_case, self.claim_amount);
            let decision = decide_fee(tariff, basis, fees.total());
            debug!(?basis, ?decision, paid = %fees.total(), "full accept fee decision");

            clauses.push(wording::fee_ruling(&decision, basis, party.defendant_ablative));
            if fees.total() > Decimal::ZERO && !decision.is_surplus() {
                clauses.push(wording::fee_reimbursement(&fees, &party));
            }
        }

        let expenses = aggregate_expenses(&self.expenses, &EXPENSE_CATEGORIES)?;
        if !expenses.is_empty() {
            clauses.push(wording::expense_award(&expenses, &party));
        }

        if self.has_plaintiff_attorney {
            let fee = tariff.attorney_fee(self.claim_amount);
            clauses.push(wording::attorney_fee_award(
                party.plaintiff_prefix,
                fee,
                party.defendant_ablative,
                party.plaintiff_dative,
            ));
        }

        clauses.push(wording::ADVANCE_REFUND);
        Ok(clauses)
    }
}
