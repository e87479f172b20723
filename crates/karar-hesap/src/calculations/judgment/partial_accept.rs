use super::costs::{aggregate_expenses, aggregate_fees, EXPENSE_CATEGORIES};
use super::domain::PartialAcceptCase;
use super::fee_decision::{decide_fee, FeeBasis};
use super::wording::{self, Share};
use crate::calculations::{CalculationErrorKind, ResultClauses};
use crate::tariff::Tariff;
use rust_decimal::Decimal;
use tracing::debug;

impl PartialAcceptCase {
    /// Decision clauses for a claim accepted in part. The fee is computed on
    /// the accepted amount; paid fees and expenses are split by the acceptance
    /// ratio, and each represented side gets the attorney fee for its win.
    pub fn clauses(&self, tariff: &Tariff) -> Result<ResultClauses, CalculationErrorKind> {
        let party = self.parties.phrasing();
        let fees = aggregate_fees(&self.fees)?;
        let ratio = self.acceptance_ratio();
        let mut clauses = ResultClauses::new();
        debug!(
            claim = %self.claim_amount(),
            accepted = %self.accepted_amount(),
            %ratio,
            "partial accept ratio"
        );

        if self.exempt_from_fee {
            clauses.push(wording::EXEMPT_FROM_FEE);
        } else {
            let basis = FeeBasis::for_case(self.monetary_case, self.accepted_amount());
            let decision = decide_fee(tariff, basis, fees.total());
            debug!(?basis, ?decision, paid = %fees.total(), "partial accept fee decision");

            clauses.push(wording::fee_ruling(&decision, basis, party.defendant_ablative));
            if fees.total() > Decimal::ZERO && !decision.is_surplus() {
                let share = Share::split(fees.total(), ratio);
                clauses.push(wording::fee_share(&fees, share, &party));
            }
        }

        let expenses = aggregate_expenses(&self.expenses, &EXPENSE_CATEGORIES)?;
        if !expenses.is_empty() {
            let share = Share::split(expenses.total(), ratio);
            clauses.push(wording::expense_share(&expenses, share, &party));
        }

        if self.has_plaintiff_attorney {
            let fee = tariff.attorney_fee(self.accepted_amount());
            clauses.push(wording::attorney_fee_award(
                party.plaintiff_prefix,
                fee,
                party.defendant_ablative,
                party.plaintiff_dative,
            ));
        }

        if self.has_defendant_attorney {
            let fee = tariff.attorney_fee(self.rejected_amount());
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
