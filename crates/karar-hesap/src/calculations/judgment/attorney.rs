use crate::tariff::Tariff;
use rust_decimal::Decimal;

impl Tariff {
    /// Statutory minimum attorney fee for a case value.
    ///
    /// Non-positive amounts get the fixed minimum fee. Amounts up to the
    /// minimum fee return the amount itself. Anything larger runs through the
    /// progressive brackets, with the remainder at the top rate, and never
    /// falls below the minimum fee.
    pub fn attorney_fee(&self, amount: Decimal) -> Decimal {
        let minimum = self.attorney_minimum_fee;
        if amount <= Decimal::ZERO {
            return minimum;
        }
        // TODO: confirm against the published tariff whether this should be the minimum fee.
        if amount <= minimum {
            return amount;
        }

        let mut fee = Decimal::ZERO;
        let mut remaining = amount;
        for bracket in &self.attorney_brackets {
            if remaining <= Decimal::ZERO {
                break;
            }
            let portion = remaining.min(bracket.ceiling);
            fee += portion * bracket.rate;
            remaining -= portion;
        }

        if remaining > Decimal::ZERO {
            fee += remaining * self.attorney_top_rate;
        }

        fee.max(minimum)
    }
}

/// [`Tariff::attorney_fee`] under the built-in tariff.
pub fn attorney_fee(amount: Decimal) -> Decimal {
    Tariff::default().attorney_fee(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn non_positive_amount_gets_minimum_fee() {
        assert_eq!(attorney_fee(Decimal::ZERO), dec!(30000));
        assert_eq!(attorney_fee(dec!(-5)), dec!(30000));
    }

    #[test]
    fn amounts_below_minimum_return_the_amount() {
        assert_eq!(attorney_fee(dec!(12000)), dec!(12000));
        assert_eq!(attorney_fee(dec!(30000)), dec!(30000));
    }

    #[test]
    fn first_bracket_is_floored_at_minimum() {
        // 100.000 * 16% = 16.000, below the minimum fee
        assert_eq!(attorney_fee(dec!(100000)), dec!(30000));
        // 250.000 * 16% = 40.000
        assert_eq!(attorney_fee(dec!(250000)), dec!(40000));
    }

    #[test]
    fn brackets_apply_progressively() {
        // 400.000 * 16% + 400.000 * 15% + 200.000 * 14%
        assert_eq!(attorney_fee(dec!(1000000)), dec!(152000));
    }

    #[test]
    fn amount_beyond_all_brackets_uses_top_rate() {
        let schedule_total: Decimal = Tariff::default()
            .attorney_brackets
            .iter()
            .map(|bracket| bracket.ceiling * bracket.rate)
            .sum();
        assert_eq!(schedule_total, dec!(724000));
        // all brackets (11.600.000) plus 400.000 at 1%
        assert_eq!(attorney_fee(dec!(12000000)), dec!(728000));
    }

    #[test]
    fn fee_is_non_decreasing_above_minimum() {
        let mut previous = attorney_fee(dec!(30000.01));
        let mut amount = dec!(30000.01);
        while amount < dec!(15000000) {
            amount += dec!(97531.17);
            let fee = attorney_fee(amount);
            assert!(fee >= previous, "fee dropped at {amount}");
            assert!(fee >= dec!(30000));
            previous = fee;
        }
    }

    #[test]
    fn custom_tariff_changes_the_minimum() {
        let mut tariff = Tariff::default();
        tariff.attorney_minimum_fee = dec!(45000);
        assert_eq!(tariff.attorney_fee(Decimal::ZERO), dec!(45000));
        assert_eq!(tariff.attorney_fee(dec!(250000)), dec!(45000));
    }
}
