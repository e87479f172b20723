use crate::tariff::Tariff;
use rust_decimal::Decimal;

/// What the decision fee is computed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeBasis {
    /// Proportional fee on a case value, floored at the flat fee.
    Proportional(Decimal),
    /// Flat statutory fee.
    Flat,
}

impl FeeBasis {
    pub fn for_case(monetary_case: bool, base_amount: Decimal) -> Self {
        if monetary_case {
            Self::Proportional(base_amount)
        } else {
            Self::Flat
        }
    }

    pub fn required_fee(self, tariff: &Tariff) -> Decimal {
        match self {
            Self::Proportional(base) => (base * tariff.decision_fee_rate).max(tariff.flat_fee),
            Self::Flat => tariff.flat_fee,
        }
    }

    pub fn is_proportional(self) -> bool {
        matches!(self, Self::Proportional(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeDecision {
    /// Fee still owed to the treasury.
    Deficient {
        required: Decimal,
        paid: Decimal,
        remaining: Decimal,
    },
    Sufficient { required: Decimal },
    /// Overpaid fee to be refunded.
    Surplus { required: Decimal, refund: Decimal },
}

impl FeeDecision {
    pub fn required(&self) -> Decimal {
        match *self {
            Self::Deficient { required, .. }
            | Self::Sufficient { required }
            | Self::Surplus { required, .. } => required,
        }
    }

    pub fn is_surplus(&self) -> bool {
        matches!(self, Self::Surplus { .. })
    }
}

pub fn decide_fee(tariff: &Tariff, basis: FeeBasis, paid: Decimal) -> FeeDecision {
    let required = basis.required_fee(tariff);
    let remaining = required - paid;

    if remaining > Decimal::ZERO {
        FeeDecision::Deficient {
            required,
            paid,
            remaining,
        }
    } else if remaining.is_zero() {
        FeeDecision::Sufficient { required }
    } else {
        FeeDecision::Surplus {
            required,
            refund: remaining.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn proportional_fee_has_flat_floor() {
        let tariff = Tariff::default();
        assert_eq!(FeeBasis::Proportional(dec!(100000)).required_fee(&tariff), dec!(6831));
        assert_eq!(FeeBasis::Proportional(dec!(5000)).required_fee(&tariff), dec!(615.40));
        assert_eq!(FeeBasis::Proportional(Decimal::ZERO).required_fee(&tariff), dec!(615.40));
        assert_eq!(FeeBasis::Flat.required_fee(&tariff), dec!(615.40));
    }

    #[test]
    fn required_fee_matches_formula_across_values() {
        let tariff = Tariff::default();
        let mut base = Decimal::ZERO;
        while base < dec!(500000) {
            let expected = (base * dec!(0.06831)).max(dec!(615.40));
            assert_eq!(FeeBasis::Proportional(base).required_fee(&tariff), expected);
            base += dec!(3456.78);
        }
    }

    #[test]
    fn classifies_remaining_fee() {
        let tariff = Tariff::default();
        let basis = FeeBasis::Proportional(dec!(100000));

        assert_eq!(
            decide_fee(&tariff, basis, dec!(1707.75)),
            FeeDecision::Deficient {
                required: dec!(6831),
                paid: dec!(1707.75),
                remaining: dec!(5123.25),
            }
        );
        assert_eq!(
            decide_fee(&tariff, basis, dec!(6831.00)),
            FeeDecision::Sufficient { required: dec!(6831) }
        );
        assert_eq!(
            decide_fee(&tariff, basis, dec!(7000)),
            FeeDecision::Surplus {
                required: dec!(6831),
                refund: dec!(169),
            }
        );
    }

    #[test]
    fn non_monetary_cases_use_flat_basis() {
        assert_eq!(FeeBasis::for_case(false, dec!(250000)), FeeBasis::Flat);
        assert!(FeeBasis::for_case(true, dec!(250000)).is_proportional());
    }
}
