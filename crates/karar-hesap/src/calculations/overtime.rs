//! Labor court overtime wage: discretionary reduction, optional setoff and
//! gross to net conversion.

use super::{CalculationError, CalculationErrorKind, CalculationType, ResultClauses};
use crate::money::{format_currency, format_rate, parse_optional_amount};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Gross to net conversion coefficient for overtime wages.
pub const NET_CONVERSION_COEFFICIENT: Decimal = dec!(0.71491);

/// Discretionary reduction offered by the form.
pub const DEFAULT_REDUCTION_RATE_PERCENT: Decimal = dec!(30);

const GROSS_FIELD: &str = "Fazla mesai tutarı";
const REDUCTION_FIELD: &str = "Takdiri indirim oranı";
const SETOFF_FIELD: &str = "Mahsup tutarı";

const CLOSING_NOTE: &str = "Bu hesaplama İş Mahkemesi uygulamaları dikkate alınarak yapılmıştır.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeInput {
    pub gross_overtime_amount: Decimal,
    #[serde(default = "default_reduction_rate")]
    pub reduction_rate_percent: Decimal,
    #[serde(default)]
    pub setoff_amount: Decimal,
}

fn default_reduction_rate() -> Decimal {
    DEFAULT_REDUCTION_RATE_PERCENT
}

impl OvertimeInput {
    pub fn new(gross_overtime_amount: Decimal) -> Self {
        Self {
            gross_overtime_amount,
            reduction_rate_percent: DEFAULT_REDUCTION_RATE_PERCENT,
            setoff_amount: Decimal::ZERO,
        }
    }

    pub fn with_reduction_rate(mut self, percent: Decimal) -> Self {
        self.reduction_rate_percent = percent;
        self
    }

    pub fn with_setoff(mut self, setoff_amount: Decimal) -> Self {
        self.setoff_amount = setoff_amount;
        self
    }

    /// Builds the input from raw form values. A blank reduction rate takes
    /// the default, a blank setoff is zero.
    pub fn parse(
        gross: &str,
        reduction_rate: Option<&str>,
        setoff: Option<&str>,
    ) -> Result<Self, CalculationError> {
        let field = |name: &'static str, raw: Option<&str>| {
            parse_optional_amount(raw).map_err(|_| {
                CalculationError::new(
                    CalculationType::Overtime,
                    CalculationErrorKind::InvalidNumberFormat {
                        field: name,
                        text: raw.unwrap_or_default().to_string(),
                    },
                )
            })
        };

        let reduction_rate_percent = match reduction_rate {
            Some(raw) if !raw.trim().is_empty() => field(REDUCTION_FIELD, Some(raw))?,
            _ => DEFAULT_REDUCTION_RATE_PERCENT,
        };

        Ok(Self {
            gross_overtime_amount: field(GROSS_FIELD, Some(gross))?,
            reduction_rate_percent,
            setoff_amount: field(SETOFF_FIELD, setoff)?,
        })
    }
}

/// Intermediate and final amounts of an overtime calculation, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeResult {
    pub gross_amount: Decimal,
    pub reduction_rate_percent: Decimal,
    pub discount_amount: Decimal,
    pub after_discount_amount: Decimal,
    pub setoff_amount: Decimal,
    pub final_gross_amount: Decimal,
    pub net_amount: Decimal,
}

impl OvertimeResult {
    pub fn setoff_applied(&self) -> bool {
        self.setoff_amount > Decimal::ZERO
    }

    /// Calculation steps and summary lines in presentation order.
    pub fn clauses(&self) -> ResultClauses {
        let mut clauses = ResultClauses::new();
        clauses.push(format!(
            "Brüt Fazla Mesai Tutarı: {} TL",
            format_currency(self.gross_amount)
        ));
        clauses.push(format!(
            "Takdiri İndirim: {} × %{} = -{} TL",
            format_currency(self.gross_amount),
            format_rate(self.reduction_rate_percent),
            format_currency(self.discount_amount)
        ));
        clauses.push(format!(
            "İndirimli Brüt: {} - {} = {} TL",
            format_currency(self.gross_amount),
            format_currency(self.discount_amount),
            format_currency(self.after_discount_amount)
        ));
        if self.setoff_applied() {
            clauses.push(format!(
                "Mahsup: {} - {} = {} TL",
                format_currency(self.after_discount_amount),
                format_currency(self.setoff_amount),
                format_currency(self.final_gross_amount)
            ));
        }
        clauses.push(format!(
            "Net Ücret: {} × {NET_CONVERSION_COEFFICIENT} = {} TL",
            format_currency(self.final_gross_amount),
            format_currency(self.net_amount)
        ));

        let gross_label = if self.setoff_applied() {
            "Final Brüt Tutar (Mahsup Sonrası)"
        } else {
            "Brüt Fazla Mesai Ücreti"
        };
        clauses.push(format!(
            "{gross_label}: {} TL",
            format_currency(self.final_gross_amount)
        ));
        clauses.push(format!(
            "Net Fazla Mesai Ücreti: {} TL",
            format_currency(self.net_amount)
        ));
        clauses.push(CLOSING_NOTE);
        clauses
    }
}

pub fn compute_overtime(input: &OvertimeInput) -> Result<OvertimeResult, CalculationError> {
    match compute(input) {
        Ok(result) => {
            info!(net = %result.net_amount, setoff = result.setoff_applied(), "overtime calculated");
            Ok(result)
        }
        Err(kind) => {
            warn!(error = %kind, "overtime input rejected");
            Err(CalculationError::new(CalculationType::Overtime, kind))
        }
    }
}

fn compute(input: &OvertimeInput) -> Result<OvertimeResult, CalculationErrorKind> {
    let gross = input.gross_overtime_amount;
    if gross <= Decimal::ZERO {
        return Err(CalculationErrorKind::InvalidAmount {
            field: GROSS_FIELD,
            requirement: "0'dan büyük olmalıdır",
        });
    }

    let rate = input.reduction_rate_percent;
    if rate < Decimal::ZERO || rate > Decimal::ONE_HUNDRED {
        return Err(CalculationErrorKind::InvalidAmount {
            field: REDUCTION_FIELD,
            requirement: "0 ile 100 arasında olmalıdır",
        });
    }

    let setoff = input.setoff_amount;
    if setoff < Decimal::ZERO {
        return Err(CalculationErrorKind::InvalidAmount {
            field: SETOFF_FIELD,
            requirement: "negatif olamaz",
        });
    }

    let out_of_range = || CalculationErrorKind::InvalidAmount {
        field: GROSS_FIELD,
        requirement: "hesaplanabilir sınırı aşıyor",
    };
    let discount_amount = gross
        .checked_mul(rate / Decimal::ONE_HUNDRED)
        .ok_or_else(out_of_range)?;
    let after_discount_amount = gross - discount_amount;
    let final_gross_amount = after_discount_amount - setoff;
    debug!(%discount_amount, %after_discount_amount, %final_gross_amount, "overtime steps");

    if final_gross_amount < Decimal::ZERO {
        return Err(CalculationErrorKind::SetoffExceedsAmount {
            setoff,
            reducible: after_discount_amount,
        });
    }

    let net_amount = final_gross_amount
        .checked_mul(NET_CONVERSION_COEFFICIENT)
        .ok_or_else(out_of_range)?;

    Ok(OvertimeResult {
        gross_amount: gross,
        reduction_rate_percent: rate,
        discount_amount,
        after_discount_amount,
        setoff_amount: setoff,
        final_gross_amount,
        net_amount,
    })
}
