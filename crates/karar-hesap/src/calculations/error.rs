use super::selection::{CalculationType, CourtType};
use rust_decimal::Decimal;

/// What went wrong inside a calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationErrorKind {
    #[error("{field} için geçersiz sayı formatı: {text}")]
    InvalidNumberFormat { field: &'static str, text: String },
    #[error("{field} {requirement}")]
    InvalidAmount {
        field: &'static str,
        requirement: &'static str,
    },
    #[error("Kabul edilen miktar, dava edilen miktardan büyük olamaz!")]
    AcceptedExceedsClaim { accepted: Decimal, claim: Decimal },
    #[error("Mahsup tutarı, indirimli brüt tutardan büyük olamaz!")]
    SetoffExceedsAmount { setoff: Decimal, reducible: Decimal },
    #[error("{court} için {calculation} hesaplaması desteklenmiyor")]
    UnsupportedCalculation {
        court: CourtType,
        calculation: CalculationType,
    },
}

/// A failed calculation, naming the calculation type that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{calculation} hesaplaması hatası: {kind}")]
pub struct CalculationError {
    calculation: CalculationType,
    #[source]
    kind: CalculationErrorKind,
}

impl CalculationError {
    pub fn new(calculation: CalculationType, kind: CalculationErrorKind) -> Self {
        Self { calculation, kind }
    }

    pub fn calculation(&self) -> CalculationType {
        self.calculation
    }

    pub fn kind(&self) -> &CalculationErrorKind {
        &self.kind
    }
}
