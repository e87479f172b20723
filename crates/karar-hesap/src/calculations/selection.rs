use super::error::{CalculationError, CalculationErrorKind};
use super::judgment::{CaseInput, JudgmentEngine};
use super::overtime::{compute_overtime, OvertimeInput, OvertimeResult};
use super::result::ResultClauses;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Court whose decision is being prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtType {
    /// Civil court of first instance.
    #[serde(rename = "asliye")]
    Asliye,
    /// Labor court.
    #[serde(rename = "is")]
    Is,
}

impl CourtType {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Asliye => "asliye",
            Self::Is => "is",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Asliye => "Asliye Hukuk Mahkemesi",
            Self::Is => "İş Mahkemesi",
        }
    }
}

impl fmt::Display for CourtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CourtType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "asliye" => Ok(Self::Asliye),
            "is" | "iş" => Ok(Self::Is),
            other => Err(format!("unknown court type '{other}'")),
        }
    }
}

/// Kind of calculation requested for a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationType {
    #[serde(rename = "tam-kabul")]
    FullAccept,
    #[serde(rename = "kismen-kabul")]
    PartialAccept,
    #[serde(rename = "davanin-reddi")]
    Rejection,
    #[serde(rename = "fazla-mesai")]
    Overtime,
}

impl CalculationType {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::FullAccept,
            Self::PartialAccept,
            Self::Rejection,
            Self::Overtime,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::FullAccept => "tam-kabul",
            Self::PartialAccept => "kismen-kabul",
            Self::Rejection => "davanin-reddi",
            Self::Overtime => "fazla-mesai",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullAccept => "Tam kabul",
            Self::PartialAccept => "Kısmen kabul",
            Self::Rejection => "Davanın reddi",
            Self::Overtime => "Fazla mesai",
        }
    }

    /// Court that hears this kind of calculation.
    pub const fn court(self) -> CourtType {
        match self {
            Self::FullAccept | Self::PartialAccept | Self::Rejection => CourtType::Asliye,
            Self::Overtime => CourtType::Is,
        }
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CalculationType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        Self::ordered()
            .into_iter()
            .find(|calculation| calculation.slug() == normalized)
            .ok_or_else(|| format!("unknown calculation type '{normalized}'"))
    }
}

pub type JudgmentCalculator =
    fn(&JudgmentEngine, &CaseInput) -> Result<ResultClauses, CalculationError>;
pub type OvertimeCalculator = fn(&OvertimeInput) -> Result<OvertimeResult, CalculationError>;

/// Calculator picked for a court and calculation type.
#[derive(Clone, Copy)]
pub enum Calculator {
    Judgment(JudgmentCalculator),
    Overtime(OvertimeCalculator),
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calculator::Judgment(_) => f.write_str("Calculator::Judgment"),
            Calculator::Overtime(_) => f.write_str("Calculator::Overtime"),
        }
    }
}

pub fn select_calculator(
    court: CourtType,
    calculation: CalculationType,
) -> Result<Calculator, CalculationError> {
    match (court, calculation) {
        (CourtType::Asliye, CalculationType::FullAccept) => {
            Ok(Calculator::Judgment(JudgmentEngine::full_accept))
        }
        (CourtType::Asliye, CalculationType::PartialAccept) => {
            Ok(Calculator::Judgment(JudgmentEngine::partial_accept))
        }
        (CourtType::Asliye, CalculationType::Rejection) => {
            Ok(Calculator::Judgment(JudgmentEngine::rejection))
        }
        (CourtType::Is, CalculationType::Overtime) => Ok(Calculator::Overtime(compute_overtime)),
        (court, calculation) => Err(CalculationError::new(
            calculation,
            CalculationErrorKind::UnsupportedCalculation { court, calculation },
        )),
    }
}
