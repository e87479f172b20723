//! Statutory fee constants for a tariff year.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tariff year modeled by the built-in table.
pub const DEFAULT_TARIFF_YEAR: u16 = 2024;

/// One step of the progressive attorney-fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttorneyFeeBracket {
    /// Portion of the remaining amount this step consumes.
    pub ceiling: Decimal,
    pub rate: Decimal,
}

const ATTORNEY_BRACKETS_2024: [AttorneyFeeBracket; 8] = [
    AttorneyFeeBracket { ceiling: dec!(400000), rate: dec!(0.16) },
    AttorneyFeeBracket { ceiling: dec!(400000), rate: dec!(0.15) },
    AttorneyFeeBracket { ceiling: dec!(800000), rate: dec!(0.14) },
    AttorneyFeeBracket { ceiling: dec!(1200000), rate: dec!(0.11) },
    AttorneyFeeBracket { ceiling: dec!(1600000), rate: dec!(0.08) },
    AttorneyFeeBracket { ceiling: dec!(2000000), rate: dec!(0.05) },
    AttorneyFeeBracket { ceiling: dec!(2400000), rate: dec!(0.03) },
    AttorneyFeeBracket { ceiling: dec!(2800000), rate: dec!(0.02) },
];

/// Court fee and attorney fee constants in force for one tariff year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub year: u16,
    /// Proportional decision fee rate applied to the case value (nispi harç).
    pub decision_fee_rate: Decimal,
    /// Flat statutory fee (maktu harç), also the floor of the proportional fee.
    pub flat_fee: Decimal,
    /// Fixed minimum attorney fee (maktu vekalet ücreti).
    pub attorney_minimum_fee: Decimal,
    pub attorney_brackets: Vec<AttorneyFeeBracket>,
    /// Rate charged on whatever exceeds every bracket.
    pub attorney_top_rate: Decimal,
}

impl Tariff {
    pub fn for_year(year: u16) -> Result<Self, TariffError> {
        match year {
            2024 => Ok(Self::tariff_2024()),
            other => Err(TariffError::UnknownYear(other)),
        }
    }

    fn tariff_2024() -> Self {
        Self {
            year: 2024,
            decision_fee_rate: dec!(0.06831),
            flat_fee: dec!(615.40),
            attorney_minimum_fee: dec!(30000.00),
            attorney_brackets: ATTORNEY_BRACKETS_2024.to_vec(),
            attorney_top_rate: dec!(0.01),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, TariffError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| TariffError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tariff: Tariff = serde_json::from_str(&raw).map_err(|source| TariffError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tariff.validate()?;
        Ok(tariff)
    }

    pub fn validate(&self) -> Result<(), TariffError> {
        if self.attorney_brackets.is_empty() {
            return Err(TariffError::Invalid(
                "attorney fee schedule needs at least one bracket".to_string(),
            ));
        }

        let unit = Decimal::ONE;
        let rates = self
            .attorney_brackets
            .iter()
            .map(|bracket| bracket.rate)
            .chain([self.decision_fee_rate, self.attorney_top_rate]);
        for rate in rates {
            if rate < Decimal::ZERO || rate > unit {
                return Err(TariffError::Invalid(format!(
                    "rate {rate} is outside the range 0..=1"
                )));
            }
        }

        if let Some(bracket) = self
            .attorney_brackets
            .iter()
            .find(|bracket| bracket.ceiling <= Decimal::ZERO)
        {
            return Err(TariffError::Invalid(format!(
                "bracket ceiling {} must be positive",
                bracket.ceiling
            )));
        }

        if self.flat_fee < Decimal::ZERO || self.attorney_minimum_fee < Decimal::ZERO {
            return Err(TariffError::Invalid(
                "flat fee and attorney minimum fee must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::tariff_2024()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TariffError {
    #[error("no built-in tariff for year {0}")]
    UnknownYear(u16),
    #[error("failed to read tariff file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid tariff JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid tariff: {0}")]
    Invalid(String),
}
