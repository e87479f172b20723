//! Evaluates one case per CSV row.
//!
//! Each row names its calculation in the `outcome` column (and optionally the
//! court in `court`); flag and amount columns use the same camelCase names as
//! the JSON case input. Row failures are collected next to the successful
//! rows instead of aborting the batch.

use crate::calculations::judgment::{AmountField, CaseFlags, CaseInput, JudgmentEngine};
use crate::calculations::overtime::OvertimeInput;
use crate::calculations::{
    select_calculator, CalculationError, CalculationType, Calculator, CourtType, ResultClauses,
};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug)]
pub enum BatchError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "failed to read case file: {}", err),
            BatchError::Csv(err) => write!(f, "invalid case CSV header: {}", err),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            BatchError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Why a single row produced no decision.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    #[error("satır okunamadı: {0}")]
    Malformed(#[source] csv::Error),
    #[error("bilinmeyen hesaplama türü: {0}")]
    UnknownCalculation(String),
    #[error("bilinmeyen mahkeme türü: {0}")]
    UnknownCourt(String),
    #[error("{column} sütunu için geçersiz değer: {value}")]
    InvalidFlag { column: &'static str, value: String },
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub calculation: Option<CalculationType>,
    pub outcome: Result<ResultClauses, RowError>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|entry| entry.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }
}

pub fn evaluate_path<P: AsRef<Path>>(
    engine: &JudgmentEngine,
    path: P,
) -> Result<BatchReport, BatchError> {
    let file = std::fs::File::open(path)?;
    evaluate_reader(engine, file)
}

pub fn evaluate_reader<R: Read>(
    engine: &JudgmentEngine,
    reader: R,
) -> Result<BatchReport, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader.headers()?;

    let mut report = BatchReport::default();
    for (idx, record) in csv_reader.deserialize::<CaseRow>().enumerate() {
        let row = idx + 1;
        let entry = match record {
            Ok(case_row) => case_row.evaluate(engine, row),
            Err(err) => BatchEntry {
                row,
                calculation: None,
                outcome: Err(RowError::Malformed(err)),
            },
        };
        if let Err(err) = &entry.outcome {
            warn!(row, error = %err, "batch row failed");
        }
        report.entries.push(entry);
    }

    info!(
        rows = report.entries.len(),
        failed = report.failed(),
        "batch evaluated"
    );
    Ok(report)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaseRow {
    outcome: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    court: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    multiple_plaintiffs: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    multiple_defendants: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    monetary_case: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_plaintiff_attorney: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    has_defendant_attorney: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    exempt_from_fee: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    claim_amount: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    accepted_amount: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    advance_fee: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    application_fee: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    completion_fee: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    amendment_fee: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    discovery_fee: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    expert_fee: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    notice_expense: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    gross_overtime_amount: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    reduction_rate_percent: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    setoff_amount: Option<String>,
}

impl CaseRow {
    fn evaluate(self, engine: &JudgmentEngine, row: usize) -> BatchEntry {
        let calculation = self.outcome.parse::<CalculationType>().ok();
        let outcome = match calculation {
            Some(calculation) => self.run(engine, calculation),
            None => Err(RowError::UnknownCalculation(self.outcome.clone())),
        };

        BatchEntry {
            row,
            calculation,
            outcome,
        }
    }

    fn run(
        &self,
        engine: &JudgmentEngine,
        calculation: CalculationType,
    ) -> Result<ResultClauses, RowError> {
        let court = match self.court.as_deref() {
            Some(raw) => raw
                .parse::<CourtType>()
                .map_err(|_| RowError::UnknownCourt(raw.to_string()))?,
            None => calculation.court(),
        };

        match select_calculator(court, calculation)? {
            Calculator::Judgment(calculate) => Ok(calculate(engine, &self.case_input()?)?),
            Calculator::Overtime(calculate) => {
                let input = OvertimeInput::parse(
                    self.gross_overtime_amount.as_deref().unwrap_or_default(),
                    self.reduction_rate_percent.as_deref(),
                    self.setoff_amount.as_deref(),
                )?;
                Ok(calculate(&input)?.clauses())
            }
        }
    }

    fn case_input(&self) -> Result<CaseInput, RowError> {
        let defaults = CaseFlags::default();
        let flags = CaseFlags {
            multiple_plaintiffs: flag(
                "multiplePlaintiffs",
                &self.multiple_plaintiffs,
                defaults.multiple_plaintiffs,
            )?,
            multiple_defendants: flag(
                "multipleDefendants",
                &self.multiple_defendants,
                defaults.multiple_defendants,
            )?,
            monetary_case: flag("monetaryCase", &self.monetary_case, defaults.monetary_case)?,
            has_plaintiff_attorney: flag(
                "hasPlaintiffAttorney",
                &self.has_plaintiff_attorney,
                defaults.has_plaintiff_attorney,
            )?,
            has_defendant_attorney: flag(
                "hasDefendantAttorney",
                &self.has_defendant_attorney,
                defaults.has_defendant_attorney,
            )?,
            exempt_from_fee: flag("exemptFromFee", &self.exempt_from_fee, defaults.exempt_from_fee)?,
        };

        let mut input = CaseInput {
            flags,
            ..CaseInput::default()
        };
        let columns = [
            (AmountField::ClaimAmount, &self.claim_amount),
            (AmountField::AcceptedAmount, &self.accepted_amount),
            (AmountField::AdvanceFee, &self.advance_fee),
            (AmountField::ApplicationFee, &self.application_fee),
            (AmountField::CompletionFee, &self.completion_fee),
            (AmountField::AmendmentFee, &self.amendment_fee),
            (AmountField::DiscoveryFee, &self.discovery_fee),
            (AmountField::ExpertFee, &self.expert_fee),
            (AmountField::NoticeExpense, &self.notice_expense),
        ];
        for (field, value) in columns {
            if let Some(value) = value {
                input.amounts.set(field, value.as_str());
            }
        }

        Ok(input)
    }
}

fn flag(column: &'static str, value: &Option<String>, default: bool) -> Result<bool, RowError> {
    let Some(raw) = value.as_deref() else {
        return Ok(default);
    };

    match raw.to_lowercase().as_str() {
        "1" | "true" | "evet" | "e" | "x" => Ok(true),
        "0" | "false" | "hayır" | "hayir" | "h" => Ok(false),
        _ => Err(RowError::InvalidFlag {
            column,
            value: raw.to_string(),
        }),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::CalculationErrorKind;
    use std::io::Cursor;

    const CASES: &str = "\
outcome,court,monetaryCase,hasPlaintiffAttorney,hasDefendantAttorney,claimAmount,acceptedAmount,advanceFee,grossOvertimeAmount,setoffAmount
tam-kabul,,,,,100000,,,,
davanin-reddi,asliye,,,evet,100000,,,,
fazla-mesai,,,,,,,,10000,
kismen-kabul,,,,,1000,1500,,,
tam-kabul,is,,,,100000,,,,
";

    fn report() -> BatchReport {
        evaluate_reader(&JudgmentEngine::default(), Cursor::new(CASES)).expect("batch evaluates")
    }

    #[test]
    fn evaluates_each_row_with_its_calculator() {
        let report = report();
        assert_eq!(report.entries.len(), 5);
        assert_eq!(report.succeeded(), 3);
        assert_eq!(report.failed(), 2);

        let first = report.entries[0].outcome.as_ref().expect("full accept row");
        assert!(first.as_slice()[0].contains("6831,00TL karar ve ilam harcının davalıdan"));

        let rejection = report.entries[1].outcome.as_ref().expect("rejection row");
        assert_eq!(rejection.len(), 3);
        assert!(rejection.as_slice()[1].contains("davacıdan alınarak davalıya"));

        let overtime = report.entries[2].outcome.as_ref().expect("overtime row");
        assert!(overtime.iter().any(|line| line == "Net Fazla Mesai Ücreti: 5004,37 TL"));
    }

    #[test]
    fn row_errors_are_reported_in_place() {
        let report = report();

        let partial = &report.entries[3];
        assert_eq!(partial.row, 4);
        assert_eq!(partial.calculation, Some(CalculationType::PartialAccept));
        match &partial.outcome {
            Err(RowError::Calculation(err)) => assert!(matches!(
                err.kind(),
                CalculationErrorKind::AcceptedExceedsClaim { .. }
            )),
            other => panic!("expected calculation error, got {other:?}"),
        }

        match &report.entries[4].outcome {
            Err(RowError::Calculation(err)) => assert!(matches!(
                err.kind(),
                CalculationErrorKind::UnsupportedCalculation { .. }
            )),
            other => panic!("expected unsupported calculation, got {other:?}"),
        }
    }

    #[test]
    fn unknown_outcome_and_bad_flags_fail_the_row() {
        let csv = "outcome,exemptFromFee\nbosanma,\ntam-kabul,belki\n";
        let report =
            evaluate_reader(&JudgmentEngine::default(), Cursor::new(csv)).expect("batch evaluates");

        assert!(matches!(
            &report.entries[0].outcome,
            Err(RowError::UnknownCalculation(name)) if name == "bosanma"
        ));
        assert!(matches!(
            &report.entries[1].outcome,
            Err(RowError::InvalidFlag { column: "exemptFromFee", value }) if value == "belki"
        ));
    }

    #[test]
    fn flag_values_accept_turkish_and_numeric_forms() {
        assert!(flag("x", &Some("Evet".to_string()), false).expect("evet"));
        assert!(!flag("x", &Some("0".to_string()), true).expect("zero"));
        assert!(flag("x", &None, true).expect("default"));
    }
}
