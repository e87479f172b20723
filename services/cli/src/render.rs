use chrono::NaiveDate;
use clap::ValueEnum;
use karar_hesap::batch::BatchReport;
use karar_hesap::error::AppError;
use karar_hesap::{CalculationType, CourtType, OvertimeResult, ResultClauses};
use serde::Serialize;
use std::io::Write;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Decision text, one clause per line
    #[default]
    Text,
    /// Structured JSON document
    Json,
}

pub(crate) fn date_header(date: NaiveDate) -> String {
    format!("Tarih: {}", date.format("%d.%m.%Y"))
}

#[derive(Serialize)]
struct DecisionView<'a> {
    calculation: CalculationType,
    court: CourtType,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    clauses: &'a ResultClauses,
    #[serde(skip_serializing_if = "Option::is_none")]
    overtime: Option<&'a OvertimeResult>,
}

#[derive(Serialize)]
struct BatchRowView<'a> {
    row: usize,
    calculation: Option<CalculationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clauses: Option<&'a ResultClauses>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub(crate) fn write_decision<W: Write>(
    out: &mut W,
    format: OutputFormat,
    date: Option<NaiveDate>,
    calculation: CalculationType,
    clauses: &ResultClauses,
) -> Result<(), AppError> {
    write_view(
        out,
        format,
        DecisionView {
            calculation,
            court: calculation.court(),
            date,
            clauses,
            overtime: None,
        },
    )
}

pub(crate) fn write_overtime<W: Write>(
    out: &mut W,
    format: OutputFormat,
    date: Option<NaiveDate>,
    result: &OvertimeResult,
) -> Result<(), AppError> {
    let clauses = result.clauses();
    write_view(
        out,
        format,
        DecisionView {
            calculation: CalculationType::Overtime,
            court: CourtType::Is,
            date,
            clauses: &clauses,
            overtime: Some(result),
        },
    )
}

fn write_view<W: Write>(
    out: &mut W,
    format: OutputFormat,
    view: DecisionView<'_>,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            if let Some(date) = view.date {
                writeln!(out, "{}\n", date_header(date))?;
            }
            writeln!(out, "{}", view.clauses)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub(crate) fn write_batch<W: Write>(
    out: &mut W,
    format: OutputFormat,
    date: Option<NaiveDate>,
    report: &BatchReport,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => {
            if let Some(date) = date {
                writeln!(out, "{}\n", date_header(date))?;
            }
            for (idx, entry) in report.entries.iter().enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                let title = entry
                    .calculation
                    .map_or("Bilinmeyen hesaplama", CalculationType::label);
                writeln!(out, "#{} {}", entry.row, title)?;
                match &entry.outcome {
                    Ok(clauses) => writeln!(out, "{clauses}")?,
                    Err(err) => writeln!(out, "HATA: {err}")?,
                }
            }
        }
        OutputFormat::Json => {
            let rows: Vec<_> = report
                .entries
                .iter()
                .map(|entry| BatchRowView {
                    row: entry.row,
                    calculation: entry.calculation,
                    clauses: entry.outcome.as_ref().ok(),
                    error: entry.outcome.as_ref().err().map(ToString::to_string),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        assert_eq!(date_header(date), "Tarih: 05.03.2024");
    }
}
