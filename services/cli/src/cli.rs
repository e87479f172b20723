use crate::commands::{self, BatchArgs, JudgmentArgs, OvertimeArgs, Session};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use karar_hesap::config::AppConfig;
use karar_hesap::error::AppError;
use karar_hesap::{telemetry, JudgmentEngine};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "karar-hesap",
    about = "Prepare fee, cost and attorney-fee clauses for civil court decisions",
    version
)]
pub(crate) struct Cli {
    /// Tariff year to calculate with (overrides APP_TARIFF_YEAR)
    #[arg(long, global = true)]
    tariff_year: Option<u16>,
    /// JSON tariff file (overrides APP_TARIFF_FILE)
    #[arg(long, global = true)]
    tariff_file: Option<PathBuf>,
    /// Print a "Tarih:" header with today's date above text output
    #[arg(long, global = true)]
    dated: bool,
    /// Decision date for the header (YYYY-MM-DD); implies --dated
    #[arg(long, global = true, value_parser = parse_date)]
    date: Option<NaiveDate>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fee, expense and attorney-fee clauses for a civil court outcome
    Judgment(JudgmentArgs),
    /// Labor court overtime wage after reduction and setoff
    Overtime(OvertimeArgs),
    /// Evaluate one case per row of a CSV file
    Batch(BatchArgs),
}

impl Cli {
    fn decision_date(&self) -> Option<NaiveDate> {
        self.date
            .or_else(|| self.dated.then(|| Local::now().date_naive()))
    }
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(year) = cli.tariff_year {
        config.tariff.year = year;
        config.tariff.file = None;
    }
    if let Some(file) = &cli.tariff_file {
        config.tariff.file = Some(file.clone());
    }

    telemetry::init(&config.telemetry)?;

    let tariff = config.tariff.resolve()?;
    info!(?config.environment, year = tariff.year, "tariff loaded");

    let session = Session {
        engine: JudgmentEngine::new(tariff),
        date: cli.decision_date(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Judgment(args) => commands::run_judgment(&session, &args, &mut out),
        Command::Overtime(args) => commands::run_overtime(&session, &args, &mut out),
        Command::Batch(args) => commands::run_batch(&session, &args, &mut out),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
