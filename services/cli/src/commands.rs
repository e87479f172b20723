use crate::render::{self, OutputFormat};
use chrono::NaiveDate;
use clap::Args;
use karar_hesap::batch::evaluate_path;
use karar_hesap::calculations::judgment::{AmountField, CaseAmounts, CaseFlags};
use karar_hesap::error::AppError;
use karar_hesap::{
    select_calculator, CalculationError, CalculationErrorKind, CalculationType, Calculator,
    CaseInput, CourtType, JudgmentEngine, OvertimeInput,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// State shared by every command of one invocation.
pub(crate) struct Session {
    pub(crate) engine: JudgmentEngine,
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct JudgmentArgs {
    /// Outcome to calculate: tam-kabul, kismen-kabul or davanin-reddi
    #[arg(long)]
    pub(crate) outcome: CalculationType,
    /// JSON case file; flags and amounts given as options are applied on top
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) flags: CaseFlagArgs,
    #[command(flatten)]
    pub(crate) amounts: AmountArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CaseFlagArgs {
    /// More than one plaintiff
    #[arg(long)]
    pub(crate) multiple_plaintiffs: bool,
    /// More than one defendant
    #[arg(long)]
    pub(crate) multiple_defendants: bool,
    /// The claim is not monetary; the flat fee applies
    #[arg(long)]
    pub(crate) non_monetary: bool,
    /// The plaintiff is represented by an attorney
    #[arg(long)]
    pub(crate) plaintiff_attorney: bool,
    /// The defendant is represented by an attorney
    #[arg(long)]
    pub(crate) defendant_attorney: bool,
    /// The defendant is exempt from court fees
    #[arg(long)]
    pub(crate) exempt: bool,
}

impl CaseFlagArgs {
    fn apply(&self, flags: &mut CaseFlags) {
        flags.multiple_plaintiffs |= self.multiple_plaintiffs;
        flags.multiple_defendants |= self.multiple_defendants;
        flags.has_plaintiff_attorney |= self.plaintiff_attorney;
        flags.has_defendant_attorney |= self.defendant_attorney;
        flags.exempt_from_fee |= self.exempt;
        if self.non_monetary {
            flags.monetary_case = false;
        }
    }
}

/// Amounts in Turkish notation, e.g. `1.234,56`.
#[derive(Args, Debug, Default)]
pub(crate) struct AmountArgs {
    /// Claimed amount
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) claim: Option<String>,
    /// Accepted amount (partial accept)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) accepted: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) advance_fee: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) application_fee: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) completion_fee: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) amendment_fee: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) discovery_fee: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) expert_fee: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) notice_expense: Option<String>,
}

impl AmountArgs {
    fn apply(&self, amounts: &mut CaseAmounts) {
        let given = [
            (AmountField::ClaimAmount, &self.claim),
            (AmountField::AcceptedAmount, &self.accepted),
            (AmountField::AdvanceFee, &self.advance_fee),
            (AmountField::ApplicationFee, &self.application_fee),
            (AmountField::CompletionFee, &self.completion_fee),
            (AmountField::AmendmentFee, &self.amendment_fee),
            (AmountField::DiscoveryFee, &self.discovery_fee),
            (AmountField::ExpertFee, &self.expert_fee),
            (AmountField::NoticeExpense, &self.notice_expense),
        ];
        for (field, value) in given {
            if let Some(value) = value {
                amounts.set(field, value.as_str());
            }
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct OvertimeArgs {
    /// Gross overtime amount
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) amount: String,
    /// Discretionary reduction in percent (defaults to 30)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) reduction: Option<String>,
    /// Amount already paid, deducted after the reduction
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) setoff: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with an `outcome` column and camelCase case columns
    pub(crate) path: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_judgment<W: Write>(
    session: &Session,
    args: &JudgmentArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let mut input = match &args.input {
        Some(path) => {
            debug!(path = %path.display(), "reading case file");
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<CaseInput>(&raw)?
        }
        None => CaseInput::default(),
    };
    args.flags.apply(&mut input.flags);
    args.amounts.apply(&mut input.amounts);

    let clauses = match select_calculator(CourtType::Asliye, args.outcome)? {
        Calculator::Judgment(calculate) => calculate(&session.engine, &input)?,
        Calculator::Overtime(_) => {
            return Err(unsupported(CourtType::Asliye, args.outcome).into())
        }
    };

    render::write_decision(out, args.format, session.date, args.outcome, &clauses)
}

pub(crate) fn run_overtime<W: Write>(
    session: &Session,
    args: &OvertimeArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let input = OvertimeInput::parse(
        &args.amount,
        args.reduction.as_deref(),
        args.setoff.as_deref(),
    )?;

    let result = match select_calculator(CourtType::Is, CalculationType::Overtime)? {
        Calculator::Overtime(calculate) => calculate(&input)?,
        Calculator::Judgment(_) => {
            return Err(unsupported(CourtType::Is, CalculationType::Overtime).into())
        }
    };

    render::write_overtime(out, args.format, session.date, &result)
}

pub(crate) fn run_batch<W: Write>(
    session: &Session,
    args: &BatchArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let report = evaluate_path(&session.engine, &args.path)?;
    info!(
        path = %args.path.display(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch finished"
    );
    render::write_batch(out, args.format, session.date, &report)
}

fn unsupported(court: CourtType, calculation: CalculationType) -> CalculationError {
    CalculationError::new(
        calculation,
        CalculationErrorKind::UnsupportedCalculation { court, calculation },
    )
}
