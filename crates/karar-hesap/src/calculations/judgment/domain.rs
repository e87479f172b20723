use super::party::{resolve_party, PartyPhrasing};
use crate::calculations::CalculationErrorKind;
use crate::money::parse_optional_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw case record as collected from the form: flags plus locale formatted amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseInput {
    pub flags: CaseFlags,
    pub amounts: CaseAmounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseFlags {
    pub multiple_plaintiffs: bool,
    pub multiple_defendants: bool,
    pub monetary_case: bool,
    pub has_plaintiff_attorney: bool,
    pub has_defendant_attorney: bool,
    pub exempt_from_fee: bool,
}

impl Default for CaseFlags {
    fn default() -> Self {
        Self {
            multiple_plaintiffs: false,
            multiple_defendants: false,
            monetary_case: true,
            has_plaintiff_attorney: false,
            has_defendant_attorney: false,
            exempt_from_fee: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseAmounts {
    pub claim_amount: Option<String>,
    pub accepted_amount: Option<String>,
    pub advance_fee: Option<String>,
    pub application_fee: Option<String>,
    pub completion_fee: Option<String>,
    pub amendment_fee: Option<String>,
    pub discovery_fee: Option<String>,
    pub expert_fee: Option<String>,
    pub notice_expense: Option<String>,
}

/// Named amount fields of a [`CaseInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountField {
    ClaimAmount,
    AcceptedAmount,
    AdvanceFee,
    ApplicationFee,
    CompletionFee,
    AmendmentFee,
    DiscoveryFee,
    ExpertFee,
    NoticeExpense,
}

impl AmountField {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::ClaimAmount,
            Self::AcceptedAmount,
            Self::AdvanceFee,
            Self::ApplicationFee,
            Self::CompletionFee,
            Self::AmendmentFee,
            Self::DiscoveryFee,
            Self::ExpertFee,
            Self::NoticeExpense,
        ]
    }

    /// Form label of the field.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClaimAmount => "Dava edilen miktar",
            Self::AcceptedAmount => "Kabul edilen miktar",
            Self::AdvanceFee => "Peşin/Nisbi Harç",
            Self::ApplicationFee => "Başvuru Harcı",
            Self::CompletionFee => "Tamamlama Harcı",
            Self::AmendmentFee => "Islah Harcı",
            Self::DiscoveryFee => "Keşif Harcı",
            Self::ExpertFee => "Bilirkişi Ücretleri",
            Self::NoticeExpense => "Tebligat, Posta ve Sair Masraf",
        }
    }
}

impl CaseAmounts {
    pub fn get(&self, field: AmountField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: AmountField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    fn slot(&self, field: AmountField) -> &Option<String> {
        match field {
            AmountField::ClaimAmount => &self.claim_amount,
            AmountField::AcceptedAmount => &self.accepted_amount,
            AmountField::AdvanceFee => &self.advance_fee,
            AmountField::ApplicationFee => &self.application_fee,
            AmountField::CompletionFee => &self.completion_fee,
            AmountField::AmendmentFee => &self.amendment_fee,
            AmountField::DiscoveryFee => &self.discovery_fee,
            AmountField::ExpertFee => &self.expert_fee,
            AmountField::NoticeExpense => &self.notice_expense,
        }
    }

    fn slot_mut(&mut self, field: AmountField) -> &mut Option<String> {
        match field {
            AmountField::ClaimAmount => &mut self.claim_amount,
            AmountField::AcceptedAmount => &mut self.accepted_amount,
            AmountField::AdvanceFee => &mut self.advance_fee,
            AmountField::ApplicationFee => &mut self.application_fee,
            AmountField::CompletionFee => &mut self.completion_fee,
            AmountField::AmendmentFee => &mut self.amendment_fee,
            AmountField::DiscoveryFee => &mut self.discovery_fee,
            AmountField::ExpertFee => &mut self.expert_fee,
            AmountField::NoticeExpense => &mut self.notice_expense,
        }
    }

    /// Parses one field; absent or blank is zero, negative amounts are rejected.
    pub(crate) fn parse(&self, field: AmountField) -> Result<Decimal, CalculationErrorKind> {
        let raw = self.get(field);
        let amount = parse_optional_amount(raw).map_err(|_| {
            CalculationErrorKind::InvalidNumberFormat {
                field: field.label(),
                text: raw.unwrap_or_default().to_string(),
            }
        })?;

        if amount < Decimal::ZERO {
            return Err(CalculationErrorKind::InvalidAmount {
                field: field.label(),
                requirement: "negatif olamaz",
            });
        }

        Ok(amount)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parties {
    pub multiple_plaintiffs: bool,
    pub multiple_defendants: bool,
}

impl Parties {
    pub fn phrasing(&self) -> PartyPhrasing {
        resolve_party(self.multiple_plaintiffs, self.multiple_defendants)
    }
}

impl From<&CaseFlags> for Parties {
    fn from(flags: &CaseFlags) -> Self {
        Self {
            multiple_plaintiffs: flags.multiple_plaintiffs,
            multiple_defendants: flags.multiple_defendants,
        }
    }
}

/// Court fees paid during the proceedings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaidFees {
    pub advance: Decimal,
    pub completion: Decimal,
    pub amendment: Decimal,
}

impl PaidFees {
    fn parse(amounts: &CaseAmounts) -> Result<Self, CalculationErrorKind> {
        Ok(Self {
            advance: amounts.parse(AmountField::AdvanceFee)?,
            completion: amounts.parse(AmountField::CompletionFee)?,
            amendment: amounts.parse(AmountField::AmendmentFee)?,
        })
    }
}

/// Litigation expenses advanced by the plaintiff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expenses {
    pub discovery: Decimal,
    pub application: Decimal,
    pub expert: Decimal,
    pub notice: Decimal,
}

impl Expenses {
    fn parse(amounts: &CaseAmounts) -> Result<Self, CalculationErrorKind> {
        Ok(Self {
            discovery: amounts.parse(AmountField::DiscoveryFee)?,
            application: amounts.parse(AmountField::ApplicationFee)?,
            expert: amounts.parse(AmountField::ExpertFee)?,
            notice: amounts.parse(AmountField::NoticeExpense)?,
        })
    }
}

/// Claim accepted in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullAcceptCase {
    pub parties: Parties,
    pub monetary_case: bool,
    pub exempt_from_fee: bool,
    pub has_plaintiff_attorney: bool,
    pub claim_amount: Decimal,
    pub fees: PaidFees,
    pub expenses: Expenses,
}

impl TryFrom<&CaseInput> for FullAcceptCase {
    type Error = CalculationErrorKind;

    fn try_from(input: &CaseInput) -> Result<Self, Self::Error> {
        Ok(Self {
            parties: Parties::from(&input.flags),
            monetary_case: input.flags.monetary_case,
            exempt_from_fee: input.flags.exempt_from_fee,
            has_plaintiff_attorney: input.flags.has_plaintiff_attorney,
            claim_amount: input.amounts.parse(AmountField::ClaimAmount)?,
            fees: PaidFees::parse(&input.amounts)?,
            expenses: Expenses::parse(&input.amounts)?,
        })
    }
}

/// Claim accepted in part. The accepted amount never exceeds the claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialAcceptCase {
    pub parties: Parties,
    pub monetary_case: bool,
    pub exempt_from_fee: bool,
    pub has_plaintiff_attorney: bool,
    pub has_defendant_attorney: bool,
    claim_amount: Decimal,
    accepted_amount: Decimal,
    pub fees: PaidFees,
    pub expenses: Expenses,
}

impl PartialAcceptCase {
    pub fn claim_amount(&self) -> Decimal {
        self.claim_amount
    }

    pub fn accepted_amount(&self) -> Decimal {
        self.accepted_amount
    }

    pub fn rejected_amount(&self) -> Decimal {
        self.claim_amount - self.accepted_amount
    }

    /// Accepted share of the claim, zero when nothing was claimed.
    pub fn acceptance_ratio(&self) -> Decimal {
        if self.claim_amount.is_zero() {
            Decimal::ZERO
        } else {
            self.accepted_amount / self.claim_amount
        }
    }
}

impl TryFrom<&CaseInput> for PartialAcceptCase {
    type Error = CalculationErrorKind;

    fn try_from(input: &CaseInput) -> Result<Self, Self::Error> {
        let claim_amount = input.amounts.parse(AmountField::ClaimAmount)?;
        let accepted_amount = input.amounts.parse(AmountField::AcceptedAmount)?;
        if accepted_amount > claim_amount {
            return Err(CalculationErrorKind::AcceptedExceedsClaim {
                accepted: accepted_amount,
                claim: claim_amount,
            });
        }

        Ok(Self {
            parties: Parties::from(&input.flags),
            monetary_case: input.flags.monetary_case,
            exempt_from_fee: input.flags.exempt_from_fee,
            has_plaintiff_attorney: input.flags.has_plaintiff_attorney,
            has_defendant_attorney: input.flags.has_defendant_attorney,
            claim_amount,
            accepted_amount,
            fees: PaidFees::parse(&input.amounts)?,
            expenses: Expenses::parse(&input.amounts)?,
        })
    }
}

/// Claim rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionCase {
    pub parties: Parties,
    pub has_defendant_attorney: bool,
    pub claim_amount: Decimal,
    pub fees: PaidFees,
    pub expenses: Expenses,
}

impl TryFrom<&CaseInput> for RejectionCase {
    type Error = CalculationErrorKind;

    fn try_from(input: &CaseInput) -> Result<Self, Self::Error> {
        Ok(Self {
            parties: Parties::from(&input.flags),
            has_defendant_attorney: input.flags.has_defendant_attorney,
            claim_amount: input.amounts.parse(AmountField::ClaimAmount)?,
            fees: PaidFees::parse(&input.amounts)?,
            expenses: Expenses::parse(&input.amounts)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn monetary_flag_defaults_to_true() {
        let flags: CaseFlags = serde_json::from_str("{}").expect("empty flags");
        assert!(flags.monetary_case);
        assert!(!flags.exempt_from_fee);

        let input: CaseInput =
            serde_json::from_str(r#"{"amounts": {"claimAmount": "1.000,00"}}"#).expect("input");
        assert!(input.flags.monetary_case);
        assert_eq!(input.amounts.get(AmountField::ClaimAmount), Some("1.000,00"));
    }

    #[test]
    fn invalid_amount_names_the_field() {
        let mut input = CaseInput::default();
        input.amounts.set(AmountField::ExpertFee, "on bin");

        match FullAcceptCase::try_from(&input) {
            Err(CalculationErrorKind::InvalidNumberFormat { field, text }) => {
                assert_eq!(field, "Bilirkişi Ücretleri");
                assert_eq!(text, "on bin");
            }
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut input = CaseInput::default();
        input.amounts.set(AmountField::AdvanceFee, "-10,00");

        assert_eq!(
            RejectionCase::try_from(&input),
            Err(CalculationErrorKind::InvalidAmount {
                field: "Peşin/Nisbi Harç",
                requirement: "negatif olamaz",
            })
        );
    }

    #[test]
    fn partial_accept_rejects_accepted_above_claim() {
        let mut input = CaseInput::default();
        input.amounts.set(AmountField::ClaimAmount, "1000");
        input.amounts.set(AmountField::AcceptedAmount, "1500");

        assert_eq!(
            PartialAcceptCase::try_from(&input),
            Err(CalculationErrorKind::AcceptedExceedsClaim {
                accepted: dec!(1500),
                claim: dec!(1000),
            })
        );
    }

    #[test]
    fn partial_accept_amounts_add_up() {
        let mut input = CaseInput::default();
        input.amounts.set(AmountField::ClaimAmount, "80.000,00");
        input.amounts.set(AmountField::AcceptedAmount, "20.000,00");

        let case = PartialAcceptCase::try_from(&input).expect("valid partial accept");
        assert_eq!(case.accepted_amount() + case.rejected_amount(), case.claim_amount());
        assert_eq!(case.acceptance_ratio(), dec!(0.25));
    }

    #[test]
    fn zero_claim_gives_zero_ratio() {
        let case = PartialAcceptCase::try_from(&CaseInput::default()).expect("empty case");
        assert_eq!(case.acceptance_ratio(), Decimal::ZERO);
        assert_eq!(case.rejected_amount(), Decimal::ZERO);
    }
}
