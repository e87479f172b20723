//! Itemized totals of paid court fees and litigation expenses.

use super::domain::{Expenses, PaidFees};
use crate::calculations::CalculationErrorKind;
use crate::money::format_currency;
use rust_decimal::Decimal;

const PAID_FEES_TOTAL: &str = "Yatırılan harçlar toplamı";
const EXPENSES_TOTAL: &str = "Yargılama giderleri toplamı";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeKind {
    Advance,
    Completion,
    Amendment,
}

impl FeeKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Advance => "peşin harcı",
            Self::Completion => "tamamlama harcı",
            Self::Amendment => "ıslah harcı",
        }
    }
}

/// Fees listed after the advance fee, in decision order.
pub const ADDITIONAL_FEE_CATEGORIES: [FeeKind; 2] = [FeeKind::Completion, FeeKind::Amendment];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseKind {
    Discovery,
    Application,
    Expert,
    Notice,
}

impl ExpenseKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discovery => "keşif harcı",
            Self::Application => "başvuru harcı",
            Self::Expert => "bilirkişi ücreti",
            Self::Notice => "tebligat ve posta gideri",
        }
    }
}

pub const EXPENSE_CATEGORIES: [ExpenseKind; 4] = [
    ExpenseKind::Discovery,
    ExpenseKind::Application,
    ExpenseKind::Expert,
    ExpenseKind::Notice,
];

impl PaidFees {
    pub fn amount(&self, kind: FeeKind) -> Decimal {
        match kind {
            FeeKind::Advance => self.advance,
            FeeKind::Completion => self.completion,
            FeeKind::Amendment => self.amendment,
        }
    }
}

impl Expenses {
    pub fn amount(&self, kind: ExpenseKind) -> Decimal {
        match kind {
            ExpenseKind::Discovery => self.discovery,
            ExpenseKind::Application => self.application,
            ExpenseKind::Expert => self.expert,
            ExpenseKind::Notice => self.notice,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub label: &'static str,
    pub amount: Decimal,
}

impl LineItem {
    /// "1.250,00TL keşif harcı"
    pub fn describe(&self) -> String {
        format!("{}TL {}", format_currency(self.amount), self.label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeBreakdown {
    items: Vec<LineItem>,
    total: Decimal,
}

impl FeeBreakdown {
    fn push(
        &mut self,
        total_field: &'static str,
        label: &'static str,
        amount: Decimal,
    ) -> Result<(), CalculationErrorKind> {
        self.total = self
            .total
            .checked_add(amount)
            .ok_or(CalculationErrorKind::InvalidAmount {
                field: total_field,
                requirement: "hesaplanabilir sınırı aşıyor",
            })?;
        self.items.push(LineItem { label, amount });
        Ok(())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items rendered and joined with ", ".
    pub fn describe_items(&self) -> String {
        self.items
            .iter()
            .map(LineItem::describe)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Advance fee first (even when zero), then each additional fee above zero.
/// Fails when the total no longer fits a [`Decimal`].
pub fn aggregate_fees(fees: &PaidFees) -> Result<FeeBreakdown, CalculationErrorKind> {
    let mut breakdown = FeeBreakdown::default();
    breakdown.push(PAID_FEES_TOTAL, FeeKind::Advance.label(), fees.advance)?;

    for kind in ADDITIONAL_FEE_CATEGORIES {
        let amount = fees.amount(kind);
        if amount > Decimal::ZERO {
            breakdown.push(PAID_FEES_TOTAL, kind.label(), amount)?;
        }
    }

    Ok(breakdown)
}

/// Each category above zero, in the order given.
pub fn aggregate_expenses(
    expenses: &Expenses,
    categories: &[ExpenseKind],
) -> Result<FeeBreakdown, CalculationErrorKind> {
    let mut breakdown = FeeBreakdown::default();

    for &kind in categories {
        let amount = expenses.amount(kind);
        if amount > Decimal::ZERO {
            breakdown.push(EXPENSES_TOTAL, kind.label(), amount)?;
        }
    }

    Ok(breakdown)
}
