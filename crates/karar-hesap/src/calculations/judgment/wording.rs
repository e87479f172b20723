//! Decision clause text.

use super::costs::FeeBreakdown;
use super::fee_decision::{FeeBasis, FeeDecision};
use super::party::PartyPhrasing;
use crate::money::format_currency;
use rust_decimal::Decimal;

pub(crate) const EXEMPT_FROM_FEE: &str =
    "-Davalı taraf harçtan muaf olduğundan bu hususta karar verilmesine yer olmadığına,";

pub(crate) const SUFFICIENT_FEE: &str =
    "-Alınan harç yeterli olmakla başkaca harç alınmasına yer olmadığına,";

pub(crate) const ADVANCE_REFUND: &str = "-Kalan gider avansının karar kesinleştiğinde ve talep halinde, yatıran taraf dosyaya banka IBAN numarası bildirdiği takdirde bu hesaba, kaleme müracaat etmesi halinde mahkemeler veznesinden, aksi halde masrafı avanstan karşılanmak üzere resen PTT yoluyla konutta ödemeli olarak iadesine,";

/// Split of an amount between the parties by the acceptance ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Share {
    /// Borne by the defendant.
    pub(crate) defendant: Decimal,
    /// Left with the plaintiff.
    pub(crate) plaintiff: Decimal,
}

impl Share {
    pub(crate) fn split(total: Decimal, acceptance_ratio: Decimal) -> Self {
        let defendant = total * acceptance_ratio;
        Self {
            defendant,
            plaintiff: total - defendant,
        }
    }
}

/// Fee ruling; `payer` is the ablative form of the party charged with any deficiency.
pub(crate) fn fee_ruling(decision: &FeeDecision, basis: FeeBasis, payer: &str) -> String {
    let on_case_value = if basis.is_proportional() {
        "dava değeri üzerinden "
    } else {
        ""
    };

    match *decision {
        FeeDecision::Deficient { required, paid, .. } if paid.is_zero() => format!(
            "-Harçlar Kanunu uyarınca alınması gereken toplam {}TL karar ve ilam harcının \
             {payer} alınarak hazineye gelir kaydına,",
            format_currency(required)
        ),
        FeeDecision::Deficient {
            required,
            paid,
            remaining,
        } => format!(
            "-Harçlar Kanunu uyarınca {on_case_value}alınması gereken toplam {}TL harçtan daha \
             önce ödenen toplam {}TL harç düşüldükten sonra eksik kalan {}TL harcın {payer} \
             alınarak hazineye gelir kaydına,",
            format_currency(required),
            format_currency(paid),
            format_currency(remaining)
        ),
        FeeDecision::Sufficient { .. } => SUFFICIENT_FEE.to_string(),
        FeeDecision::Surplus { required, refund } => format!(
            "-Harçlar Kanunu uyarınca {on_case_value}alınması gereken toplam {}TL harcın mahsubu \
             ile fazladan alınan {}TL'nin yatıran tarafa iadesine,",
            format_currency(required),
            format_currency(refund)
        ),
    }
}

/// The plaintiff's paid fees collected from the defendant.
pub(crate) fn fee_reimbursement(fees: &FeeBreakdown, party: &PartyPhrasing) -> String {
    format!(
        "-{} tarafından yatırılan {} {} alınarak {} verilmesine,",
        party.plaintiff_prefix,
        paid_fees_subject(fees),
        party.defendant_ablative,
        party.plaintiff_dative
    )
}

/// The plaintiff's paid fees split by the acceptance ratio.
pub(crate) fn fee_share(fees: &FeeBreakdown, share: Share, party: &PartyPhrasing) -> String {
    format!(
        "-{} tarafından yatırılan {} kabul/ret oranı dikkate alınarak {}TL'nin {} alınarak {} \
         verilmesine, bakiye {}TL'nin {} üzerinde bırakılmasına,",
        party.plaintiff_prefix,
        paid_fees_subject(fees),
        format_currency(share.defendant),
        party.defendant_ablative,
        party.plaintiff_dative,
        format_currency(share.plaintiff),
        party.plaintiff_prefix
    )
}

// "615,40TL peşin harcının" or "..., ... olmak üzere toplam 900,00TL'nin"
fn paid_fees_subject(fees: &FeeBreakdown) -> String {
    match fees.items() {
        [single] => format!("{}nın", single.describe()),
        _ => format!(
            "{} olmak üzere toplam {}TL'nin",
            fees.describe_items(),
            format_currency(fees.total())
        ),
    }
}

/// All expenses collected from the defendant.
pub(crate) fn expense_award(expenses: &FeeBreakdown, party: &PartyPhrasing) -> String {
    format!(
        "-{} tarafından yapılan {} olmak üzere toplam {}TL yargılama giderinin {} alınarak {} \
         verilmesine,",
        party.plaintiff_prefix,
        expenses.describe_items(),
        format_currency(expenses.total()),
        party.defendant_ablative,
        party.plaintiff_dative
    )
}

/// Expenses split by the acceptance ratio.
pub(crate) fn expense_share(expenses: &FeeBreakdown, share: Share, party: &PartyPhrasing) -> String {
    format!(
        "-{} tarafından yapılan; {} olmak üzere toplam {}TL yargılama giderinin kabul/ret oranı \
         dikkate alınarak {}TL'nin {} alınarak {} verilmesine, bakiye yargılama gideri olan \
         {}TL'nin {} üzerinde bırakılmasına,",
        party.plaintiff_prefix,
        expenses.describe_items(),
        format_currency(expenses.total()),
        format_currency(share.defendant),
        party.defendant_ablative,
        party.plaintiff_dative,
        format_currency(share.plaintiff),
        party.plaintiff_prefix
    )
}

pub(crate) fn expenses_left_with_plaintiff(party: &PartyPhrasing) -> String {
    format!(
        "-{} tarafından yapılan yargılama giderinin kendi üzerine bırakılmasına,",
        party.plaintiff_prefix
    )
}

/// Attorney fee awarded to `represented`, collected from `payer` (ablative)
/// and given to `recipient` (dative).
pub(crate) fn attorney_fee_award(
    represented: &str,
    fee: Decimal,
    payer: &str,
    recipient: &str,
) -> String {
    format!(
        "-{represented} kendisini vekil ile temsil ettirdiğinden karar tarihi itibariyle \
         yürürlükte bulunan Avukatlık Asgari Ücret Tarifesi uyarınca hesaplanan {}TL vekalet \
         ücretinin {payer} alınarak {recipient} verilmesine,",
        format_currency(fee)
    )
}
