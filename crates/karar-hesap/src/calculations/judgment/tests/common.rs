use crate::calculations::judgment::{AmountField, CaseFlags, CaseInput, JudgmentEngine};
use crate::calculations::ResultClauses;
use crate::tariff::Tariff;

pub(super) use crate::calculations::judgment::wording::{
    ADVANCE_REFUND, EXEMPT_FROM_FEE, SUFFICIENT_FEE,
};

pub(super) fn engine() -> JudgmentEngine {
    JudgmentEngine::new(Tariff::default())
}

pub(super) fn case(amounts: &[(AmountField, &str)]) -> CaseInput {
    case_with(CaseFlags::default(), amounts)
}

pub(super) fn case_with(flags: CaseFlags, amounts: &[(AmountField, &str)]) -> CaseInput {
    let mut input = CaseInput {
        flags,
        ..CaseInput::default()
    };
    for &(field, value) in amounts {
        input.amounts.set(field, value);
    }
    input
}

pub(super) fn represented_plaintiff() -> CaseFlags {
    CaseFlags {
        has_plaintiff_attorney: true,
        ..CaseFlags::default()
    }
}

pub(super) fn represented_defendant() -> CaseFlags {
    CaseFlags {
        has_defendant_attorney: true,
        ..CaseFlags::default()
    }
}

pub(super) fn clause_list(clauses: &ResultClauses) -> Vec<&str> {
    clauses.iter().collect()
}

pub(super) fn attorney_clause(represented: &str, fee: &str, payer: &str, recipient: &str) -> String {
    format!(
        "-{represented} kendisini vekil ile temsil ettirdiğinden karar tarihi itibariyle \
         yürürlükte bulunan Avukatlık Asgari Ücret Tarifesi uyarınca hesaplanan {fee}TL vekalet \
         ücretinin {payer} alınarak {recipient} verilmesine,"
    )
}

/// Largest amount a `Decimal` holds, in form notation.
pub(super) const LARGEST_AMOUNT: &str = "79.228.162.514.264.337.593.543.950.335";
