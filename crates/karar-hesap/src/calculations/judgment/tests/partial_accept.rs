use super::common::*;
use crate::calculations::judgment::{AmountField, CaseFlags};
use crate::calculations::{CalculationErrorKind, CalculationType};
use rust_decimal_macros::dec;

fn represented_both() -> CaseFlags {
    CaseFlags {
        has_plaintiff_attorney: true,
        has_defendant_attorney: true,
        ..CaseFlags::default()
    }
}

#[test]
fn fees_expenses_and_attorney_fees_follow_the_acceptance_ratio() {
    let input = case_with(
        represented_both(),
        &[
            (AmountField::ClaimAmount, "80.000,00"),
            (AmountField::AcceptedAmount, "20.000,00"),
            (AmountField::AdvanceFee, "1.000,00"),
            (AmountField::ExpertFee, "2.000,00"),
        ],
    );
    let clauses = engine().partial_accept(&input).expect("valid partial accept");

    assert_eq!(
        clause_list(&clauses),
        [
            "-Harçlar Kanunu uyarınca dava değeri üzerinden alınması gereken toplam 1366,20TL \
             harçtan daha önce ödenen toplam 1000,00TL harç düşüldükten sonra eksik kalan \
             366,20TL harcın davalıdan alınarak hazineye gelir kaydına,",
            "-Davacı tarafından yatırılan 1000,00TL peşin harcının kabul/ret oranı dikkate \
             alınarak 250,00TL'nin davalıdan alınarak davacıya verilmesine, bakiye 750,00TL'nin \
             Davacı üzerinde bırakılmasına,",
            "-Davacı tarafından yapılan; 2000,00TL bilirkişi ücreti olmak üzere toplam 2000,00TL \
             yargılama giderinin kabul/ret oranı dikkate alınarak 500,00TL'nin davalıdan \
             alınarak davacıya verilmesine, bakiye yargılama gideri olan 1500,00TL'nin Davacı \
             üzerinde bırakılmasına,",
            attorney_clause("Davacı", "20.000,00", "davalıdan", "davacıya").as_str(),
            attorney_clause("Davalı", "30.000,00", "davacıdan", "davalıya").as_str(),
            ADVANCE_REFUND,
        ]
    );
}

#[test]
fn repeating_ratio_shares_still_add_up() {
    let input = case(&[
        (AmountField::ClaimAmount, "30000"),
        (AmountField::AcceptedAmount, "10000"),
        (AmountField::ApplicationFee, "900"),
    ]);
    let clauses = engine().partial_accept(&input).expect("valid partial accept");

    let expense_clause = &clauses.as_slice()[1];
    assert!(expense_clause.contains("alınarak 300,00TL'nin davalıdan"));
    assert!(expense_clause.contains("gideri olan 600,00TL'nin Davacı"));
}

#[test]
fn defendant_attorney_fee_is_computed_on_the_rejected_amount() {
    let input = case_with(
        represented_defendant(),
        &[
            (AmountField::ClaimAmount, "1.250.000"),
            (AmountField::AcceptedAmount, "250.000"),
        ],
    );
    let clauses = engine().partial_accept(&input).expect("valid partial accept");

    assert_eq!(clauses.len(), 3);
    assert_eq!(
        clauses.as_slice()[1],
        attorney_clause("Davalı", "152.000,00", "davacıdan", "davalıya")
    );
}

#[test]
fn surplus_skips_the_fee_share() {
    let input = case(&[
        (AmountField::ClaimAmount, "10000"),
        (AmountField::AcceptedAmount, "5000"),
        (AmountField::AdvanceFee, "615,40"),
        (AmountField::CompletionFee, "100"),
    ]);
    let clauses = engine().partial_accept(&input).expect("valid partial accept");

    assert_eq!(
        clause_list(&clauses),
        [
            "-Harçlar Kanunu uyarınca dava değeri üzerinden alınması gereken toplam 615,40TL \
             harcın mahsubu ile fazladan alınan 100,00TL'nin yatıran tarafa iadesine,",
            ADVANCE_REFUND,
        ]
    );
}

#[test]
fn exempt_defendant_skips_fee_ruling_and_share() {
    let flags = CaseFlags {
        exempt_from_fee: true,
        ..CaseFlags::default()
    };
    let input = case_with(
        flags,
        &[
            (AmountField::ClaimAmount, "10000"),
            (AmountField::AcceptedAmount, "5000"),
            (AmountField::AdvanceFee, "300"),
        ],
    );
    let clauses = engine().partial_accept(&input).expect("valid partial accept");

    assert_eq!(clause_list(&clauses), [EXEMPT_FROM_FEE, ADVANCE_REFUND]);
}

#[test]
fn accepted_above_claim_is_rejected() {
    let input = case(&[
        (AmountField::ClaimAmount, "1000"),
        (AmountField::AcceptedAmount, "1500"),
    ]);
    let err = engine().partial_accept(&input).expect_err("accepted exceeds claim");

    assert_eq!(err.calculation(), CalculationType::PartialAccept);
    assert_eq!(
        err.kind(),
        &CalculationErrorKind::AcceptedExceedsClaim {
            accepted: dec!(1500),
            claim: dec!(1000),
        }
    );
    assert_eq!(
        err.to_string(),
        "Kısmen kabul hesaplaması hatası: Kabul edilen miktar, dava edilen miktardan büyük olamaz!"
    );
}

#[test]
fn defendant_bears_the_accepted_share_of_paid_fees() {
    let input = case(&[
        (AmountField::ClaimAmount, "10.000,00"),
        (AmountField::AcceptedAmount, "8.000,00"),
        (AmountField::AdvanceFee, "200,00"),
    ]);
    let clauses = engine().partial_accept(&input).expect("valid partial accept");

    assert_eq!(
        clauses.as_slice()[1],
        "-Davacı tarafından yatırılan 200,00TL peşin harcının kabul/ret oranı dikkate alınarak \
         160,00TL'nin davalıdan alınarak davacıya verilmesine, bakiye 40,00TL'nin Davacı \
         üzerinde bırakılmasına,"
    );
}
