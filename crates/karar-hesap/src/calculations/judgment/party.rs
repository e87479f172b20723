/// Grammatical forms used to refer to the parties in decision text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyPhrasing {
    /// "Davacı" / "Davacılar"
    pub plaintiff_prefix: &'static str,
    /// "davacıya" / "davacılara"
    pub plaintiff_dative: &'static str,
    /// "davacıdan" / "davacılardan"
    pub plaintiff_ablative: &'static str,
    /// "Davalı" / "Davalılar"
    pub defendant_prefix: &'static str,
    /// "davalıdan" / "davalılardan"
    pub defendant_ablative: &'static str,
    /// "davalıya" / "davalılara"
    pub defendant_dative: &'static str,
}

pub fn resolve_party(multiple_plaintiffs: bool, multiple_defendants: bool) -> PartyPhrasing {
    let (plaintiff_prefix, plaintiff_dative, plaintiff_ablative) = if multiple_plaintiffs {
        ("Davacılar", "davacılara", "davacılardan")
    } else {
        ("Davacı", "davacıya", "davacıdan")
    };

    let (defendant_prefix, defendant_ablative, defendant_dative) = if multiple_defendants {
        ("Davalılar", "davalılardan", "davalılara")
    } else {
        ("Davalı", "davalıdan", "davalıya")
    };

    PartyPhrasing {
        plaintiff_prefix,
        plaintiff_dative,
        plaintiff_ablative,
        defendant_prefix,
        defendant_ablative,
        defendant_dative,
    }
}
