use rand::Rng;

use thaigen_core::{Gender, PersonName, Title};

use crate::errors::GenerationError;
use crate::generators::pick;
use crate::model::validate_probability;
use crate::reference::NameReferenceSet;

/// Chance that a formal title replaces the everyday one.
pub const FORMAL_TITLE_PROBABILITY: f64 = 0.2;

/// Royal, clergy, army, air force and police titles, independent of gender.
pub const FORMAL_TITLES: &[&str] = &[
    "หม่อมหลวง",
    "บาทหลวง",
    "หม่อมราชวงศ์",
    "พลเอก",
    "พลตรี",
    "พันโท",
    "ร้อยเอก",
    "ร้อยตรี",
    "จ่าสิบโท",
    "สิบเอก",
    "สิบตรี",
    "พลโท",
    "พันเอก",
    "พันตรี",
    "ร้อยโท",
    "จ่าสิบเอก",
    "จ่าสิบตรี",
    "สิบโท",
    "พลทหาร",
    "พลอากาศเอก",
    "พลอากาศตรี",
    "นาวาอากาศโท",
    "เรืออากาศเอก",
    "เรืออากาศตรี",
    "พันจ่าอากาศโท",
    "จ่าอากาศเอก",
    "จ่าอากาศตรี",
    "พลอากาศโท",
    "นาวาอากาศเอก",
    "นาวาอากาศตรี",
    "เรืออากาศโท",
    "พันจ่าอากาศเอก",
    "พันจ่าอากาศตรี",
    "จ่าอากาศโท",
    "พลตำรวจเอก",
    "พลตำรวจตรี",
    "พันตำรวจโท",
    "ร้อยตำรวจเอก",
    "ร้อยตำรวจตรี",
    "นายดาบตำรวจ",
    "สิบตำรวจเอก",
    "พลตำรวจโท",
    "พันตำรวจเอก",
    "พันตำรวจตรี",
    "ร้อยตำรวจโท",
    "จ่าสิบตำรวจ",
    "สิบตำรวจตรี",
    "สิบตำรวจโท",
    "พลตำรวจ",
];

pub fn common_titles(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => &["เด็กชาย", "นาย"],
        Gender::Female => &["เด็กหญิง", "นาง", "นางสาว"],
    }
}

pub fn pronouns(gender: Gender) -> &'static [&'static str] {
    match gender {
        Gender::Male => &["กระผม", "ผม"],
        Gender::Female => &["หนู", "ดิฉัน"],
    }
}

/// Build `[pronoun] <title> <first> <last>`.
///
/// Gender is a fair coin. With [`FORMAL_TITLE_PROBABILITY`] the title comes from
/// [`FORMAL_TITLES`], otherwise from the gender's common titles. A pronoun for
/// the chosen gender is prepended with probability `p_pronoun`.
pub fn random_name<'a>(
    first_names: &'a NameReferenceSet,
    last_names: &'a NameReferenceSet,
    p_pronoun: f64,
    rng: &mut dyn rand::RngCore,
) -> Result<PersonName<'a>, GenerationError> {
    validate_probability("p_pronoun", p_pronoun)?;

    let gender = if rng.random_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    };
    let title = random_title(gender, rng);

    let first = pick(first_names.entries(), rng)
        .map(|entry| entry.name.as_str())
        .ok_or_else(|| {
            GenerationError::DataUnavailable("first name reference set is empty".to_string())
        })?;
    let last = pick(last_names.entries(), rng)
        .map(|entry| entry.name.as_str())
        .ok_or_else(|| {
            GenerationError::DataUnavailable("last name reference set is empty".to_string())
        })?;

    let pronoun = if rng.random_bool(p_pronoun) {
        pick(pronouns(gender), rng).copied()
    } else {
        None
    };

    Ok(PersonName {
        gender,
        pronoun,
        title,
        first,
        last,
    })
}

fn random_title(gender: Gender, rng: &mut dyn rand::RngCore) -> Title {
    if rng.random_bool(FORMAL_TITLE_PROBABILITY)
        && let Some(&title) = pick(FORMAL_TITLES, rng)
    {
        return Title::Formal(title);
    }
    let titles = common_titles(gender);
    Title::Common(titles[rng.random_range(0..titles.len())])
}
