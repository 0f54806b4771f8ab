use std::fmt;

use serde::{Deserialize, Serialize};

/// One parsed line of a name/phoneme resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamePhonemeEntry {
    pub name: String,
    pub phoneme: String,
}

impl NamePhonemeEntry {
    pub fn new(name: impl Into<String>, phoneme: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phoneme: phoneme.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Honorific placed before a person's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Title {
    /// Everyday title tied to the person's gender.
    Common(&'static str),
    /// Formal, military, police or clergy title used regardless of gender.
    Formal(&'static str),
}

impl Title {
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Common(value) | Title::Formal(value) => value,
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated person name borrowing its given and family names from the
/// reference sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName<'a> {
    pub gender: Gender,
    pub pronoun: Option<&'static str>,
    pub title: Title,
    pub first: &'a str,
    pub last: &'a str,
}

impl fmt::Display for PersonName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pronoun) = self.pronoun {
            write!(f, "{pronoun} ")?;
        }
        write!(f, "{} {} {}", self.title, self.first, self.last)
    }
}

/// House number in either `block/unit` or plain form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseNumber {
    Compound { block: u16, unit: u16 },
    Single(u16),
}

impl fmt::Display for HouseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HouseNumber::Compound { block, unit } => write!(f, "{block}/{unit}"),
            HouseNumber::Single(value) => write!(f, "{value}"),
        }
    }
}

/// Naming convention for the two administrative levels below a province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressNaming {
    /// ตำบล / อำเภอ, used in provincial areas.
    Rural,
    /// แขวง / เขต, used in Bangkok.
    Urban,
}

impl AddressNaming {
    /// Prefix for the lower and the upper administrative unit.
    pub fn prefixes(&self) -> (&'static str, &'static str) {
        match self {
            AddressNaming::Rural => ("ตำบล", "อำเภอ"),
            AddressNaming::Urban => ("แขวง", "เขต"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThaiAddress<'a> {
    pub house: HouseNumber,
    pub naming: AddressNaming,
    pub amphoe: &'a str,
    pub district: &'a str,
    pub province: &'a str,
    pub zipcode: &'a str,
}

impl fmt::Display for ThaiAddress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lower, upper) = self.naming.prefixes();
        write!(
            f,
            "บ้านเลขที่ {} {lower}{} {upper}{} จังหวัด{} {}",
            self.house, self.amphoe, self.district, self.province, self.zipcode
        )
    }
}

/// Ten-digit Thai mobile number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneNumber([u8; 10]);

impl PhoneNumber {
    /// Each element is reduced modulo 10.
    pub fn from_digits(digits: [u8; 10]) -> Self {
        Self(digits.map(|digit| digit % 10))
    }

    pub fn digits(&self) -> &[u8; 10] {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_with_and_without_pronoun() {
        let mut name = PersonName {
            gender: Gender::Female,
            pronoun: None,
            title: Title::Common("นางสาว"),
            first: "สมหญิง",
            last: "ใจดี",
        };
        assert_eq!(name.to_string(), "นางสาว สมหญิง ใจดี");

        name.pronoun = Some("ดิฉัน");
        assert_eq!(name.to_string(), "ดิฉัน นางสาว สมหญิง ใจดี");
    }

    #[test]
    fn renders_urban_address() {
        let address = ThaiAddress {
            house: HouseNumber::Compound { block: 12, unit: 3 },
            naming: AddressNaming::Urban,
            amphoe: "บางรัก",
            district: "สีลม",
            province: "กรุงเทพมหานคร",
            zipcode: "10500",
        };
        assert_eq!(
            address.to_string(),
            "บ้านเลขที่ 12/3 แขวงบางรัก เขตสีลม จังหวัดกรุงเทพมหานคร 10500"
        );
    }

    #[test]
    fn phone_number_renders_ten_digits() {
        let phone = PhoneNumber::from_digits([0, 8, 1, 2, 3, 4, 5, 6, 7, 19]);
        assert_eq!(phone.to_string(), "0812345679");
        assert_eq!(phone.digits()[9], 9);
    }
}
