use std::fmt::Display;

use rand::Rng;

use crate::errors::GenerationError;
use crate::generators::random_phone_number;

pub const DEFAULT_ADDRESS_PHRASES: &[&str] = &["อาศัยอยู่ที่", "ที่อยู่", "อยู่ที่"];
pub const DEFAULT_PHONE_PHRASES: &[&str] = &["เบอร์โทรศัพท์", "โทร", "เบอร์โทร", "ติดต่อเบอร์"];

/// Joins a name, an address and a fresh phone number with connector phrases.
#[derive(Debug, Clone)]
pub struct SentenceAssembler {
    address_phrases: Vec<String>,
    phone_phrases: Vec<String>,
}

impl Default for SentenceAssembler {
    fn default() -> Self {
        Self {
            address_phrases: to_owned(DEFAULT_ADDRESS_PHRASES),
            phone_phrases: to_owned(DEFAULT_PHONE_PHRASES),
        }
    }
}

impl SentenceAssembler {
    pub fn new(
        address_phrases: Vec<String>,
        phone_phrases: Vec<String>,
    ) -> Result<Self, GenerationError> {
        if address_phrases.is_empty() || phone_phrases.is_empty() {
            return Err(GenerationError::InvalidConfig(
                "sentence phrase sets must not be empty".to_string(),
            ));
        }
        Ok(Self {
            address_phrases,
            phone_phrases,
        })
    }

    /// `<name> <address phrase> <address> <phone phrase> <phone>`
    pub fn assemble(
        &self,
        name: &impl Display,
        address: &impl Display,
        rng: &mut dyn rand::RngCore,
    ) -> String {
        let address_phrase = &self.address_phrases[rng.random_range(0..self.address_phrases.len())];
        let phone_phrase = &self.phone_phrases[rng.random_range(0..self.phone_phrases.len())];
        let phone = random_phone_number(rng);
        format!("{name} {address_phrase} {address} {phone_phrase} {phone}")
    }
}

fn to_owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|phrase| phrase.to_string()).collect()
}
