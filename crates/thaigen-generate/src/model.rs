use serde::{Deserialize, Serialize};

use thaigen_core::ReferenceConfig;

use crate::assembler::{DEFAULT_ADDRESS_PHRASES, DEFAULT_PHONE_PHRASES};
use crate::errors::GenerationError;

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Number of sentences written to the sink.
    pub n_sentences: u64,
    /// Probability of prefixing a name with a pronoun, in `[0, 1]`.
    pub p_pronoun: f64,
    /// Seed for reproducible runs; entropy is used when absent.
    pub seed: Option<u64>,
    /// Where the reference resources live.
    pub references: ReferenceConfig,
    /// Phrases introducing the address.
    pub address_phrases: Vec<String>,
    /// Phrases introducing the phone number.
    pub phone_phrases: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            n_sentences: 500,
            p_pronoun: 0.0,
            seed: None,
            references: ReferenceConfig::default(),
            address_phrases: DEFAULT_ADDRESS_PHRASES
                .iter()
                .map(|phrase| phrase.to_string())
                .collect(),
            phone_phrases: DEFAULT_PHONE_PHRASES
                .iter()
                .map(|phrase| phrase.to_string())
                .collect(),
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<(), GenerationError> {
        validate_probability("p_pronoun", self.p_pronoun)?;
        if self.address_phrases.is_empty() {
            return Err(GenerationError::InvalidConfig(
                "address_phrases must not be empty".to_string(),
            ));
        }
        if self.phone_phrases.is_empty() {
            return Err(GenerationError::InvalidConfig(
                "phone_phrases must not be empty".to_string(),
            ));
        }
        self.references.validate()?;
        Ok(())
    }
}

pub(crate) fn validate_probability(label: &str, value: f64) -> Result<(), GenerationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GenerationError::InvalidConfig(format!(
            "{label} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}

/// Sizes of the reference sets used by a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceSummary {
    pub first_names: usize,
    pub last_names: usize,
    pub provinces: usize,
    pub amphoes: usize,
    pub districts: usize,
    pub zipcodes: usize,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub started_at: String,
    pub seed: Option<u64>,
    pub sentences_requested: u64,
    pub sentences_written: u64,
    pub bytes_written: u64,
    pub references: ReferenceSummary,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: Option<u64>, sentences_requested: u64) -> Self {
        Self {
            run_id,
            started_at: chrono::Utc::now().to_rfc3339(),
            seed,
            sentences_requested,
            sentences_written: 0,
            bytes_written: 0,
            references: ReferenceSummary::default(),
            duration_ms: 0,
        }
    }
}
