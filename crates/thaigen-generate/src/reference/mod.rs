//! Reference data ingestion: name/phoneme lists and the address table.

pub mod address;
pub mod fetch;
pub mod names;
pub mod tabular;

pub use address::{AddressReferenceLoader, AddressReferenceSet, normalize_zipcode};
pub use fetch::{HttpFetcher, OfflineFetcher, ReferenceFetcher};
pub use names::{NameReferenceSet, dedupe_by_phoneme, parse_name_phoneme_line};
pub use tabular::{AddressRow, CsvDecoder, TabularDecoder, XlsxDecoder, decoder_for};

use thaigen_core::ReferenceConfig;

use crate::errors::GenerationError;
use crate::model::ReferenceSummary;

/// Every reference set a run samples from. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub first_names: NameReferenceSet,
    pub last_names: NameReferenceSet,
    pub address: AddressReferenceSet,
}

impl ReferenceData {
    pub async fn load(
        config: &ReferenceConfig,
        fetcher: &dyn ReferenceFetcher,
    ) -> Result<Self, GenerationError> {
        let first_names = NameReferenceSet::load(&config.firstname_phoneme_path)?;
        let last_names = NameReferenceSet::load(&config.lastname_phoneme_path)?;
        let address = AddressReferenceLoader::new(config, fetcher).load().await?;
        Ok(Self {
            first_names,
            last_names,
            address,
        })
    }

    pub fn summary(&self) -> ReferenceSummary {
        ReferenceSummary {
            first_names: self.first_names.len(),
            last_names: self.last_names.len(),
            provinces: self.address.provinces.len(),
            amphoes: self.address.amphoes.len(),
            districts: self.address.districts.len(),
            zipcodes: self.address.zipcodes.len(),
        }
    }
}
