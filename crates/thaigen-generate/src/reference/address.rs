use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use thaigen_core::ReferenceConfig;
use tracing::{info, warn};

use crate::errors::GenerationError;
use crate::reference::fetch::ReferenceFetcher;
use crate::reference::tabular::{AddressRow, decoder_for};

/// Distinct administrative names and zip codes used for address sampling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressReferenceSet {
    pub provinces: Vec<String>,
    pub amphoes: Vec<String>,
    pub districts: Vec<String>,
    /// Canonical integer text, ordered numerically.
    pub zipcodes: Vec<String>,
}

impl AddressReferenceSet {
    pub fn from_rows(rows: &[AddressRow]) -> Result<Self, GenerationError> {
        let mut provinces = BTreeSet::new();
        let mut amphoes = BTreeSet::new();
        let mut districts = BTreeSet::new();
        let mut zipcodes = BTreeSet::new();
        let mut dropped_zipcodes = 0_u64;

        for row in rows {
            insert_non_empty(&mut provinces, &row.province);
            insert_non_empty(&mut amphoes, &row.amphoe);
            insert_non_empty(&mut districts, &row.district);
            match row.zipcode.as_deref().and_then(normalize_zipcode) {
                Some(zipcode) => {
                    zipcodes.insert(zipcode);
                }
                None => dropped_zipcodes += 1,
            }
        }

        if dropped_zipcodes > 0 {
            warn!(
                event = "zipcodes_dropped",
                count = dropped_zipcodes,
                "dropped missing or non-numeric zip codes"
            );
        }

        let set = Self {
            provinces: provinces.into_iter().collect(),
            amphoes: amphoes.into_iter().collect(),
            districts: districts.into_iter().collect(),
            zipcodes: zipcodes.into_iter().map(|zip| zip.to_string()).collect(),
        };
        set.ensure_populated()?;
        Ok(set)
    }

    fn ensure_populated(&self) -> Result<(), GenerationError> {
        for (label, values) in [
            ("province", &self.provinces),
            ("amphoe", &self.amphoes),
            ("district", &self.districts),
            ("zipcode", &self.zipcodes),
        ] {
            if values.is_empty() {
                return Err(GenerationError::DataUnavailable(format!(
                    "address reference has no {label} values"
                )));
            }
        }
        Ok(())
    }
}

fn insert_non_empty(set: &mut BTreeSet<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        set.insert(value.to_string());
    }
}

/// Canonical integer form of a raw zip code cell, or `None` when it is empty,
/// non-numeric or negative. Fractional values are truncated.
pub fn normalize_zipcode(raw: &str) -> Option<u64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 || value >= u64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as u64)
}

/// Loads the address table, fetching it first when no local copy exists.
pub struct AddressReferenceLoader<'a> {
    config: &'a ReferenceConfig,
    fetcher: &'a dyn ReferenceFetcher,
}

impl<'a> AddressReferenceLoader<'a> {
    pub fn new(config: &'a ReferenceConfig, fetcher: &'a dyn ReferenceFetcher) -> Self {
        Self { config, fetcher }
    }

    pub async fn load(&self) -> Result<AddressReferenceSet, GenerationError> {
        let path = self.config.address_database_path.as_path();
        self.ensure_local(path).await?;

        let decoder = decoder_for(path)?;
        let rows = decoder.decode(path)?;
        let set = AddressReferenceSet::from_rows(&rows)?;
        info!(
            event = "address_reference_loaded",
            path = %path.display(),
            format = decoder.format(),
            rows = rows.len(),
            provinces = set.provinces.len(),
            amphoes = set.amphoes.len(),
            districts = set.districts.len(),
            zipcodes = set.zipcodes.len()
        );
        Ok(set)
    }

    async fn ensure_local(&self, path: &Path) -> Result<(), GenerationError> {
        if path.exists() {
            return Ok(());
        }

        let url = self.config.address_database_url.as_str();
        info!(event = "address_reference_fetch", url = %url, path = %path.display());
        let bytes = self.fetcher.fetch(url).await?;

        let write_error = |err: std::io::Error| {
            GenerationError::DataUnavailable(format!(
                "failed to store address reference {}: {}",
                path.display(),
                err
            ))
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, &bytes).map_err(write_error)?;
        info!(
            event = "address_reference_stored",
            path = %path.display(),
            bytes = bytes.len()
        );
        Ok(())
    }
}
