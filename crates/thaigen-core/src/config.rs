use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_FIRSTNAME_PHONEME_PATH: &str = "database/firstname_phoneme.txt";
pub const DEFAULT_LASTNAME_PHONEME_PATH: &str = "database/lastname_phoneme.txt";
pub const DEFAULT_ADDRESS_DATABASE_PATH: &str = "database/database.xlsx";
/// Raw spreadsheet published by the thai-address-database project.
pub const DEFAULT_ADDRESS_DATABASE_URL: &str = "https://github.com/Sellsuki/thai-address-database/blob/master/database/raw_database/database.xlsx?raw=true";

/// Locations of the reference resources consumed by the loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Line file of `<name>\t<phoneme>` entries for given names.
    pub firstname_phoneme_path: PathBuf,
    /// Line file of `<name>\t<phoneme>` entries for family names.
    pub lastname_phoneme_path: PathBuf,
    /// Local copy of the address table (`.xlsx` or `.csv`).
    pub address_database_path: PathBuf,
    /// Remote location fetched when the local address table is absent.
    pub address_database_url: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            firstname_phoneme_path: PathBuf::from(DEFAULT_FIRSTNAME_PHONEME_PATH),
            lastname_phoneme_path: PathBuf::from(DEFAULT_LASTNAME_PHONEME_PATH),
            address_database_path: PathBuf::from(DEFAULT_ADDRESS_DATABASE_PATH),
            address_database_url: DEFAULT_ADDRESS_DATABASE_URL.to_string(),
        }
    }
}

impl ReferenceConfig {
    /// Resolve every relative path against `root`, leaving absolute paths untouched.
    pub fn rooted_at(&self, root: &Path) -> Self {
        Self {
            firstname_phoneme_path: root.join(&self.firstname_phoneme_path),
            lastname_phoneme_path: root.join(&self.lastname_phoneme_path),
            address_database_path: root.join(&self.address_database_path),
            address_database_url: self.address_database_url.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (label, path) in [
            ("firstname_phoneme_path", &self.firstname_phoneme_path),
            ("lastname_phoneme_path", &self.lastname_phoneme_path),
            ("address_database_path", &self.address_database_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::InvalidConfig(format!("{label} must not be empty")));
            }
        }

        let url = self.address_database_url.as_str();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(Error::InvalidConfig(format!(
                "address_database_url must be an http(s) url, got '{url}'"
            )));
        }
        Ok(())
    }
}
