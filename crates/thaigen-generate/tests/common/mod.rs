#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use thaigen_core::ReferenceConfig;

pub const FIRST_NAMES: &str = "สมชาย\tS1\nสมหญิง\tS1\nสมศักดิ์\tS2\nมานี\tM1\n";
pub const LAST_NAMES: &str = "ใจดี\tJ1\nใจงาม\tJ2\nรักไทย\tR1\n";
pub const ADDRESS_CSV: &str = "district,amphoe,province,zipcode
พระบรมมหาราชวัง,พระนคร,กรุงเทพมหานคร,10200
วังบูรพาภิรมย์,พระนคร,กรุงเทพมหานคร,10200
ในเมือง,เมืองขอนแก่น,ขอนแก่น,40000.0
ศิลา,เมืองขอนแก่น,ขอนแก่น,
บ้านเป็ด,เมืองขอนแก่น,ขอนแก่น,n/a
";

pub fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("thaigen_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// Reference config whose files all live under `root`, with the address table
/// stored as CSV.
pub fn fixture_config(root: &Path) -> ReferenceConfig {
    ReferenceConfig {
        firstname_phoneme_path: root.join("database/firstname_phoneme.txt"),
        lastname_phoneme_path: root.join("database/lastname_phoneme.txt"),
        address_database_path: root.join("database/address.csv"),
        address_database_url: "https://example.invalid/address.csv".to_string(),
    }
}

/// Write the name fixtures and, when `with_address` is set, the address table.
pub fn write_fixtures(root: &Path, with_address: bool) -> ReferenceConfig {
    let config = fixture_config(root);
    fs::create_dir_all(root.join("database")).expect("create database dir");
    fs::write(&config.firstname_phoneme_path, FIRST_NAMES).expect("write first names");
    fs::write(&config.lastname_phoneme_path, LAST_NAMES).expect("write last names");
    if with_address {
        fs::write(&config.address_database_path, ADDRESS_CSV).expect("write address csv");
    }
    config
}
