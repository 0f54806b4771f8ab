//! Core contracts for thaigen.
//!
//! This crate defines the value types produced by the field generators and the
//! configuration that names where reference data lives. Generation itself lives
//! in `thaigen-generate`.

pub mod config;
pub mod error;
pub mod model;

pub use config::{
    DEFAULT_ADDRESS_DATABASE_PATH, DEFAULT_ADDRESS_DATABASE_URL, DEFAULT_FIRSTNAME_PHONEME_PATH,
    DEFAULT_LASTNAME_PHONEME_PATH, ReferenceConfig,
};
pub use error::{Error, Result};
pub use model::{
    AddressNaming, Gender, HouseNumber, NamePhonemeEntry, PersonName, PhoneNumber, ThaiAddress,
    Title,
};
