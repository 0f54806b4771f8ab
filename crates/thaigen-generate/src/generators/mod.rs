//! Stateless field generators. Each one is a function of its inputs and the
//! supplied random source.

pub mod address;
pub mod house;
pub mod name;
pub mod phone;

pub use address::random_address;
pub use house::random_house_number;
pub use name::{FORMAL_TITLES, FORMAL_TITLE_PROBABILITY, common_titles, pronouns, random_name};
pub use phone::random_phone_number;

use rand::Rng;

use crate::errors::GenerationError;

/// Uniform choice over `values`; `None` when empty.
pub fn pick<'a, T>(values: &'a [T], rng: &mut dyn rand::RngCore) -> Option<&'a T> {
    if values.is_empty() {
        return None;
    }
    Some(&values[rng.random_range(0..values.len())])
}

fn pick_reference<'a>(
    values: &'a [String],
    label: &str,
    rng: &mut dyn rand::RngCore,
) -> Result<&'a str, GenerationError> {
    pick(values, rng).map(String::as_str).ok_or_else(|| {
        GenerationError::DataUnavailable(format!("{label} reference set is empty"))
    })
}
