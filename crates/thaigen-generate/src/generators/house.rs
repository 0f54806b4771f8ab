use rand::Rng;

use thaigen_core::HouseNumber;

/// Exclusive upper bound for both parts of a `block/unit` house number.
pub const COMPOUND_LIMIT: u16 = 150;
/// Exclusive upper bound for a plain house number.
pub const SINGLE_LIMIT: u16 = 20;

pub fn random_house_number(rng: &mut dyn rand::RngCore) -> HouseNumber {
    if rng.random_bool(0.5) {
        HouseNumber::Compound {
            block: rng.random_range(0..COMPOUND_LIMIT),
            unit: rng.random_range(0..COMPOUND_LIMIT),
        }
    } else {
        HouseNumber::Single(rng.random_range(0..SINGLE_LIMIT))
    }
}
