use rand::Rng;

use thaigen_core::PhoneNumber;

/// Mobile prefixes following the leading zero.
pub const SECOND_DIGITS: [u8; 3] = [6, 8, 9];

/// `0`, one of [`SECOND_DIGITS`], then eight uniform digits.
pub fn random_phone_number(rng: &mut dyn rand::RngCore) -> PhoneNumber {
    let mut digits = [0_u8; 10];
    digits[1] = SECOND_DIGITS[rng.random_range(0..SECOND_DIGITS.len())];
    for digit in digits.iter_mut().skip(2) {
        *digit = rng.random_range(0..10);
    }
    PhoneNumber::from_digits(digits)
}
