//! One-time passcode generation.

use rand::Rng;

/// Generate a fresh 6-digit ride passcode.
///
/// Drawn from `100000..=999999`, so the leading digit is never zero and
/// the string is always exactly six digits.
pub fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..=999_999u32).to_string()
}
