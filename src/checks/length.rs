//! Length check - password code-point count must lie within the configured bounds.

use secrecy::{ExposeSecret, SecretString};

use super::CheckResult;
use crate::failure::{Failure, InvalidLength};
use crate::rules::PasswordRules;

/// Checks that the password length, counted in code points, is within bounds.
///
/// # Returns
/// - `Some(Failure::InvalidLength(_))` carrying the measured length and bounds
/// - `None` if `min <= length <= max`
pub fn length_check(password: &SecretString, rules: &PasswordRules) -> CheckResult {
    let actual_length = password.expose_secret().chars().count();
    let (min, max) = (rules.min_length(), rules.max_length());
    if !(min..=max).contains(&actual_length) {
        return Some(Failure::InvalidLength(InvalidLength {
            actual_length,
            min,
            max,
        }));
    }
    None
}
