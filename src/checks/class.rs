//! Character class checks - lowercase, uppercase and digit presence.

use secrecy::{ExposeSecret, SecretString};

use super::CheckResult;
use crate::rules::{CharClass, PasswordRules};

fn class_check(password: &SecretString, class: CharClass) -> CheckResult {
    if password.expose_secret().chars().any(|c| class.contains(c)) {
        return None;
    }
    Some(class.missing_failure())
}

/// Checks that the password contains at least one `a-z` character.
pub fn lowercase_check(password: &SecretString, _rules: &PasswordRules) -> CheckResult {
    class_check(password, CharClass::Lowercase)
}

/// Checks that the password contains at least one `A-Z` character.
pub fn uppercase_check(password: &SecretString, _rules: &PasswordRules) -> CheckResult {
    class_check(password, CharClass::Uppercase)
}

/// Checks that the password contains at least one `0-9` character.
pub fn digit_check(password: &SecretString, _rules: &PasswordRules) -> CheckResult {
    class_check(password, CharClass::Digit)
}
