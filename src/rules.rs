//! Rule configuration
//!
//! Length bounds and character classes used by the checks.

use thiserror::Error;

use crate::failure::{Failure, MissingDigit, MissingLowercase, MissingUppercase};

/// Minimum accepted number of code points (inclusive).
pub const DEFAULT_MIN_LENGTH: usize = 7;

/// Maximum accepted number of code points (inclusive).
pub const DEFAULT_MAX_LENGTH: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("Minimum length {min} is greater than maximum length {max}")]
    InvertedBounds { min: usize, max: usize },
}

/// Length bounds applied by the validator.
///
/// The four rules are always checked; only the length bounds can change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    min_length: usize,
    max_length: usize,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl PasswordRules {
    /// Creates rules with custom inclusive length bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::InvertedBounds`] if `min_length > max_length`.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, RulesError> {
        if min_length > max_length {
            return Err(RulesError::InvertedBounds {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

/// ASCII character classes a password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
        }
    }

    /// The failure reported when no character of this class is present.
    pub fn missing_failure(self) -> Failure {
        match self {
            CharClass::Lowercase => Failure::MissingLowercase(MissingLowercase::default()),
            CharClass::Uppercase => Failure::MissingUppercase(MissingUppercase::default()),
            CharClass::Digit => Failure::MissingDigit(MissingDigit::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::FailureKind;

    #[test]
    fn test_default_bounds() {
        let rules = PasswordRules::default();
        assert_eq!(rules.min_length(), 7);
        assert_eq!(rules.max_length(), 16);
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert_eq!(
            PasswordRules::new(10, 4),
            Err(RulesError::InvertedBounds { min: 10, max: 4 })
        );
    }

    #[test]
    fn test_new_accepts_equal_bounds() {
        let rules = PasswordRules::new(8, 8).unwrap();
        assert_eq!(rules.min_length(), 8);
        assert_eq!(rules.max_length(), 8);
    }

    #[test]
    fn test_char_classes_are_ascii_only() {
        assert!(CharClass::Lowercase.contains('a'));
        assert!(!CharClass::Lowercase.contains('é'));
        assert!(CharClass::Uppercase.contains('Z'));
        assert!(!CharClass::Uppercase.contains('Ä'));
        assert!(CharClass::Digit.contains('0'));
        assert!(!CharClass::Digit.contains('٣'));
    }

    #[test]
    fn test_missing_failure_kind() {
        assert_eq!(
            CharClass::Lowercase.missing_failure().kind(),
            FailureKind::MissingLowercase
        );
        assert_eq!(
            CharClass::Uppercase.missing_failure().kind(),
            FailureKind::MissingUppercase
        );
        assert_eq!(
            CharClass::Digit.missing_failure().kind(),
            FailureKind::MissingDigit
        );
    }
}
