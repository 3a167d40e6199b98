//! Failure classification - one kind per password rule, each with its own payload.

use std::fmt;

use thiserror::Error;

/// Identifies which password rule was violated.
///
/// Variants are declared in check order, so sorting kinds yields the order
/// in which the validator runs the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
    InvalidLength,
    MissingLowercase,
    MissingUppercase,
    MissingDigit,
}

impl FailureKind {
    /// Every kind, in check order.
    pub const ALL: [FailureKind; 4] = [
        FailureKind::InvalidLength,
        FailureKind::MissingLowercase,
        FailureKind::MissingUppercase,
        FailureKind::MissingDigit,
    ];

    /// Stable identifier, suitable for logs and map keys.
    pub fn name(self) -> &'static str {
        match self {
            FailureKind::InvalidLength => "InvalidLength",
            FailureKind::MissingLowercase => "MissingLowercase",
            FailureKind::MissingUppercase => "MissingUppercase",
            FailureKind::MissingDigit => "MissingDigit",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload of a length violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLength {
    /// Number of Unicode code points in the password.
    pub actual_length: usize,
    pub min: usize,
    pub max: usize,
}

/// Payload of a missing `a-z` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingLowercase {
    pub description: &'static str,
}

/// Payload of a missing `A-Z` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingUppercase {
    pub description: &'static str,
}

/// Payload of a missing `0-9` character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingDigit {
    pub description: &'static str,
}

impl Default for MissingLowercase {
    fn default() -> Self {
        Self {
            description: "Password must contain small letter",
        }
    }
}

impl Default for MissingUppercase {
    fn default() -> Self {
        Self {
            description: "Password must contain capital letter",
        }
    }
}

impl Default for MissingDigit {
    fn default() -> Self {
        Self {
            description: "Password must contain digit",
        }
    }
}

/// A single violated rule together with its payload.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    #[error("Password is invalid length")]
    InvalidLength(InvalidLength),
    #[error("Password is missing a small letter")]
    MissingLowercase(MissingLowercase),
    #[error("Password is missing a capital letter")]
    MissingUppercase(MissingUppercase),
    #[error("Password is missing a digit")]
    MissingDigit(MissingDigit),
}

impl Failure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Failure::InvalidLength(_) => FailureKind::InvalidLength,
            Failure::MissingLowercase(_) => FailureKind::MissingLowercase,
            Failure::MissingUppercase(_) => FailureKind::MissingUppercase,
            Failure::MissingDigit(_) => FailureKind::MissingDigit,
        }
    }

    /// Human-readable detail of the payload: the fixed description for
    /// character classes, or the measured length against its bounds.
    pub fn detail(&self) -> String {
        match self {
            Failure::InvalidLength(p) => format!(
                "length {} is outside {}..={}",
                p.actual_length, p.min, p.max
            ),
            Failure::MissingLowercase(p) => p.description.to_string(),
            Failure::MissingUppercase(p) => p.description.to_string(),
            Failure::MissingDigit(p) => p.description.to_string(),
        }
    }
}

/// A payload type that can be projected out of a [`Failure`].
///
/// Lets callers extract a concrete payload by type instead of by kind:
/// `report.extract::<InvalidLength>()`.
pub trait FailurePayload: Sized {
    /// Kind whose failures carry this payload.
    const KIND: FailureKind;

    /// Returns the payload if `failure` is of [`Self::KIND`].
    fn from_failure(failure: &Failure) -> Option<&Self>;
}

impl FailurePayload for InvalidLength {
    const KIND: FailureKind = FailureKind::InvalidLength;

    fn from_failure(failure: &Failure) -> Option<&Self> {
        match failure {
            Failure::InvalidLength(p) => Some(p),
            _ => None,
        }
    }
}

impl FailurePayload for MissingLowercase {
    const KIND: FailureKind = FailureKind::MissingLowercase;

    fn from_failure(failure: &Failure) -> Option<&Self> {
        match failure {
            Failure::MissingLowercase(p) => Some(p),
            _ => None,
        }
    }
}

impl FailurePayload for MissingUppercase {
    const KIND: FailureKind = FailureKind::MissingUppercase;

    fn from_failure(failure: &Failure) -> Option<&Self> {
        match failure {
            Failure::MissingUppercase(p) => Some(p),
            _ => None,
        }
    }
}

impl FailurePayload for MissingDigit {
    const KIND: FailureKind = FailureKind::MissingDigit;

    fn from_failure(failure: &Failure) -> Option<&Self> {
        match failure {
            Failure::MissingDigit(p) => Some(p),
            _ => None,
        }
    }
}
