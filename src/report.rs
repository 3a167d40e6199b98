//! Aggregate validation error.

use std::error::Error;
use std::fmt;

use crate::failure::Failure;

/// Outcome of one validation call: `Ok(())` when every rule holds.
pub type ValidationResult = Result<(), ValidationReport>;

/// Every rule violated by one password, in check order.
///
/// A report is never empty: the validator returns `Ok(())` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<Failure>,
    summary: String,
}

impl ValidationReport {
    /// Failures in check order.
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// One line per failure message, each terminated by `\n`.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary)
    }
}

impl Error for ValidationReport {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.failures.first().map(|f| f as &(dyn Error + 'static))
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl IntoIterator for ValidationReport {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

/// Collects failures while the checks run.
#[derive(Debug, Default)]
pub(crate) struct ReportBuilder {
    failures: Vec<Failure>,
    summary: String,
}

impl ReportBuilder {
    pub(crate) fn push(&mut self, failure: Failure) {
        self.summary.push_str(&failure.to_string());
        self.summary.push('\n');
        self.failures.push(failure);
    }

    pub(crate) fn finish(self) -> ValidationResult {
        if self.failures.is_empty() {
            return Ok(());
        }
        Err(ValidationReport {
            failures: self.failures,
            summary: self.summary,
        })
    }
}
