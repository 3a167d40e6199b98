//! Classification queries over validation outcomes.
//!
//! [`FailureQuery`] answers "did rule X fail?" and "what did rule X report?"
//! for both a [`ValidationReport`] and a whole [`ValidationResult`].

use crate::failure::{Failure, FailureKind, FailurePayload};
use crate::report::{ValidationReport, ValidationResult};

pub trait FailureQuery {
    /// Failures in check order; empty for a valid outcome.
    fn failures(&self) -> &[Failure];

    /// Returns `true` if a failure of `kind` was reported.
    fn is_kind(&self, kind: FailureKind) -> bool {
        self.failures().iter().any(|f| f.kind() == kind)
    }

    /// Returns the failure of `kind` with its payload as recorded by the check.
    fn payload(&self, kind: FailureKind) -> Option<&Failure> {
        self.failures().iter().find(|f| f.kind() == kind)
    }

    /// Typed extraction of a payload.
    ///
    /// ```
    /// use pwd_rules::{validate_password, FailureQuery, InvalidLength};
    /// use secrecy::SecretString;
    ///
    /// let result = validate_password(&SecretString::new("#".to_string().into()));
    /// let length = result.extract::<InvalidLength>().unwrap();
    /// assert_eq!(length.actual_length, 1);
    /// ```
    fn extract<P: FailurePayload>(&self) -> Option<&P> {
        self.failures().iter().find_map(P::from_failure)
    }

    /// Failed kinds in check order.
    fn kinds(&self) -> impl Iterator<Item = FailureKind> + '_ {
        self.failures().iter().map(Failure::kind)
    }
}

impl FailureQuery for ValidationReport {
    fn failures(&self) -> &[Failure] {
        ValidationReport::failures(self)
    }
}

impl FailureQuery for ValidationResult {
    fn failures(&self) -> &[Failure] {
        match self {
            Ok(()) => &[],
            Err(report) => report.failures(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::{InvalidLength, MissingDigit, MissingLowercase, MissingUppercase};
    use crate::report::ReportBuilder;

    fn report_of(failures: Vec<Failure>) -> ValidationResult {
        let mut builder = ReportBuilder::default();
        for failure in failures {
            builder.push(failure);
        }
        builder.finish()
    }

    fn length_failure() -> Failure {
        Failure::InvalidLength(InvalidLength {
            actual_length: 42,
            min: 7,
            max: 16,
        })
    }

    #[test]
    fn test_valid_result_has_no_kinds() {
        let result: ValidationResult = Ok(());
        for kind in FailureKind::ALL {
            assert!(!result.is_kind(kind));
            assert!(result.payload(kind).is_none());
        }
        assert!(result.extract::<InvalidLength>().is_none());
        assert_eq!(result.kinds().count(), 0);
    }

    #[test]
    fn test_is_kind_independent_of_order() {
        let forward = report_of(vec![
            length_failure(),
            Failure::MissingDigit(MissingDigit::default()),
        ]);
        let backward = report_of(vec![
            Failure::MissingDigit(MissingDigit::default()),
            length_failure(),
        ]);
        for result in [&forward, &backward] {
            assert!(result.is_kind(FailureKind::InvalidLength));
            assert!(result.is_kind(FailureKind::MissingDigit));
            assert!(!result.is_kind(FailureKind::MissingLowercase));
            assert!(!result.is_kind(FailureKind::MissingUppercase));
        }
    }

    #[test]
    fn test_extract_returns_original_payload() {
        let result = report_of(vec![
            Failure::MissingUppercase(MissingUppercase::default()),
            length_failure(),
        ]);
        let payload = result.extract::<InvalidLength>().unwrap();
        assert_eq!(payload.actual_length, 42);
        assert_eq!(payload.min, 7);
        assert_eq!(payload.max, 16);
        assert_eq!(
            result.extract::<MissingUppercase>().unwrap().description,
            "Password must contain capital letter"
        );
        assert!(result.extract::<MissingLowercase>().is_none());
    }

    #[test]
    fn test_payload_by_kind() {
        let result = report_of(vec![length_failure()]);
        assert_eq!(
            result.payload(FailureKind::InvalidLength),
            Some(&length_failure())
        );
        assert_eq!(result.payload(FailureKind::MissingDigit), None);
    }

    #[test]
    fn test_report_and_result_agree() {
        let result = report_of(vec![Failure::MissingLowercase(MissingLowercase::default())]);
        let report = result.as_ref().unwrap_err();
        for kind in FailureKind::ALL {
            assert_eq!(report.is_kind(kind), result.is_kind(kind));
        }
        assert_eq!(
            report.kinds().collect::<Vec<_>>(),
            vec![FailureKind::MissingLowercase]
        );
    }
}
