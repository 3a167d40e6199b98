//! Password validator - runs every rule check and aggregates the failures.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::checks::{CheckResult, digit_check, length_check, lowercase_check, uppercase_check};
use crate::report::{ReportBuilder, ValidationResult};
use crate::rules::PasswordRules;

type Check = fn(&SecretString, &PasswordRules) -> CheckResult;

/// Checks in reporting order.
const CHECKS: [(&str, Check); 4] = [
    ("length", length_check),
    ("lowercase", lowercase_check),
    ("uppercase", uppercase_check),
    ("digit", digit_check),
];

impl PasswordRules {
    /// Validates `password` against these rules.
    ///
    /// Every check runs, even after an earlier one has failed, so the returned
    /// report lists all violated rules in check order.
    pub fn validate(&self, password: &SecretString) -> ValidationResult {
        let mut report = ReportBuilder::default();

        for (check_name, check_fn) in CHECKS {
            if let Some(failure) = check_fn(password, self) {
                #[cfg(feature = "tracing")]
                tracing::debug!(check = check_name, kind = %failure.kind(), "password rule failed");
                #[cfg(not(feature = "tracing"))]
                let _ = check_name;
                report.push(failure);
            }
        }

        let result = report.finish();

        #[cfg(feature = "tracing")]
        {
            if let Err(ref report) = result {
                tracing::debug!(failures = report.len(), "password rejected");
            }
        }

        result
    }
}

/// Validates a password against the default rules.
///
/// # Arguments
/// * `password` - The password to validate
///
/// # Returns
/// `Ok(())` if every rule holds, otherwise a `ValidationReport` listing each
/// violated rule.
pub fn validate_password(password: &SecretString) -> ValidationResult {
    PasswordRules::default().validate(password)
}

/// Async version that sends the validation result via channel.
#[cfg(feature = "async")]
pub async fn validate_password_tx(password: &SecretString, tx: mpsc::Sender<ValidationResult>) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let result = validate_password(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: receiver dropped");
    }
}
