//! Password rule validation library
//!
//! This library checks a password against four fixed rules (length bounds,
//! lowercase, uppercase and digit presence) and reports every violated rule
//! at once, keeping each failure's kind and payload inspectable.
//!
//! # Features
//!
//! - `async` (default): Enables sending validation results over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{validate_password, FailureKind, FailureQuery, InvalidLength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("abc".to_string().into());
//! let result = validate_password(&password);
//!
//! assert!(result.is_kind(FailureKind::InvalidLength));
//! assert!(result.is_kind(FailureKind::MissingUppercase));
//! assert!(!result.is_kind(FailureKind::MissingLowercase));
//!
//! if let Some(length) = result.extract::<InvalidLength>() {
//!     println!("too short: {} < {}", length.actual_length, length.min);
//! }
//! ```

// Internal modules
mod checks;
mod failure;
mod query;
mod report;
mod rules;
mod validator;

// Public API
pub use failure::{
    Failure, FailureKind, FailurePayload, InvalidLength, MissingDigit, MissingLowercase,
    MissingUppercase,
};
pub use query::FailureQuery;
pub use report::{ValidationReport, ValidationResult};
pub use rules::{CharClass, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, PasswordRules, RulesError};
pub use validator::validate_password;

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
