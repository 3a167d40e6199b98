//! Password rule checks
//!
//! Each check evaluates a single rule and reports at most one failure.

mod class;
mod length;

pub use class::{digit_check, lowercase_check, uppercase_check};
pub use length::length_check;

use crate::failure::Failure;

/// Result type for check functions.
/// - `Some(failure)` - Rule violated
/// - `None` - Rule satisfied
pub type CheckResult = Option<Failure>;
