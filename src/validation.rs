//! Input validation report

use serde::{Deserialize, Serialize};

/// Outcome of validating a set of sizing inputs.
///
/// Errors are hard violations that block computation; warnings are advisory
/// engineering concerns and never affect `is_valid`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff the error list is empty
    pub is_valid: bool,
    /// Hard violations, in rule order
    pub errors: Vec<String>,
    /// Soft engineering concerns, in rule order
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Build a report from accumulated errors and warnings
    pub fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
