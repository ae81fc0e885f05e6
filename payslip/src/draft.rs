//! Create-form input and its validation policy.
//!
//! Amount fields arrive as raw strings from the form. Validation is
//! deliberately permissive for the numeric fields - absent or non-numeric
//! input coerces to zero, matching the observed frontend behavior - while
//! the subject name stays strict.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Error types for draft validation.
///
/// Locally detected; a validation failure never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Subject name missing or whitespace-only
    #[error("Subject name must not be empty")]
    EmptySubjectName,
}

/// Raw input for creating a pay slip, as the form supplies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PaySlipDraft {
    /// Employee or subject label
    pub subject_name: String,
    /// Salary amount to be sealed, raw string
    pub salary: String,
    /// Public bonus amount, raw string
    pub bonus: String,
    /// Public deductions amount, raw string
    pub deductions: String,
    /// Free-text description, may be empty
    pub description: String,
}

impl PaySlipDraft {
    /// Create a draft for a subject.
    pub fn new(subject_name: impl Into<String>) -> Self {
        Self {
            subject_name: subject_name.into(),
            ..Default::default()
        }
    }

    /// Set the salary field.
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = salary.into();
        self
    }

    /// Set the bonus field.
    pub fn with_bonus(mut self, bonus: impl Into<String>) -> Self {
        self.bonus = bonus.into();
        self
    }

    /// Set the deductions field.
    pub fn with_deductions(mut self, deductions: impl Into<String>) -> Self {
        self.deductions = deductions.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the draft into typed create fields.
    ///
    /// The subject name must be non-empty. The amount fields use the
    /// documented zero-coercion policy: empty or non-numeric input parses
    /// to 0 rather than failing.
    pub fn validate(&self) -> Result<CreateFields, ValidationError> {
        let subject_name = self.subject_name.trim();
        if subject_name.is_empty() {
            return Err(ValidationError::EmptySubjectName);
        }

        Ok(CreateFields {
            subject_name: subject_name.to_string(),
            salary: parse_amount(&self.salary),
            public_bonus: parse_amount(&self.bonus),
            public_deductions: parse_amount(&self.deductions),
            description: self.description.clone(),
        })
    }
}

/// Validated, typed create input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFields {
    /// Non-empty subject label
    pub subject_name: String,
    /// Salary to be sealed
    pub salary: u64,
    /// Public bonus
    pub public_bonus: u64,
    /// Public deductions
    pub public_deductions: u64,
    /// Description, may be empty
    pub description: String,
}

/// Lenient amount parsing: leading digits win, anything else is 0.
///
/// Overflowing input saturates rather than wrapping.
fn parse_amount(raw: &str) -> u64 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return 0;
    }

    digits.parse::<u64>().unwrap_or(u64::MAX)
}
