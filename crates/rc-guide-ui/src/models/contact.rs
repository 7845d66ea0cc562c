//! Contact form validation
//!
//! Submission is simulated: a valid form produces a success message and is
//! reset, nothing is sent anywhere.

use regex::Regex;
use std::sync::LazyLock;

/// Message shown after a valid submission
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";

/// Loose well-formedness check: `local@domain.tld`, no whitespace, one `@`
/// per segment. Not RFC 5322.
static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Reasons a contact submission is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// At least one of name, email, message is empty
    #[error("Please fill in all fields")]
    MissingFields,
    /// Email does not look like `local@domain.tld`
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Values read from the contact dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validates the submission. Empty fields are reported before a bad email.
    ///
    /// Only zero-length values count as empty; whitespace is accepted.
    ///
    /// # Errors
    ///
    /// - [`ContactError::MissingFields`] if any field is empty
    /// - [`ContactError::InvalidEmail`] if the email is malformed
    ///
    /// # Example
    ///
    /// ```
    /// use rc_guide_ui::models::{ContactError, ContactSubmission};
    ///
    /// let bad = ContactSubmission::new("Ann", "ann@example", "hi");
    /// assert_eq!(bad.validate(), Err(ContactError::InvalidEmail));
    ///
    /// let good = ContactSubmission::new("Ann", "ann@example.com", "hi");
    /// assert_eq!(good.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }

        if !is_well_formed_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }
}

/// Returns true if `email` passes the loose `local@domain.tld` check
#[must_use]
pub fn is_well_formed_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert!(EMAIL_PATTERN.is_some());
    }

    #[test]
    fn test_valid_submission() {
        let submission = ContactSubmission::new("Ann", "ann@example.com", "hi");
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn test_missing_tld_rejected() {
        let submission = ContactSubmission::new("Ann", "ann@example", "hi");
        assert_eq!(submission.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_each_empty_field_rejected() {
        let cases = [
            ContactSubmission::new("", "ann@example.com", "hi"),
            ContactSubmission::new("Ann", "", "hi"),
            ContactSubmission::new("Ann", "ann@example.com", ""),
            ContactSubmission::default(),
        ];
        for submission in cases {
            assert_eq!(
                submission.validate(),
                Err(ContactError::MissingFields),
                "{submission:?}"
            );
        }
    }

    #[test]
    fn test_missing_fields_wins_over_bad_email() {
        let submission = ContactSubmission::new("", "not-an-email", "hi");
        assert_eq!(submission.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let submission = ContactSubmission::new(" ", "ann@example.com", " ");
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_well_formed_email("a@b.c"));
        assert!(is_well_formed_email("first.last@sub.example.co.uk"));
        assert!(is_well_formed_email("x+tag@example.io"));

        assert!(!is_well_formed_email("annexample.com"));
        assert!(!is_well_formed_email("@example.com"));
        assert!(!is_well_formed_email("ann@.com"));
        assert!(!is_well_formed_email("ann@example."));
        assert!(!is_well_formed_email("ann@@example.com"));
        assert!(!is_well_formed_email("ann smith@example.com"));
        assert!(!is_well_formed_email("ann@example.com "));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingFields.to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
