//! Feedback Error Types
//!
//! This module defines the [`FeedbackError`] enum, which covers every way a feedback request can fail
//! between the raw JSON input and the rendered [`FeedbackResult`](crate::types::FeedbackResult).
//!
//! # Usage
//!
//! Only [`FeedbackError::Validation`] is a caller mistake that can be fixed by correcting the input.
//! The other variants mean the engine was handed data outside its contract and should be reported
//! as an internal failure.
//!
//! # Example
//!
//! ```rust
//! use feedback::error::FeedbackError;
//!
//! fn require_name(name: &str) -> Result<(), FeedbackError> {
//!     if name.is_empty() {
//!         return Err(FeedbackError::Validation(vec!["name is required".to_string()]));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_name("").unwrap_err().is_validation());
//! ```

use crate::template::Slot;
use thiserror::Error;

/// Represents all error types that can occur while producing feedback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedbackError {
    /// The input failed validation. Carries every violation found, in check order.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// A template referenced a slot that was never bound.
    #[error("Template slot {{{}}} has no binding", .slot.name())]
    UnboundSlot { slot: Slot },
    /// Sanitized input could not be turned into a typed record.
    #[error("Input conversion failed: {0}")]
    Conversion(String),
}

impl FeedbackError {
    /// Returns `true` for errors the caller can fix by correcting its input.
    pub fn is_validation(&self) -> bool {
        matches!(self, FeedbackError::Validation(_))
    }

    /// The violation list of a validation failure, empty for any other variant.
    pub fn violations(&self) -> &[String] {
        match self {
            FeedbackError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_joins_violations() {
        let err = FeedbackError::Validation(vec![
            "name is required".to_string(),
            "subject is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: name is required; subject is required"
        );
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn unbound_slot_names_the_placeholder() {
        let err = FeedbackError::UnboundSlot { slot: Slot::Areas };
        assert_eq!(err.to_string(), "Template slot {areas} has no binding");
        assert!(!err.is_validation());
        assert!(err.violations().is_empty());
    }
}
