//! Error types for Tessera.

use crate::validation::Violations;
use crate::widget::WidgetId;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur in registry and service operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A create/edit description failed validation.
    #[error("{0}")]
    BadDescription(Violations),

    /// No widget with the requested id is registered.
    #[error("Widget with id = {id} not found")]
    NotFound { id: WidgetId },

    /// The insertion algorithm found no slot for a non-trailing insert, or a
    /// z value would leave the `i32` range.
    ///
    /// This indicates a defect in the registry itself, never a caller error.
    #[error("Z-order invariant violated at slot {slot} among {len} widgets")]
    InvariantViolation { slot: i32, len: usize },
}

impl RegistryError {
    /// Create a not-found error.
    pub fn not_found(id: WidgetId) -> Self {
        Self::NotFound { id }
    }

    /// Whether the caller can correct this error by changing the request.
    ///
    /// `InvariantViolation` is an internal failure and returns `false`.
    pub fn is_caller_error(&self) -> bool {
        match self {
            Self::BadDescription(_) | Self::NotFound { .. } => true,
            Self::InvariantViolation { .. } => false,
        }
    }
}

impl From<Violations> for RegistryError {
    fn from(violations: Violations) -> Self {
        Self::BadDescription(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;

    #[test]
    fn test_not_found_mentions_id() {
        let id = WidgetId::new();
        let err = RegistryError::not_found(id);
        assert!(err.to_string().contains(&id.to_string()));
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_invariant_violation_is_internal() {
        let err = RegistryError::InvariantViolation { slot: 2, len: 5 };
        assert!(!err.is_caller_error());
    }

    #[test]
    fn test_bad_description_displays_violations() {
        let violations: Violations = [Violation::MissingX, Violation::NegativeHeight]
            .into_iter()
            .collect();
        let err = RegistryError::from(violations);
        let message = err.to_string();
        assert!(message.contains("x must be specified"));
        assert!(message.contains("height must not be less than 0"));
    }
}
