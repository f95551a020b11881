// ============================================================================
// ERRORS - Validation, API and form submission failures
// ============================================================================

use thiserror::Error;

/// Input problems caught before any request leaves the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Please fill in the required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid donation amount: {0}")]
    InvalidAmount(String),
}

/// Failures talking to the backend or to client-side storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Authentication token not found. Please log in again.")]
    MissingToken,
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Why a sign-in form or a wizard refused to move forward or to submit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Submission is only available on the final step")]
    NotOnFinalStep,
    #[error("A submission is already in progress")]
    AlreadySubmitting,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    /// Validation failures never reached the network
    pub fn is_validation(&self) -> bool {
        matches!(self, FormError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_surface_the_backend_message() {
        let err = ApiError::Http {
            status: 404,
            message: "NGO not found".to_string(),
        };
        assert_eq!(err.to_string(), "NGO not found");
    }

    #[test]
    fn form_errors_are_transparent() {
        let err: FormError = ValidationError::PasswordMismatch.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Passwords do not match!");

        let err: FormError = ApiError::MissingToken.into();
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Authentication token not found. Please log in again."
        );
    }
}
