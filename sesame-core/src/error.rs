use thiserror::Error;

/// Errors surfaced by an authentication client.
///
/// The session handle performs no recovery, retry, or translation: every
/// failed client call is propagated to the caller exactly as the client
/// raised it, and the failed operation leaves session state unmodified.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credential expired")]
    CredentialExpired,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Rejected by provider: {0}")]
    ProviderRejected(String),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl Error {
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let err = Error::Auth(AuthError::InvalidCredentials);
        assert!(err.is_auth_error());
        assert!(!err.is_transport_error());

        let err = Error::Transport("connection reset".to_string());
        assert!(err.is_transport_error());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Auth(AuthError::CredentialExpired);
        assert_eq!(err.to_string(), "Authentication error: Credential expired");

        let err: Error = ValidationError::InvalidEmail("nope".to_string()).into();
        assert_eq!(err.to_string(), "Validation error: Invalid email format: nope");
    }
}
