//! Identity tokens
//!
//! An identity token is the opaque credential a client returns once a login
//! completes. The handle never inspects or verifies it; verification belongs
//! to the provider and to whatever backend the token is presented to.

use serde::{Deserialize, Serialize};

/// An opaque identity token issued by the authentication provider.
///
/// This value should be treated as opaque; it may be a DID token, a JWT, or
/// any other provider-defined encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdToken(String);

impl IdToken {
    pub fn new(token: &str) -> Self {
        IdToken(token.to_string())
    }

    /// Get the inner token string
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the token string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for IdToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IdToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// TODO: wrap in secrecy string to prevent accidental leaks?
impl std::fmt::Display for IdToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_token() {
        let token = IdToken::new("did:magic:abc123");
        assert_eq!(token.as_str(), "did:magic:abc123");
        assert_eq!(token.to_string(), "did:magic:abc123");

        let from_str = IdToken::from(token.as_str());
        assert_eq!(from_str, token);
        assert_eq!(from_str.into_inner(), "did:magic:abc123");
    }
}
