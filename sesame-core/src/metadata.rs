//! User metadata
//!
//! The metadata record a client returns for the currently logged-in user.
//! Every field is provider-defined and optional; what is populated depends on
//! how the user authenticated.

use serde::{Deserialize, Serialize};

/// User identity attributes returned by the authentication provider.
///
/// Field names follow the provider's camelCase wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    /// Decentralized identifier of the user, if the provider assigns one.
    pub issuer: Option<String>,

    /// Public address of the key pair backing the user's identity.
    pub public_address: Option<String>,

    /// The email of the user.
    pub email: Option<String>,

    /// The phone number of the user.
    pub phone_number: Option<String>,
}

impl UserMetadata {
    pub fn builder() -> UserMetadataBuilder {
        UserMetadataBuilder::default()
    }
}

#[derive(Default)]
pub struct UserMetadataBuilder {
    issuer: Option<String>,
    public_address: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
}

impl UserMetadataBuilder {
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn public_address(mut self, public_address: impl Into<String>) -> Self {
        self.public_address = Some(public_address.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn build(self) -> UserMetadata {
        UserMetadata {
            issuer: self.issuer,
            public_address: self.public_address,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_builder() {
        let metadata = UserMetadata::builder()
            .issuer("did:ethr:0xabc")
            .email("user@example.com")
            .build();

        assert_eq!(metadata.issuer.as_deref(), Some("did:ethr:0xabc"));
        assert_eq!(metadata.email.as_deref(), Some("user@example.com"));
        assert_eq!(metadata.public_address, None);
        assert_eq!(metadata.phone_number, None);
    }

    #[test]
    fn test_metadata_wire_format() {
        let metadata: UserMetadata = serde_json::from_str(
            r#"{
                "issuer": "did:ethr:0xabc",
                "publicAddress": "0xabc",
                "email": "user@example.com",
                "phoneNumber": null
            }"#,
        )
        .unwrap();

        assert_eq!(metadata.public_address.as_deref(), Some("0xabc"));
        assert_eq!(metadata.phone_number, None);
    }
}
