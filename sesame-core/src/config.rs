//! Client and operation configuration
//!
//! [`ClientConfig`] describes how to construct a client: an API key plus an
//! open set of vendor-defined options. It is immutable for the lifetime of a
//! constructed client; a different configuration means a different client
//! instance. The per-operation structs mirror the provider's request shapes.

use std::collections::BTreeMap;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Configuration for constructing an authentication client.
///
/// # Example
///
/// ```rust
/// use sesame_core::ClientConfig;
///
/// let config = ClientConfig::builder("pk_live_ABC123")
///     .option("network", serde_json::json!("mainnet"))
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// The client-access credential issued by the provider.
    pub api_key: String,

    /// Additional vendor-defined options, keyed by option name.
    #[serde(default)]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            api_key: api_key.into(),
            options: BTreeMap::new(),
        }
    }

    /// A deterministic key identifying this configuration by value.
    ///
    /// Two configurations produce the same fingerprint exactly when they are
    /// equal. The key is the JSON encoding of the whole configuration: JSON
    /// string escaping keeps distinct values from colliding, and the ordered
    /// options map keeps insertion order from leaking into the key.
    pub fn fingerprint(&self) -> String {
        serde_json::json!({
            "apiKey": self.api_key,
            "options": self.options,
        })
        .to_string()
    }
}

pub struct ClientConfigBuilder {
    api_key: String,
    options: BTreeMap<String, serde_json::Value>,
}

impl ClientConfigBuilder {
    pub fn option(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(name.into(), value);
        self
    }

    pub fn build(self) -> ClientConfig {
        ClientConfig {
            api_key: self.api_key,
            options: self.options,
        }
    }
}

/// Configuration for a magic-link login.
///
/// The provider sends a one-time link to `email`; completing it out-of-band
/// resolves the login and yields an identity token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginWithMagicLinkConfig {
    /// Recipient of the magic link.
    pub email: String,

    /// Whether the provider should display its own pending-link UI.
    pub show_ui: bool,

    /// Optional URI the link redirects to once followed.
    pub redirect_uri: Option<String>,
}

impl LoginWithMagicLinkConfig {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            show_ui: true,
            redirect_uri: None,
        }
    }

    pub fn show_ui(mut self, show_ui: bool) -> Self {
        self.show_ui = show_ui;
        self
    }

    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }
}

/// Configuration for updating the logged-in user's email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEmailConfig {
    /// The new email address. The provider confirms it out-of-band.
    pub email: String,

    /// Whether the provider should display its own pending-confirmation UI.
    pub show_ui: bool,
}

impl UpdateEmailConfig {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            show_ui: true,
        }
    }

    pub fn show_ui(mut self, show_ui: bool) -> Self {
        self.show_ui = show_ui;
        self
    }
}

/// Configuration for generating a fresh identity token.
#[derive(Debug, Clone, Default)]
pub struct GenerateIdTokenConfig {
    /// How long the generated token should remain valid. The provider's
    /// default applies when unset.
    pub lifespan: Option<Duration>,

    /// Optional payload to cryptographically attach to the token.
    pub attachment: Option<String>,
}

impl GenerateIdTokenConfig {
    pub fn lifespan(mut self, lifespan: Duration) -> Self {
        self.lifespan = Some(lifespan);
        self
    }

    pub fn attachment(mut self, attachment: impl Into<String>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_value_keyed() {
        let a = ClientConfig::builder("pk_test_1")
            .option("network", serde_json::json!("mainnet"))
            .option("locale", serde_json::json!("en"))
            .build();

        // Same values, different insertion order
        let b = ClientConfig::builder("pk_test_1")
            .option("locale", serde_json::json!("en"))
            .option("network", serde_json::json!("mainnet"))
            .build();

        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_fingerprint_distinguishes_configs() {
        let a = ClientConfig::new("pk_test_1");
        let b = ClientConfig::new("pk_test_2");
        let c = ClientConfig::builder("pk_test_1")
            .option("network", serde_json::json!("goerli"))
            .build();

        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_fingerprint_is_injective_over_embedded_separators() {
        // An API key that spells out an option assignment must not collide
        // with a config that actually carries that option.
        let a = ClientConfig::new("pk\nnetwork=\"mainnet\"");
        let b = ClientConfig::builder("pk")
            .option("network", serde_json::json!("mainnet"))
            .build();

        assert_ne!(a, b);
        assert_ne!(a.fingerprint(), b.fingerprint());

        // Same for separators smuggled into an option name.
        let c = ClientConfig::builder("pk")
            .option("network=\"mainnet\"\nlocale", serde_json::json!("en"))
            .build();
        let d = ClientConfig::builder("pk")
            .option("network", serde_json::json!("mainnet"))
            .option("locale", serde_json::json!("en"))
            .build();

        assert_ne!(c, d);
        assert_ne!(c.fingerprint(), d.fingerprint());
    }

    #[test]
    fn test_magic_link_config() {
        let config = LoginWithMagicLinkConfig::new("user@example.com")
            .show_ui(false)
            .redirect_uri("https://app.example.com/callback");

        assert_eq!(config.email, "user@example.com");
        assert!(!config.show_ui);
        assert_eq!(
            config.redirect_uri.as_deref(),
            Some("https://app.example.com/callback")
        );
    }

    #[test]
    fn test_generate_id_token_config() {
        let config = GenerateIdTokenConfig::default()
            .lifespan(Duration::minutes(15))
            .attachment("nonce-42");

        assert_eq!(config.lifespan, Some(Duration::minutes(15)));
        assert_eq!(config.attachment.as_deref(), Some("nonce-42"));
    }
}
