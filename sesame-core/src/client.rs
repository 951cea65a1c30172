//! The authentication client contract
//!
//! These traits abstract the vendor SDK behind the session handle: the
//! login flows on one side, session inspection and maintenance on the other.
//! The handle calls nothing else, so anything implementing both traits (the
//! real SDK binding, or an in-memory fake) can back it.

use async_trait::async_trait;

use crate::{
    Error, IdToken, UserMetadata,
    config::{GenerateIdTokenConfig, LoginWithMagicLinkConfig, UpdateEmailConfig},
};

/// Login flows offered by the authentication provider.
#[async_trait]
pub trait AuthApi: Send + Sync + 'static {
    /// Complete a login with a credential or redirect query string.
    ///
    /// When `credential_or_query` is `None`, the client resolves the
    /// credential from its own environment (e.g. the current redirect
    /// result).
    ///
    /// # Returns
    ///
    /// The identity token for the newly logged-in user.
    async fn login_with_credential(
        &self,
        credential_or_query: Option<&str>,
    ) -> Result<IdToken, Error>;

    /// Start a magic-link login and wait for it to complete.
    ///
    /// # Returns
    ///
    /// The identity token for the newly logged-in user.
    async fn login_with_magic_link(
        &self,
        config: &LoginWithMagicLinkConfig,
    ) -> Result<IdToken, Error>;
}

/// Inspection and maintenance of the provider-side session.
#[async_trait]
pub trait SessionApi: Send + Sync + 'static {
    /// Whether the provider currently considers the user logged in.
    async fn is_logged_in(&self) -> Result<bool, Error>;

    /// Fetch the identity token for the current session.
    async fn id_token(&self) -> Result<IdToken, Error>;

    /// Fetch the metadata record for the current user.
    async fn user_metadata(&self) -> Result<UserMetadata, Error>;

    /// End the provider-side session.
    async fn logout(&self) -> Result<(), Error>;

    /// Change the current user's email address.
    async fn update_email(&self, config: &UpdateEmailConfig) -> Result<(), Error>;

    /// Generate a fresh identity token for the current session.
    async fn generate_id_token(
        &self,
        config: Option<&GenerateIdTokenConfig>,
    ) -> Result<IdToken, Error>;
}

/// A complete authentication client: login flows plus session operations.
///
/// Blanket-implemented for any type providing both halves.
pub trait AuthClient: AuthApi + SessionApi {}

impl<T: AuthApi + SessionApi + ?Sized> AuthClient for T {}
