//! # Sesame
//!
//! Sesame exposes a passwordless authentication client (magic-link or
//! credential login) as reactive session state. It tracks three observable
//! fields (the identity token, the login flag, and the user metadata) and
//! re-exposes the client's operations with automatic local synchronization:
//! state changes only after the underlying call succeeds, and a login
//! automatically refreshes the token and metadata in the background.
//!
//! Sesame does not implement authentication itself. Credential verification,
//! magic-link issuance, token cryptography, and transport all belong to the
//! client behind the [`AuthApi`] and [`SessionApi`] traits; sesame is the
//! state layer between that client and a host that re-renders on change.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sesame::{ClientConfig, ClientFactory, LoginWithMagicLinkConfig, SessionHandle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sesame::Error> {
//!     // One client per distinct configuration, however often this runs.
//!     let factory = ClientFactory::new(|config: &ClientConfig| {
//!         magic_sdk::MagicClient::new(&config.api_key, &config.options)
//!     });
//!     let client = factory.get_or_build(&ClientConfig::new("pk_live_ABC123"));
//!
//!     // Attaching probes the client's current login status in the background.
//!     let session = SessionHandle::attach(client);
//!
//!     session
//!         .login_with_magic_link(&LoginWithMagicLinkConfig::new("user@example.com"))
//!         .await?;
//!
//!     // The token and metadata are fetched in the background after login.
//!     let mut metadata = session.watch_user_metadata();
//!     let metadata = metadata.wait_for(Option::is_some).await.unwrap();
//!     println!("logged in as {:?}", metadata.as_ref().unwrap().email);
//!
//!     Ok(())
//! }
//! ```
pub mod factory;
pub mod handle;

pub use factory::ClientFactory;
pub use handle::{SessionHandle, SessionSnapshot};

/// Re-export core types from sesame_core
///
/// These types are commonly used when working with the sesame API.
pub use sesame_core::{
    AuthApi, AuthClient, AuthError, ClientConfig, Error, GenerateIdTokenConfig, IdToken,
    LoginWithMagicLinkConfig, SessionApi, UpdateEmailConfig, UserMetadata, ValidationError,
};
