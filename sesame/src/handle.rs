//! The session handle
//!
//! [`SessionHandle`] wraps an authentication client and exposes its session
//! as three observable fields: the identity token, the login flag, and the
//! user metadata. Each field is a `tokio::sync::watch` channel, so hosts can
//! either read a snapshot on demand or subscribe and re-evaluate on every
//! change.
//!
//! The handle owns two detached background tasks: a one-shot startup probe
//! of the client's login status, and a watcher that refreshes the token and
//! metadata every time the login flag turns true. Neither task is awaited or
//! cancelled; a completion that lands after the handle is dropped writes to
//! a channel nobody observes.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use sesame_core::{
    AuthApi, AuthClient, Error, GenerateIdTokenConfig, IdToken, LoginWithMagicLinkConfig,
    SessionApi, UpdateEmailConfig, UserMetadata,
};

/// A point-in-time view of the three session fields.
///
/// The fields are consistent as a unit only after an operation has settled;
/// immediately after the login flag turns true, the token and metadata may
/// still be `None` until their fetches resolve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub id_token: Option<IdToken>,
    pub is_logged_in: bool,
    pub user_metadata: Option<UserMetadata>,
}

/// Reactive session state bound to one authentication client.
///
/// Constructed with [`SessionHandle::attach`]. State starts as
/// `{None, false, None}`, is refined once by the startup probe, and is
/// thereafter mutated only by the handle's own operations and the
/// post-login refresh.
///
/// Every operation is success-gated: if the underlying client call fails,
/// the error propagates to the caller and no field changes, so observers
/// never see a false transition.
pub struct SessionHandle<C: AuthClient> {
    client: Arc<C>,
    id_token: watch::Sender<Option<IdToken>>,
    is_logged_in: watch::Sender<bool>,
    user_metadata: watch::Sender<Option<UserMetadata>>,

    // Held but never awaited; there is no cancellation.
    #[allow(dead_code)]
    probe_task: JoinHandle<()>,
    #[allow(dead_code)]
    refresh_task: JoinHandle<()>,
}

impl<C: AuthClient> SessionHandle<C> {
    /// Attach a handle to a client.
    ///
    /// Spawns the startup probe and the post-login refresh watcher, so this
    /// must be called from within a tokio runtime. Each handle probes its
    /// client exactly once.
    pub fn attach(client: Arc<C>) -> Self {
        let (id_token, _) = watch::channel(None);
        let (is_logged_in, logged_in_rx) = watch::channel(false);
        let (user_metadata, _) = watch::channel(None);

        let probe_task = tokio::spawn(startup_probe(client.clone(), is_logged_in.clone()));
        let refresh_task = tokio::spawn(refresh_on_login(
            client.clone(),
            logged_in_rx,
            id_token.clone(),
            user_metadata.clone(),
        ));

        Self {
            client,
            id_token,
            is_logged_in,
            user_metadata,
            probe_task,
            refresh_task,
        }
    }

    /// The identity token, present only while logged in and fetched.
    pub fn id_token(&self) -> Option<IdToken> {
        self.id_token.borrow().clone()
    }

    /// The authoritative login flag.
    pub fn is_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    /// The user metadata, present only while logged in and fetched.
    pub fn user_metadata(&self) -> Option<UserMetadata> {
        self.user_metadata.borrow().clone()
    }

    /// A snapshot of all three fields.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            id_token: self.id_token(),
            is_logged_in: self.is_logged_in(),
            user_metadata: self.user_metadata(),
        }
    }

    /// Subscribe to identity-token changes.
    pub fn watch_id_token(&self) -> watch::Receiver<Option<IdToken>> {
        self.id_token.subscribe()
    }

    /// Subscribe to login-flag changes.
    pub fn watch_is_logged_in(&self) -> watch::Receiver<bool> {
        self.is_logged_in.subscribe()
    }

    /// Subscribe to user-metadata changes.
    pub fn watch_user_metadata(&self) -> watch::Receiver<Option<UserMetadata>> {
        self.user_metadata.subscribe()
    }

    /// Complete a login with a credential or redirect query string.
    ///
    /// On success, stores the returned token and sets the login flag, which
    /// triggers the post-login refresh.
    ///
    /// # Arguments
    ///
    /// * `credential_or_query` - The credential, or `None` to let the client
    ///   resolve it from its own environment
    pub async fn login_with_credential(
        &self,
        credential_or_query: Option<&str>,
    ) -> Result<(), Error> {
        let token = self.client.login_with_credential(credential_or_query).await?;
        self.store_login(token);
        Ok(())
    }

    /// Complete a magic-link login.
    ///
    /// Resolves once the user has followed the link. On success, stores the
    /// returned token and sets the login flag, which triggers the post-login
    /// refresh.
    pub async fn login_with_magic_link(
        &self,
        config: &LoginWithMagicLinkConfig,
    ) -> Result<(), Error> {
        let token = self.client.login_with_magic_link(config).await?;
        self.store_login(token);
        Ok(())
    }

    /// End the provider-side session and clear the token and metadata.
    ///
    /// The login flag is intentionally left untouched; reconciling it is up
    /// to the caller or the next handle's startup probe. Matches the
    /// provider SDK's own behavior.
    pub async fn logout(&self) -> Result<(), Error> {
        self.client.logout().await?;
        self.id_token.send_replace(None);
        self.user_metadata.send_replace(None);
        Ok(())
    }

    /// Change the current user's email address.
    ///
    /// Does not re-fetch the user metadata; the stored record keeps the old
    /// address until the next refresh.
    pub async fn update_email(&self, config: &UpdateEmailConfig) -> Result<(), Error> {
        self.client.update_email(config).await
    }

    /// Generate a fresh identity token and return it.
    ///
    /// Leaves all session fields unchanged.
    pub async fn generate_id_token(
        &self,
        config: Option<&GenerateIdTokenConfig>,
    ) -> Result<IdToken, Error> {
        self.client.generate_id_token(config).await
    }

    fn store_login(&self, token: IdToken) {
        self.id_token.send_replace(Some(token));
        // Change-detecting write: a repeated login while already logged in
        // does not retrigger the refresh watcher.
        self.is_logged_in.send_if_modified(|current| {
            if *current {
                false
            } else {
                *current = true;
                true
            }
        });
    }
}

/// One-shot query of the client's login status.
///
/// A failed probe leaves the flag untouched.
async fn startup_probe<C: AuthClient>(client: Arc<C>, is_logged_in: watch::Sender<bool>) {
    match client.is_logged_in().await {
        Ok(logged_in) => {
            is_logged_in.send_if_modified(|current| {
                if *current == logged_in {
                    false
                } else {
                    *current = logged_in;
                    true
                }
            });
        }
        Err(e) => tracing::debug!(error = %e, "startup login probe failed"),
    }
}

/// Watches the login flag and refreshes the token and metadata on every
/// transition to true.
///
/// The two fetches are spawned independently and stored as each settles;
/// there is no ordering between them and no cancellation of an in-flight
/// fetch if the flag transitions again. The loop ends once the handle (the
/// last flag writer) is dropped.
async fn refresh_on_login<C: AuthClient>(
    client: Arc<C>,
    mut logged_in: watch::Receiver<bool>,
    id_token: watch::Sender<Option<IdToken>>,
    user_metadata: watch::Sender<Option<UserMetadata>>,
) {
    loop {
        if *logged_in.borrow_and_update() {
            let fetch = client.clone();
            let store = id_token.clone();
            tokio::spawn(async move {
                match fetch.id_token().await {
                    Ok(token) => {
                        store.send_replace(Some(token));
                    }
                    Err(e) => tracing::debug!(error = %e, "id token refresh failed"),
                }
            });

            let fetch = client.clone();
            let store = user_metadata.clone();
            tokio::spawn(async move {
                match fetch.user_metadata().await {
                    Ok(metadata) => {
                        store.send_replace(Some(metadata));
                    }
                    Err(e) => tracing::debug!(error = %e, "user metadata refresh failed"),
                }
            });
        }

        if logged_in.changed().await.is_err() {
            break;
        }
    }
}
