//! Core functionality for the sesame project
//!
//! This crate defines the contract between the session handle and the
//! passwordless authentication client it wraps, plus the types that cross
//! that boundary.
//!
//! It contains no network transport, cryptography, or provider logic; all of
//! that lives in the client implementing [`AuthApi`] and [`SessionApi`]. The
//! crate is a dependency of `sesame` and of client bindings, and is not
//! intended to be used directly by application code.
//!
//! See [`AuthClient`] for the combined client contract, [`ClientConfig`] for
//! construction configuration, and [`UserMetadata`] for the user record.

pub mod client;
pub mod config;
pub mod error;
pub mod metadata;
pub mod token;

pub use client::{AuthApi, AuthClient, SessionApi};
pub use config::{ClientConfig, GenerateIdTokenConfig, LoginWithMagicLinkConfig, UpdateEmailConfig};
pub use error::{AuthError, Error, ValidationError};
pub use metadata::UserMetadata;
pub use token::IdToken;
