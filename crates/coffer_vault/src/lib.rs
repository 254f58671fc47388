//! # Coffer Vault
//!
//! A chest becomes a vault when a player places a sign on it whose first
//! line matches the configured pattern, for example `[vault]` or
//! `[town vault]`. This crate decides whether a sign qualifies and which kind
//! of vault it creates; the host owns blocks, events and storage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use coffer_vault::{SignChange, SignListener, VaultSettings};
//!
//! let listener = SignListener::new(&VaultSettings::default())?;
//! let change = SignChange::new("Steve", ["[vault]"], chest_below);
//! listener.on_sign_change(&change, &mut vault_registry);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod listener;
pub mod sign;

pub use config::VaultSettings;
pub use error::{VaultError, VaultResult};
pub use listener::{SignChange, SignListener, VaultCreation, VaultEventSink};
pub use sign::{VaultSignMatcher, VaultType};
