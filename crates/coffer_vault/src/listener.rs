//! # Sign Listener
//!
//! Turns host sign edits into vault creation events.
//!
//! ```text
//! host sign edit ──> SignListener ──> VaultSignMatcher
//!                         │
//!                         └── attached to a chest? ──> VaultEventSink
//! ```

use crate::config::VaultSettings;
use crate::error::VaultResult;
use crate::sign::{VaultSignMatcher, VaultType};

/// A sign edit as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignChange {
    /// Player who edited the sign.
    pub owner: String,
    /// The sign's lines, top first. May be shorter than the sign.
    pub lines: Vec<String>,
    /// Whether the sign sits on a block that can hold a vault.
    pub attached_to_container: bool,
}

impl SignChange {
    /// Creates a sign edit.
    #[must_use]
    pub fn new<I, L>(owner: impl Into<String>, lines: I, attached_to_container: bool) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            owner: owner.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            attached_to_container,
        }
    }

    /// The first line, if the sign has one.
    #[must_use]
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

/// A vault the host should create.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultCreation {
    /// Kind of vault requested by the sign.
    pub vault_type: VaultType,
    /// Player who placed the sign.
    pub owner: String,
}

/// Receives vault creation events.
///
/// The host implements this to validate ownership and persist the vault.
pub trait VaultEventSink {
    /// Called once per qualifying sign edit.
    fn vault_created(&mut self, creation: VaultCreation);
}

impl VaultEventSink for Vec<VaultCreation> {
    fn vault_created(&mut self, creation: VaultCreation) {
        self.push(creation);
    }
}

/// Watches sign edits for vault markers.
#[derive(Clone, Debug)]
pub struct SignListener {
    matcher: VaultSignMatcher,
}

impl SignListener {
    /// Creates a listener from settings.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidPattern` if the configured pattern does not compile.
    pub fn new(settings: &VaultSettings) -> VaultResult<Self> {
        Ok(Self {
            matcher: VaultSignMatcher::new(&settings.pattern)?,
        })
    }

    /// Handles one sign edit. Returns true if a vault creation was dispatched.
    pub fn on_sign_change<S: VaultEventSink + ?Sized>(
        &self,
        change: &SignChange,
        sink: &mut S,
    ) -> bool {
        let Some(line) = change.first_line() else {
            return false;
        };
        let Some(vault_type) = self.matcher.match_line(line) else {
            return false;
        };
        if !change.attached_to_container {
            tracing::debug!("Vault sign by {} is not on a container", change.owner);
            return false;
        }

        tracing::debug!("Vault sign by {}: {} vault", change.owner, vault_type);
        sink.vault_created(VaultCreation {
            vault_type,
            owner: change.owner.clone(),
        });
        true
    }
}
