//! # Vault Settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VaultError, VaultResult};

/// Pattern used when the settings file does not name one.
///
/// Matches `[vault]`, `[town vault]`, `[factionvault]` and so on; group 1
/// holds the vault type token.
pub const DEFAULT_VAULT_PATTERN: &str = r"[^\[]*\[(\w*) ?vault\]";

/// Vault detection settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultSettings {
    /// Regular expression a sign's first line must match completely.
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_pattern() -> String {
    DEFAULT_VAULT_PATTERN.to_string()
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
        }
    }
}

impl VaultSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidConfig` if the text is not valid settings.
    pub fn from_toml_str(text: &str) -> VaultResult<Self> {
        toml::from_str(text).map_err(|e| VaultError::InvalidConfig(e.to_string()))
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidConfig` if the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> VaultResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            VaultError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}
