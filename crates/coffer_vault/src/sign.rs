//! # Sign Matching
//!
//! A sign marks a vault when its first line matches the configured pattern
//! in full, ignoring case. Capture group 1 names the vault type; an empty or
//! missing group means a player vault.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::{VaultError, VaultResult};

/// Who a vault belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VaultType {
    /// A single player's vault.
    Player,
    /// A faction's shared vault.
    Faction,
    /// A town's vault.
    Town,
    /// A nation's vault.
    Nation,
    /// A region's vault.
    Region,
}

impl VaultType {
    /// Upper-case token naming this type on a sign.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Player => "PLAYER",
            Self::Faction => "FACTION",
            Self::Town => "TOWN",
            Self::Nation => "NATION",
            Self::Region => "REGION",
        }
    }

    /// Parses the type token from a sign; the empty token is a player vault.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_uppercase().as_str() {
            "" | "PLAYER" => Some(Self::Player),
            "FACTION" => Some(Self::Faction),
            "TOWN" => Some(Self::Town),
            "NATION" => Some(Self::Nation),
            "REGION" => Some(Self::Region),
            _ => None,
        }
    }
}

impl FromStr for VaultType {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
            .ok_or_else(|| VaultError::InvalidConfig(format!("unknown vault type {s:?}")))
    }
}

impl fmt::Display for VaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Compiled sign pattern.
#[derive(Clone, Debug)]
pub struct VaultSignMatcher {
    regex: Regex,
}

impl VaultSignMatcher {
    /// Compiles a sign pattern. The pattern must match a whole line.
    ///
    /// # Errors
    ///
    /// Returns `VaultError::InvalidPattern` if the pattern does not compile.
    pub fn new(pattern: &str) -> VaultResult<Self> {
        let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
            .case_insensitive(true)
            .unicode(true)
            .build()
            .map_err(|e| VaultError::InvalidPattern(e.to_string()))?;
        Ok(Self { regex })
    }

    /// The vault type a sign line asks for, or `None` if it is no vault sign.
    #[must_use]
    pub fn match_line(&self, line: &str) -> Option<VaultType> {
        let captures = self.regex.captures(line)?;
        let token = captures.get(1).map_or("", |m| m.as_str());
        VaultType::from_token(token)
    }
}
