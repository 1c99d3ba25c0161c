//! Asset Hash Value Object
//!
//! The short content fingerprint a widget bundler appends to file stems
//! (`pizzaz-list-3f9a.html`).

use std::fmt;
use std::str::FromStr;

/// A validated bundle fingerprint: exactly four lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetHash(String);

/// Rejected fingerprint text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid asset hash '{0}': expected {len} lowercase hex characters", len = AssetHash::LEN)]
pub struct InvalidAssetHash(pub String);

impl AssetHash {
    /// Fingerprint length produced by the widget build
    pub const LEN: usize = 4;

    /// Validate and wrap a fingerprint
    pub fn parse(raw: &str) -> Result<Self, InvalidAssetHash> {
        let valid = raw.len() == Self::LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidAssetHash(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AssetHash {
    type Err = InvalidAssetHash;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AssetHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
