//! SCRAM mechanism definitions.
//!
//! The mechanism set is a closed enumeration: selecting the hash by name
//! happens once at the boundary, and everything past that point carries
//! the typed variant.

use serde::{Deserialize, Serialize};

use crate::error::ScramError;

/// Supported SCRAM mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScramMechanism {
    /// SCRAM-SHA-256 (RFC 7677).
    #[serde(rename = "SCRAM-SHA-256")]
    Sha256,

    /// SCRAM-SHA-512.
    #[serde(rename = "SCRAM-SHA-512")]
    Sha512,
}

impl ScramMechanism {
    /// All supported mechanisms, in registration order.
    pub const ALL: [Self; 2] = [Self::Sha256, Self::Sha512];

    /// Returns the native digest length in bytes.
    ///
    /// `stored_key` and `server_key` are always exactly this long.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Returns the SASL mechanism name.
    ///
    /// These are the keys of the persisted credential mapping.
    #[must_use]
    pub const fn mechanism_name(self) -> &'static str {
        match self {
            Self::Sha256 => "SCRAM-SHA-256",
            Self::Sha512 => "SCRAM-SHA-512",
        }
    }

    /// Returns the underlying hash function name.
    #[must_use]
    pub const fn hash_name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Parses a SASL mechanism name.
    ///
    /// Names are matched exactly; the credential file format uses the
    /// canonical upper-case forms.
    ///
    /// ## Errors
    ///
    /// Returns `ScramError::UnsupportedMechanism` for anything outside the
    /// supported set, including mechanisms SCRAM defines but this crate
    /// deliberately excludes (SCRAM-SHA-1).
    pub fn from_mechanism_name(name: &str) -> Result<Self, ScramError> {
        match name {
            "SCRAM-SHA-256" => Ok(Self::Sha256),
            "SCRAM-SHA-512" => Ok(Self::Sha512),
            _ => Err(ScramError::UnsupportedMechanism(name.to_string())),
        }
    }

    /// Parses a bare hash function name (`sha256`, `sha512`).
    ///
    /// ## Errors
    ///
    /// Returns `ScramError::UnsupportedMechanism` for unknown or excluded
    /// hashes (`sha1`, `md5`).
    pub fn from_hash_name(name: &str) -> Result<Self, ScramError> {
        match name {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(ScramError::UnsupportedMechanism(name.to_string())),
        }
    }
}

impl std::fmt::Display for ScramMechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mechanism_name())
    }
}
