//! RFC 5802 credential derivation.
//!
//! The derivation chain, per RFC 5802 section 3:
//!
//! ```text
//! SaltedPassword := Hi(password, salt, iterations)   # PBKDF2-HMAC
//! ClientKey      := HMAC(SaltedPassword, "Client Key")
//! StoredKey      := H(ClientKey)
//! ServerKey      := HMAC(SaltedPassword, "Server Key")
//! ```
//!
//! `"Client Key"` and `"Server Key"` are literal ASCII protocol constants.
//! `SaltedPassword` and `ClientKey` are password-equivalent and never leave
//! this module.

use std::num::NonZeroU32;

use aws_lc_rs::{digest, hmac, pbkdf2};

use crate::credential::{CredentialSet, ScramCredential};
use crate::error::{ScramError, ScramResult};
use crate::mechanism::ScramMechanism;
use crate::salt::generate_salt;

const CLIENT_KEY: &[u8] = b"Client Key";
const SERVER_KEY: &[u8] = b"Server Key";

/// Derives SCRAM credentials for a fixed mechanism.
#[derive(Debug, Clone, Copy)]
pub struct ScramFormatter {
    mechanism: ScramMechanism,
}

impl ScramFormatter {
    /// Creates a formatter for the given mechanism.
    #[must_use]
    pub const fn new(mechanism: ScramMechanism) -> Self {
        Self { mechanism }
    }

    /// Returns the formatter's mechanism.
    #[must_use]
    pub const fn mechanism(&self) -> ScramMechanism {
        self.mechanism
    }

    /// Generates a credential with a fresh random salt.
    ///
    /// Each call draws an independent 32-byte salt from the secure random
    /// source, so generating for the same password twice yields different
    /// credentials.
    ///
    /// The password is used as its UTF-8 bytes. An empty password is
    /// accepted here: minimum-length policy belongs to the caller, not to
    /// the derivation.
    ///
    /// ## Errors
    ///
    /// Returns `ScramError::InvalidIterations` for a zero iteration count
    /// and `ScramError::EntropySource` if the random source fails. No
    /// partial credential is ever returned.
    pub fn generate_credential(
        &self,
        password: &str,
        iterations: u32,
    ) -> ScramResult<ScramCredential> {
        let salt = generate_salt()?;
        self.credential_with_salt(password, &salt, iterations)
    }

    /// Derives a credential against a caller-supplied salt.
    ///
    /// This is the deterministic half of the derivation: the same
    /// (password, salt, iterations, mechanism) inputs always reproduce
    /// identical `stored_key` and `server_key` bytes. Use it to re-derive
    /// against a stored salt or to check published test vectors; for new
    /// credentials use [`generate_credential`](Self::generate_credential),
    /// which never reuses a salt.
    ///
    /// ## Errors
    ///
    /// Returns `ScramError::InvalidIterations` for a zero iteration count.
    pub fn credential_with_salt(
        &self,
        password: &str,
        salt: &[u8],
        iterations: u32,
    ) -> ScramResult<ScramCredential> {
        let iterations_nz =
            NonZeroU32::new(iterations).ok_or(ScramError::InvalidIterations(iterations))?;

        let salted_password = self.salted_password(password.as_bytes(), salt, iterations_nz);

        let client_key = self.keyed_hmac(&salted_password, CLIENT_KEY);
        let stored_key = self.hash(&client_key);
        let server_key = self.keyed_hmac(&salted_password, SERVER_KEY);

        Ok(ScramCredential {
            salt: salt.to_vec(),
            stored_key,
            server_key,
            iterations,
        })
    }

    /// `Hi(str, salt, i)` — PBKDF2 with the mechanism's HMAC, output
    /// truncated to the native digest length.
    fn salted_password(&self, password: &[u8], salt: &[u8], iterations: NonZeroU32) -> Vec<u8> {
        let algorithm = match self.mechanism {
            ScramMechanism::Sha256 => pbkdf2::PBKDF2_HMAC_SHA256,
            ScramMechanism::Sha512 => pbkdf2::PBKDF2_HMAC_SHA512,
        };

        let mut out = vec![0u8; self.mechanism.digest_len()];
        pbkdf2::derive(algorithm, iterations, salt, password, &mut out);
        out
    }

    fn keyed_hmac(&self, key: &[u8], message: &[u8]) -> Vec<u8> {
        let algorithm = match self.mechanism {
            ScramMechanism::Sha256 => hmac::HMAC_SHA256,
            ScramMechanism::Sha512 => hmac::HMAC_SHA512,
        };

        let key = hmac::Key::new(algorithm, key);
        hmac::sign(&key, message).as_ref().to_vec()
    }

    fn hash(&self, data: &[u8]) -> Vec<u8> {
        let algorithm = match self.mechanism {
            ScramMechanism::Sha256 => &digest::SHA256,
            ScramMechanism::Sha512 => &digest::SHA512,
        };

        digest::digest(algorithm, data).as_ref().to_vec()
    }
}

/// Generates independent credentials for a set of mechanisms.
///
/// Each mechanism gets its own fresh salt; mechanisms never share one,
/// since they are cryptographically independent credential sets. The
/// result is keyed by SASL mechanism name, ready for serialization in the
/// persisted credential-file format.
///
/// ## Errors
///
/// Returns the first derivation error; on failure no partial set is
/// returned.
pub fn generate_credentials(
    password: &str,
    iterations: u32,
    mechanisms: &[ScramMechanism],
) -> ScramResult<CredentialSet> {
    let mut set = CredentialSet::new();
    for &mechanism in mechanisms {
        let credential = ScramFormatter::new(mechanism).generate_credential(password, iterations)?;
        set.insert(mechanism.mechanism_name().to_string(), credential);
    }
    Ok(set)
}
