//! # scram-credential
//!
//! SCRAM (RFC 5802) credential derivation for SASL/SCRAM verifiers.
//!
//! Given a plaintext password, an iteration count, and a mechanism, this
//! crate computes the four artifacts a server stores in place of the
//! password: `salt`, `stored_key`, `server_key`, and `iterations`. The
//! derivation matches RFC 5802 bit-for-bit, so the output interoperates
//! with any compliant SCRAM implementation.
//!
//! The intermediate `SaltedPassword` and `ClientKey` values are derived
//! internally and never returned, logged, or stored.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod credential;
pub mod error;
pub mod formatter;
pub mod mechanism;
pub mod salt;

pub use credential::{CredentialSet, ScramCredential};
pub use error::{ScramError, ScramResult};
pub use formatter::{generate_credentials, ScramFormatter};
pub use mechanism::ScramMechanism;
pub use salt::{generate_salt, SALT_LEN};
