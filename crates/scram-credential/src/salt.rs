//! Cryptographically secure salt generation.
//!
//! Salts come from the platform's secure random source via aws-lc-rs. A
//! failed draw is surfaced as `ScramError::EntropySource`; there is no
//! fallback to a weaker generator.

use aws_lc_rs::rand;

use crate::error::{ScramError, ScramResult};

/// Salt length in bytes.
///
/// Every generated credential carries a fresh salt of exactly this size,
/// independent of the mechanism's digest length.
pub const SALT_LEN: usize = 32;

/// Draws a fresh random salt.
///
/// Each call produces an independent value; salts are never reused across
/// credential generations, including generations for different mechanisms
/// from the same password.
///
/// ## Errors
///
/// Returns `ScramError::EntropySource` if the secure random source fails.
pub fn generate_salt() -> ScramResult<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    rand::fill(&mut salt).map_err(|_| ScramError::EntropySource)?;
    Ok(salt)
}
