//! The SCRAM credential value type and its persisted form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A derived SCRAM credential.
///
/// This is what a server stores in place of the plaintext password: the
/// per-credential salt, the two verifier keys, and the PBKDF2 work factor
/// used to produce them. `stored_key` and `server_key` are deterministic
/// functions of (password, salt, iterations, mechanism); the salt is the
/// only randomized input.
///
/// The value is terminal: it is produced once, handed to the caller for
/// serialization or storage, and never mutated. The plaintext password is
/// not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScramCredential {
    /// Random per-credential salt (32 bytes).
    #[serde(with = "base64_bytes")]
    pub salt: Vec<u8>,

    /// `H(ClientKey)` — what the server compares client proofs against.
    #[serde(with = "base64_bytes")]
    pub stored_key: Vec<u8>,

    /// `HMAC(SaltedPassword, "Server Key")` — what the server signs with.
    #[serde(with = "base64_bytes")]
    pub server_key: Vec<u8>,

    /// PBKDF2 iteration count used for this credential.
    ///
    /// Verification re-runs the derivation, so the count is stored
    /// alongside the keys.
    pub iterations: u32,
}

/// Credentials for multiple mechanisms, keyed by SASL mechanism name.
///
/// This is the top-level object of the persisted JSON format:
///
/// ```json
/// {
///   "SCRAM-SHA-256": { "salt": "...", "stored_key": "...", "server_key": "...", "iterations": 4096 },
///   "SCRAM-SHA-512": { "salt": "...", "stored_key": "...", "server_key": "...", "iterations": 4096 }
/// }
/// ```
pub type CredentialSet = BTreeMap<String, ScramCredential>;

/// Standard base64 codec for credential byte fields.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(&encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScramCredential {
        ScramCredential {
            salt: vec![0x01; 32],
            stored_key: vec![0x02; 32],
            server_key: vec![0x03; 32],
            iterations: 4096,
        }
    }

    #[test]
    fn serializes_byte_fields_as_base64() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json["salt"].as_str().unwrap(),
            "AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE="
        );
        assert_eq!(json["iterations"].as_i64().unwrap(), 4096);
    }

    #[test]
    fn base64_round_trip_preserves_bytes() {
        let credential = sample();
        let json = serde_json::to_string(&credential).unwrap();
        let decoded: ScramCredential = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, credential);
    }

    #[test]
    fn rejects_invalid_base64() {
        let json = r#"{"salt":"!!!","stored_key":"AA==","server_key":"AA==","iterations":1}"#;
        let result: Result<ScramCredential, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn credential_set_is_keyed_by_mechanism_name() {
        let mut set = CredentialSet::new();
        set.insert("SCRAM-SHA-256".to_string(), sample());

        let json = serde_json::to_value(&set).unwrap();
        assert!(json.get("SCRAM-SHA-256").is_some());
    }
}
