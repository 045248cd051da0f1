//! Signing configuration.

use crate::error::{AuthError, Result};
use std::path::PathBuf;

/// The credential material needed to sign developer tokens.
///
/// Values come from the embedding application's startup/config layer;
/// this type only validates them. Validation is eager: a config that
/// constructs is a config that can be signed with (modulo the key file
/// content itself, which the signer checks when it parses the key).
#[derive(Debug, Clone)]
pub struct SigningConfig {
    key_id: String,
    team_id: String,
    private_key_path: PathBuf,
}

impl SigningConfig {
    /// Validate and construct a signing configuration.
    ///
    /// Fails fast with a `Configuration` error naming the offending
    /// field: empty `key_id` or `team_id`, or a `private_key_path` that
    /// does not exist on disk.
    pub fn new(
        key_id: impl Into<String>,
        team_id: impl Into<String>,
        private_key_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let key_id = key_id.into();
        let team_id = team_id.into();
        let private_key_path = private_key_path.into();

        if key_id.is_empty() {
            return Err(AuthError::Configuration {
                field: "key_id",
                reason: "must not be empty".to_string(),
            });
        }
        if team_id.is_empty() {
            return Err(AuthError::Configuration {
                field: "team_id",
                reason: "must not be empty".to_string(),
            });
        }
        if !private_key_path.exists() {
            return Err(AuthError::Configuration {
                field: "private_key_path",
                reason: format!("file not found: {}", private_key_path.display()),
            });
        }

        Ok(Self {
            key_id,
            team_id,
            private_key_path,
        })
    }

    /// The key identifier placed in the token header.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The team identifier used as the token issuer.
    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    /// Path to the PEM-encoded PKCS#8 EC private key.
    pub fn private_key_path(&self) -> &std::path::Path {
        &self.private_key_path
    }
}
