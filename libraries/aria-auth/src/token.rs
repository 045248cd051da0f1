//! Developer token signing.

use crate::config::SigningConfig;
use crate::error::{AuthError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default validity window for a developer token.
///
/// The upstream service rejects tokens whose window exceeds six months;
/// twelve hours keeps a leaked token short-lived while staying long
/// enough for callers to cache one per process run.
const DEFAULT_LIFETIME_HOURS: i64 = 12;

/// Registered claims carried by a developer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer: the team identifier
    pub iss: String,
    /// Issued at (seconds since the epoch)
    pub iat: i64,
    /// Expiry (seconds since the epoch)
    pub exp: i64,
}

/// Signs developer tokens for the catalog API.
///
/// The private key is read and parsed once at construction; after that
/// the signer holds only immutable state, so a single instance may be
/// shared freely across threads. Each [`create_token`](Self::create_token)
/// call mints a fresh token anchored at the current instant. Nothing is
/// cached; reuse within the validity window is the caller's decision.
#[derive(Clone)]
pub struct DeveloperTokenSigner {
    key_id: String,
    team_id: String,
    encoding_key: EncodingKey,
    lifetime: Duration,
}

impl DeveloperTokenSigner {
    /// Create a signer with the default token lifetime.
    pub fn new(config: SigningConfig) -> Result<Self> {
        Self::with_lifetime(config, Duration::hours(DEFAULT_LIFETIME_HOURS))
    }

    /// Create a signer that mints tokens valid for `lifetime`.
    pub fn with_lifetime(config: SigningConfig, lifetime: Duration) -> Result<Self> {
        let pem = std::fs::read(config.private_key_path())?;
        let encoding_key = EncodingKey::from_ec_pem(&pem)
            .map_err(|e| AuthError::KeyFormat(e.to_string()))?;

        debug!(
            key_id = config.key_id(),
            team_id = config.team_id(),
            lifetime_secs = lifetime.num_seconds(),
            "developer token signer ready"
        );

        Ok(Self {
            key_id: config.key_id().to_string(),
            team_id: config.team_id().to_string(),
            encoding_key,
            lifetime,
        })
    }

    /// Mint a compact signed token (header.claims.signature).
    ///
    /// Pure function of the signer's configuration plus the current
    /// time: ES256 over the base64url-encoded header and claims, with
    /// `kid` identifying the key and `iss` carrying the team id.
    pub fn create_token(&self) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            iss: self.team_id.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        let mut header = Header::new(Algorithm::ES256);
        header.kid = Some(self.key_id.clone());

        encode(&header, &claims, &self.encoding_key).map_err(AuthError::from)
    }
}

impl std::fmt::Debug for DeveloperTokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // EncodingKey holds secret material and has no Debug of its own
        f.debug_struct("DeveloperTokenSigner")
            .field("key_id", &self.key_id)
            .field("team_id", &self.team_id)
            .field("lifetime", &self.lifetime)
            .finish_non_exhaustive()
    }
}
