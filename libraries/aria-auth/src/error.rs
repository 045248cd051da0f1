//! Error types for token signing.

use thiserror::Error;

/// Result type alias using `AuthError`
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors raised while configuring or running the token signer.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Signing configuration is incomplete or points at a missing file
    #[error("invalid signing configuration: {field} {reason}")]
    Configuration { field: &'static str, reason: String },

    /// Key file content is not a PEM-encoded PKCS#8 EC private key
    #[error("unusable private key: {0}")]
    KeyFormat(String),

    /// Reading the key file failed
    #[error("failed to read private key file: {0}")]
    Io(#[from] std::io::Error),

    /// Token encoding failed
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}
