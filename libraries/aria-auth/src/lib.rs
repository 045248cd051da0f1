//! Aria Auth
//!
//! Developer token signing for the Aria catalog API. Every outbound
//! request to the service carries a short-lived bearer credential: a
//! compact JWT signed with an ECDSA P-256 key identified by a key id
//! and issued on behalf of a team id.
//!
//! # Example
//!
//! ```ignore
//! use aria_auth::{DeveloperTokenSigner, SigningConfig};
//!
//! let config = SigningConfig::new("ABC123DEFG", "DEF123GHIJ", "/etc/aria/AuthKey.p8")?;
//! let signer = DeveloperTokenSigner::new(config)?;
//!
//! let token = signer.create_token()?;
//! // place in: Authorization: Bearer <token>
//! ```

mod config;
mod error;
mod token;

// Re-export main types
pub use config::SigningConfig;
pub use error::{AuthError, Result};
pub use token::{Claims, DeveloperTokenSigner};
