//! Error types for catalog decoding.

use thiserror::Error;

/// Result type alias using `DecodeError`
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors raised while decoding a catalog response body.
///
/// Every variant carries the JSON path of the offending value (e.g.
/// `data[2].relationships.tracks.data[0]`) so a failure can be traced
/// back into the response without dumping the whole document.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// A resource object has no `type` field
    #[error("missing `type` discriminator at {path}")]
    MissingDiscriminator { path: String },

    /// A resource object's `type` names a kind the registry does not know
    #[error("unsupported resource kind `{discriminator}` at {path}")]
    UnsupportedResourceKind { discriminator: String, path: String },

    /// A field has the wrong shape for its resource kind
    #[error("structural mismatch at {path}: {detail}")]
    StructuralMismatch { path: String, detail: String },
}

impl DecodeError {
    /// The JSON path at which decoding failed.
    pub fn path(&self) -> &str {
        match self {
            DecodeError::MissingDiscriminator { path }
            | DecodeError::UnsupportedResourceKind { path, .. }
            | DecodeError::StructuralMismatch { path, .. } => path,
        }
    }
}
