//! Genre resource shapes.

use serde::Deserialize;

/// Attributes of a catalog genre.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreAttributes {
    pub name: String,
}
