//! Curator resource shapes.
//!
//! Curators and apple-curators share the same attribute and relationship
//! record; only the discriminator differs on the wire.

use super::{Artwork, EditorialNotes, Relationship};
use serde::Deserialize;

/// Attributes of a curator or apple-curator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratorAttributes {
    pub name: String,
    pub artwork: Option<Artwork>,
    pub editorial_notes: Option<EditorialNotes>,
    pub url: Option<String>,
}

/// Named relationships of a curator or apple-curator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CuratorRelationships {
    pub playlists: Option<Relationship>,
}
