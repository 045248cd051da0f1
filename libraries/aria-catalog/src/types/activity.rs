//! Activity resource shapes.

use super::{Artwork, EditorialNotes, Relationship};
use serde::Deserialize;

/// Attributes of a catalog activity (mood, workout, and similar hubs).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAttributes {
    pub name: String,
    pub artwork: Option<Artwork>,
    pub editorial_notes: Option<EditorialNotes>,
    pub url: Option<String>,
}

/// Named relationships of a catalog activity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityRelationships {
    pub playlists: Option<Relationship>,
}
