//! Artist resource shapes.

use super::{Artwork, EditorialNotes, Relationship};
use serde::Deserialize;

/// Attributes of a catalog artist.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistAttributes {
    pub name: String,
    pub artwork: Option<Artwork>,
    pub editorial_notes: Option<EditorialNotes>,
    #[serde(default)]
    pub genre_names: Vec<String>,
    pub url: Option<String>,
}

/// Named relationships of a catalog artist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtistRelationships {
    pub albums: Option<Relationship>,
    pub genres: Option<Relationship>,
    pub playlists: Option<Relationship>,
}
