//! Song resource shapes.

use super::{Artwork, EditorialNotes, PlayParameters, Relationship};
use serde::Deserialize;

/// Attributes of a catalog song.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongAttributes {
    pub name: String,
    pub album_name: Option<String>,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub composer_name: Option<String>,
    pub content_rating: Option<String>,
    pub disc_number: Option<u32>,
    pub duration_in_millis: Option<u64>,
    pub editorial_notes: Option<EditorialNotes>,
    #[serde(default)]
    pub genre_names: Vec<String>,
    pub isrc: Option<String>,
    pub play_params: Option<PlayParameters>,
    pub release_date: Option<String>,
    pub track_number: Option<u32>,
    pub url: Option<String>,
}

/// Named relationships of a catalog song.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SongRelationships {
    pub albums: Option<Relationship>,
    pub artists: Option<Relationship>,
    pub genres: Option<Relationship>,
    pub station: Option<Relationship>,
}
