//! Album resource shapes.

use super::{Artwork, EditorialNotes, PlayParameters, Relationship};
use serde::Deserialize;

/// Attributes of a catalog album.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumAttributes {
    pub name: String,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub content_rating: Option<String>,
    pub copyright: Option<String>,
    pub editorial_notes: Option<EditorialNotes>,
    #[serde(default)]
    pub genre_names: Vec<String>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub is_single: bool,
    pub play_params: Option<PlayParameters>,
    pub record_label: Option<String>,
    /// Full date or bare year, as sent by the service
    pub release_date: Option<String>,
    #[serde(default)]
    pub track_count: u32,
    pub url: Option<String>,
}

/// Named relationships of a catalog album.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlbumRelationships {
    pub artists: Option<Relationship>,
    pub genres: Option<Relationship>,
    /// May mix songs and music videos
    pub tracks: Option<Relationship>,
}
