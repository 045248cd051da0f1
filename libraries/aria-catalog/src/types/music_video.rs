//! Music video resource shapes.

use super::{Artwork, EditorialNotes, PlayParameters, Relationship};
use serde::Deserialize;

/// Attributes of a catalog music video.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicVideoAttributes {
    pub name: String,
    pub album_name: Option<String>,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub content_rating: Option<String>,
    pub duration_in_millis: Option<u64>,
    pub editorial_notes: Option<EditorialNotes>,
    #[serde(default)]
    pub genre_names: Vec<String>,
    #[serde(rename = "has4K", default)]
    pub has_4k: bool,
    #[serde(rename = "hasHDR", default)]
    pub has_hdr: bool,
    pub isrc: Option<String>,
    pub play_params: Option<PlayParameters>,
    pub release_date: Option<String>,
    pub track_number: Option<u32>,
    pub url: Option<String>,
    pub video_sub_type: Option<String>,
}

/// Named relationships of a catalog music video.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MusicVideoRelationships {
    pub albums: Option<Relationship>,
    pub artists: Option<Relationship>,
    pub genres: Option<Relationship>,
    pub songs: Option<Relationship>,
}
