//! Playlist resource shapes.

use super::{Artwork, PlayParameters, PlaylistDescription, Relationship};
use serde::Deserialize;

/// Attributes of a catalog playlist.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistAttributes {
    pub name: String,
    pub artwork: Option<Artwork>,
    pub curator_name: Option<String>,
    pub description: Option<PlaylistDescription>,
    pub last_modified_date: Option<String>,
    pub play_params: Option<PlayParameters>,
    pub playlist_type: Option<String>,
    pub url: Option<String>,
}

/// Named relationships of a catalog playlist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaylistRelationships {
    pub curator: Option<Relationship>,
    /// May mix songs and music videos
    pub tracks: Option<Relationship>,
}
