//! Library resource shapes.
//!
//! Library kinds mirror their catalog counterparts with a reduced
//! attribute set and a `catalog` relationship pointing back at the
//! catalog version of the item.

use super::{Artwork, PlayParameters, PlaylistDescription, Relationship};
use serde::Deserialize;

/// Attributes of an album in the user's library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryAlbumAttributes {
    pub name: String,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub content_rating: Option<String>,
    pub play_params: Option<PlayParameters>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub track_count: u32,
}

/// Named relationships of a library album.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryAlbumRelationships {
    pub artists: Option<Relationship>,
    pub catalog: Option<Relationship>,
    pub tracks: Option<Relationship>,
}

/// Attributes of an artist in the user's library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryArtistAttributes {
    pub name: String,
}

/// Named relationships of a library artist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryArtistRelationships {
    pub albums: Option<Relationship>,
    pub catalog: Option<Relationship>,
}

/// Attributes of a music video in the user's library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryMusicVideoAttributes {
    pub name: String,
    pub album_name: Option<String>,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub content_rating: Option<String>,
    pub duration_in_millis: Option<u64>,
    pub play_params: Option<PlayParameters>,
}

/// Named relationships of a library music video.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryMusicVideoRelationships {
    pub albums: Option<Relationship>,
    pub artists: Option<Relationship>,
    pub catalog: Option<Relationship>,
}

/// Attributes of a playlist in the user's library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryPlaylistAttributes {
    pub name: String,
    pub artwork: Option<Artwork>,
    #[serde(default)]
    pub can_edit: bool,
    pub description: Option<PlaylistDescription>,
    pub play_params: Option<PlayParameters>,
}

/// Named relationships of a library playlist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryPlaylistRelationships {
    pub catalog: Option<Relationship>,
    pub tracks: Option<Relationship>,
}

/// Attributes of a song in the user's library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySongAttributes {
    pub name: String,
    pub album_name: Option<String>,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub content_rating: Option<String>,
    pub disc_number: Option<u32>,
    pub duration_in_millis: Option<u64>,
    pub play_params: Option<PlayParameters>,
    pub track_number: Option<u32>,
}

/// Named relationships of a library song.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibrarySongRelationships {
    pub albums: Option<Relationship>,
    pub artists: Option<Relationship>,
    pub catalog: Option<Relationship>,
}
