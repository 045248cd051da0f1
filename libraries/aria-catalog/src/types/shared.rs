//! Value types shared across resource kinds.

use serde::Deserialize;

/// Artwork for an album, playlist, station, or similar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Template URL with `{w}`/`{h}` placeholders
    pub url: String,
    pub bg_color: Option<String>,
    pub text_color1: Option<String>,
    pub text_color2: Option<String>,
    pub text_color3: Option<String>,
    pub text_color4: Option<String>,
}

/// Editorial notes attached to curated content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorialNotes {
    pub standard: Option<String>,
    pub short: Option<String>,
}

/// Playback parameters for content the caller may stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayParameters {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub is_library: bool,
}

/// Long and short form description text for a playlist.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDescription {
    pub standard: Option<String>,
    pub short: Option<String>,
}
