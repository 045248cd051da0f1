//! Station resource shapes.

use super::{Artwork, EditorialNotes};
use serde::Deserialize;

/// Attributes of a catalog radio station.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationAttributes {
    pub name: String,
    pub artwork: Option<Artwork>,
    pub duration_in_millis: Option<u64>,
    pub editorial_notes: Option<EditorialNotes>,
    pub episode_number: Option<u32>,
    #[serde(default)]
    pub is_live: bool,
    pub url: Option<String>,
}
