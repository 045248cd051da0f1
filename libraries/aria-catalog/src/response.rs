//! Top-level response envelope types.

use crate::types::Resource;
use serde::Deserialize;
use serde_json::Value;

/// The envelope every catalog response arrives in.
///
/// `data` and `errors` are not mutually exclusive: the service may
/// return partial results alongside errors for the items it could not
/// produce. Both default to empty rather than absent so consumers never
/// see a null collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseRoot {
    /// Decoded top-level resources
    pub data: Vec<Resource>,
    /// Structured errors, possibly alongside partial data
    pub errors: Vec<ApiError>,
    /// Relative location of this response
    pub href: Option<String>,
    /// Relative location of the next page, when paginated
    pub next: Option<String>,
    /// Undocumented service metadata, passed through untyped
    pub meta: Option<Value>,
    /// Per-category results for search-style endpoints
    pub results: Option<SearchResults>,
}

/// A structured error from the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub id: Option<String>,
    pub code: Option<String>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub detail: Option<String>,
    /// Pointer/parameter reference into the original request, untyped
    pub source: Option<Value>,
}

/// One category page inside a search response.
///
/// Each category paginates independently, so it carries its own
/// `href`/`next` alongside its (homogeneous) resource list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPage {
    pub href: Option<String>,
    pub next: Option<String>,
    pub data: Vec<Resource>,
}

/// The keyed bag of per-category results for search-style endpoints.
///
/// The key itself names the resource kind, so each page decodes
/// homogeneously; polymorphic dispatch is not needed here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults {
    pub activities: Option<ResultPage>,
    pub albums: Option<ResultPage>,
    pub apple_curators: Option<ResultPage>,
    pub artists: Option<ResultPage>,
    pub curators: Option<ResultPage>,
    pub music_videos: Option<ResultPage>,
    pub playlists: Option<ResultPage>,
    pub songs: Option<ResultPage>,
    pub stations: Option<ResultPage>,
    pub library_albums: Option<ResultPage>,
    pub library_artists: Option<ResultPage>,
    pub library_music_videos: Option<ResultPage>,
    pub library_playlists: Option<ResultPage>,
    pub library_songs: Option<ResultPage>,
}

impl SearchResults {
    /// True when no category returned anything.
    pub fn is_empty(&self) -> bool {
        self.activities.is_none()
            && self.albums.is_none()
            && self.apple_curators.is_none()
            && self.artists.is_none()
            && self.curators.is_none()
            && self.music_videos.is_none()
            && self.playlists.is_none()
            && self.songs.is_none()
            && self.stations.is_none()
            && self.library_albums.is_none()
            && self.library_artists.is_none()
            && self.library_music_videos.is_none()
            && self.library_playlists.is_none()
            && self.library_songs.is_none()
    }
}
