//! The closed registry of resource kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource kind as named by the wire-level `type` discriminator.
///
/// This is a closed set: the service contract defines exactly these
/// kinds, and an unknown discriminator is a hard decode failure rather
/// than a silent default. Adding a kind here is a compile error until
/// every match over `ResourceKind` handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Albums,
    Artists,
    Playlists,
    Songs,
    Stations,
    Genres,
    Curators,
    AppleCurators,
    MusicVideos,
    Activities,
    Ratings,
    Storefronts,
    PersonalRecommendation,
    LibraryAlbums,
    LibraryArtists,
    LibraryMusicVideos,
    LibraryPlaylists,
    LibrarySongs,
}

impl ResourceKind {
    /// All kinds the registry knows, in a stable order.
    pub const ALL: [ResourceKind; 18] = [
        ResourceKind::Albums,
        ResourceKind::Artists,
        ResourceKind::Playlists,
        ResourceKind::Songs,
        ResourceKind::Stations,
        ResourceKind::Genres,
        ResourceKind::Curators,
        ResourceKind::AppleCurators,
        ResourceKind::MusicVideos,
        ResourceKind::Activities,
        ResourceKind::Ratings,
        ResourceKind::Storefronts,
        ResourceKind::PersonalRecommendation,
        ResourceKind::LibraryAlbums,
        ResourceKind::LibraryArtists,
        ResourceKind::LibraryMusicVideos,
        ResourceKind::LibraryPlaylists,
        ResourceKind::LibrarySongs,
    ];

    /// Resolve a wire discriminator string to a kind.
    ///
    /// Returns `None` for discriminators outside the closed set; the
    /// decoder turns that into `DecodeError::UnsupportedResourceKind`.
    pub fn from_discriminator(discriminator: &str) -> Option<Self> {
        match discriminator {
            "albums" => Some(ResourceKind::Albums),
            "artists" => Some(ResourceKind::Artists),
            "playlists" => Some(ResourceKind::Playlists),
            "songs" => Some(ResourceKind::Songs),
            "stations" => Some(ResourceKind::Stations),
            "genres" => Some(ResourceKind::Genres),
            "curators" => Some(ResourceKind::Curators),
            "apple-curators" => Some(ResourceKind::AppleCurators),
            "music-videos" => Some(ResourceKind::MusicVideos),
            "activities" => Some(ResourceKind::Activities),
            "ratings" => Some(ResourceKind::Ratings),
            "storefronts" => Some(ResourceKind::Storefronts),
            "personal-recommendation" => Some(ResourceKind::PersonalRecommendation),
            "library-albums" => Some(ResourceKind::LibraryAlbums),
            "library-artists" => Some(ResourceKind::LibraryArtists),
            "library-music-videos" => Some(ResourceKind::LibraryMusicVideos),
            "library-playlists" => Some(ResourceKind::LibraryPlaylists),
            "library-songs" => Some(ResourceKind::LibrarySongs),
            _ => None,
        }
    }

    /// The wire discriminator string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Albums => "albums",
            ResourceKind::Artists => "artists",
            ResourceKind::Playlists => "playlists",
            ResourceKind::Songs => "songs",
            ResourceKind::Stations => "stations",
            ResourceKind::Genres => "genres",
            ResourceKind::Curators => "curators",
            ResourceKind::AppleCurators => "apple-curators",
            ResourceKind::MusicVideos => "music-videos",
            ResourceKind::Activities => "activities",
            ResourceKind::Ratings => "ratings",
            ResourceKind::Storefronts => "storefronts",
            ResourceKind::PersonalRecommendation => "personal-recommendation",
            ResourceKind::LibraryAlbums => "library-albums",
            ResourceKind::LibraryArtists => "library-artists",
            ResourceKind::LibraryMusicVideos => "library-music-videos",
            ResourceKind::LibraryPlaylists => "library-playlists",
            ResourceKind::LibrarySongs => "library-songs",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminator_round_trips_for_every_kind() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_discriminator(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn unknown_discriminator_is_rejected() {
        assert_eq!(ResourceKind::from_discriminator("bogus-kind"), None);
        assert_eq!(ResourceKind::from_discriminator(""), None);
        // Case matters on the wire
        assert_eq!(ResourceKind::from_discriminator("Albums"), None);
    }

    #[test]
    fn serde_uses_the_wire_discriminator() {
        let json = serde_json::to_string(&ResourceKind::LibrarySongs).unwrap();
        assert_eq!(json, "\"library-songs\"");
        let kind: ResourceKind = serde_json::from_str("\"apple-curators\"").unwrap();
        assert_eq!(kind, ResourceKind::AppleCurators);
    }
}
