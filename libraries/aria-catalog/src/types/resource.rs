//! The generic resource shape and the closed resource union.

use crate::kind::ResourceKind;
use crate::types::{
    ActivityAttributes, ActivityRelationships, AlbumAttributes, AlbumRelationships,
    ArtistAttributes, ArtistRelationships, CuratorAttributes, CuratorRelationships,
    GenreAttributes, LibraryAlbumAttributes, LibraryAlbumRelationships, LibraryArtistAttributes,
    LibraryArtistRelationships, LibraryMusicVideoAttributes, LibraryMusicVideoRelationships,
    LibraryPlaylistAttributes, LibraryPlaylistRelationships, LibrarySongAttributes,
    LibrarySongRelationships, MusicVideoAttributes, MusicVideoRelationships, PlaylistAttributes,
    PlaylistRelationships, RatingAttributes, RecommendationAttributes,
    RecommendationRelationships, SongAttributes, SongRelationships, StationAttributes,
    StorefrontAttributes,
};
use serde_json::Value;

/// The shape every concrete resource kind specializes.
///
/// The wire-level `type` discriminator is not stored here; it is carried
/// by the [`Resource`] variant, so a decoded album can never claim to be
/// anything but an album.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceObject<A, R> {
    /// Persistent resource identifier, required and non-empty
    pub id: String,
    /// Relative location of this resource
    pub href: Option<String>,
    /// Kind-specific attribute record
    pub attributes: Option<A>,
    /// Named relationships to other resources
    pub relationships: Option<R>,
    /// Undocumented service metadata, passed through untyped
    pub meta: Option<Value>,
}

/// A named, possibly paginated, possibly heterogeneous collection of
/// resources attached to a parent resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relationship {
    /// Relative location of this relationship
    pub href: Option<String>,
    /// Relative location of the next page, when paginated
    pub next: Option<String>,
    /// Undocumented service metadata, passed through untyped
    pub meta: Option<Value>,
    /// Member resources; empty when the wire omits `data` entirely
    pub data: Vec<Resource>,
}

/// Relationship set for kinds the service defines no relationships for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoRelationships;

/// A single typed entity from the catalog or a user's library.
///
/// Closed union over the registry's resource kinds; each variant's wire
/// discriminator is fixed (an `Album` is always `"albums"`). Matches over
/// this enum are exhaustive with no default arm, so registering a new
/// kind is a compile error until it is handled everywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Album(ResourceObject<AlbumAttributes, AlbumRelationships>),
    Artist(ResourceObject<ArtistAttributes, ArtistRelationships>),
    Playlist(ResourceObject<PlaylistAttributes, PlaylistRelationships>),
    Song(ResourceObject<SongAttributes, SongRelationships>),
    Station(ResourceObject<StationAttributes, NoRelationships>),
    Genre(ResourceObject<GenreAttributes, NoRelationships>),
    Curator(ResourceObject<CuratorAttributes, CuratorRelationships>),
    AppleCurator(ResourceObject<CuratorAttributes, CuratorRelationships>),
    MusicVideo(ResourceObject<MusicVideoAttributes, MusicVideoRelationships>),
    Activity(ResourceObject<ActivityAttributes, ActivityRelationships>),
    Rating(ResourceObject<RatingAttributes, NoRelationships>),
    Storefront(ResourceObject<StorefrontAttributes, NoRelationships>),
    Recommendation(ResourceObject<RecommendationAttributes, RecommendationRelationships>),
    LibraryAlbum(ResourceObject<LibraryAlbumAttributes, LibraryAlbumRelationships>),
    LibraryArtist(ResourceObject<LibraryArtistAttributes, LibraryArtistRelationships>),
    LibraryMusicVideo(ResourceObject<LibraryMusicVideoAttributes, LibraryMusicVideoRelationships>),
    LibraryPlaylist(ResourceObject<LibraryPlaylistAttributes, LibraryPlaylistRelationships>),
    LibrarySong(ResourceObject<LibrarySongAttributes, LibrarySongRelationships>),
}

impl Resource {
    /// The kind this resource decoded as.
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Album(_) => ResourceKind::Albums,
            Resource::Artist(_) => ResourceKind::Artists,
            Resource::Playlist(_) => ResourceKind::Playlists,
            Resource::Song(_) => ResourceKind::Songs,
            Resource::Station(_) => ResourceKind::Stations,
            Resource::Genre(_) => ResourceKind::Genres,
            Resource::Curator(_) => ResourceKind::Curators,
            Resource::AppleCurator(_) => ResourceKind::AppleCurators,
            Resource::MusicVideo(_) => ResourceKind::MusicVideos,
            Resource::Activity(_) => ResourceKind::Activities,
            Resource::Rating(_) => ResourceKind::Ratings,
            Resource::Storefront(_) => ResourceKind::Storefronts,
            Resource::Recommendation(_) => ResourceKind::PersonalRecommendation,
            Resource::LibraryAlbum(_) => ResourceKind::LibraryAlbums,
            Resource::LibraryArtist(_) => ResourceKind::LibraryArtists,
            Resource::LibraryMusicVideo(_) => ResourceKind::LibraryMusicVideos,
            Resource::LibraryPlaylist(_) => ResourceKind::LibraryPlaylists,
            Resource::LibrarySong(_) => ResourceKind::LibrarySongs,
        }
    }

    /// The resource identifier.
    pub fn id(&self) -> &str {
        match self {
            Resource::Album(r) => &r.id,
            Resource::Artist(r) => &r.id,
            Resource::Playlist(r) => &r.id,
            Resource::Song(r) => &r.id,
            Resource::Station(r) => &r.id,
            Resource::Genre(r) => &r.id,
            Resource::Curator(r) => &r.id,
            Resource::AppleCurator(r) => &r.id,
            Resource::MusicVideo(r) => &r.id,
            Resource::Activity(r) => &r.id,
            Resource::Rating(r) => &r.id,
            Resource::Storefront(r) => &r.id,
            Resource::Recommendation(r) => &r.id,
            Resource::LibraryAlbum(r) => &r.id,
            Resource::LibraryArtist(r) => &r.id,
            Resource::LibraryMusicVideo(r) => &r.id,
            Resource::LibraryPlaylist(r) => &r.id,
            Resource::LibrarySong(r) => &r.id,
        }
    }

    /// The resource location, when the service provided one.
    pub fn href(&self) -> Option<&str> {
        match self {
            Resource::Album(r) => r.href.as_deref(),
            Resource::Artist(r) => r.href.as_deref(),
            Resource::Playlist(r) => r.href.as_deref(),
            Resource::Song(r) => r.href.as_deref(),
            Resource::Station(r) => r.href.as_deref(),
            Resource::Genre(r) => r.href.as_deref(),
            Resource::Curator(r) => r.href.as_deref(),
            Resource::AppleCurator(r) => r.href.as_deref(),
            Resource::MusicVideo(r) => r.href.as_deref(),
            Resource::Activity(r) => r.href.as_deref(),
            Resource::Rating(r) => r.href.as_deref(),
            Resource::Storefront(r) => r.href.as_deref(),
            Resource::Recommendation(r) => r.href.as_deref(),
            Resource::LibraryAlbum(r) => r.href.as_deref(),
            Resource::LibraryArtist(r) => r.href.as_deref(),
            Resource::LibraryMusicVideo(r) => r.href.as_deref(),
            Resource::LibraryPlaylist(r) => r.href.as_deref(),
            Resource::LibrarySong(r) => r.href.as_deref(),
        }
    }
}
