mod activity;
mod album;
mod artist;
mod curator;
mod genre;
mod library;
mod music_video;
mod playlist;
mod rating;
mod recommendation;
mod resource;
mod shared;
mod song;
mod station;
mod storefront;

pub use activity::{ActivityAttributes, ActivityRelationships};
pub use album::{AlbumAttributes, AlbumRelationships};
pub use artist::{ArtistAttributes, ArtistRelationships};
pub use curator::{CuratorAttributes, CuratorRelationships};
pub use genre::GenreAttributes;
pub use library::{
    LibraryAlbumAttributes, LibraryAlbumRelationships, LibraryArtistAttributes,
    LibraryArtistRelationships, LibraryMusicVideoAttributes, LibraryMusicVideoRelationships,
    LibraryPlaylistAttributes, LibraryPlaylistRelationships, LibrarySongAttributes,
    LibrarySongRelationships,
};
pub use music_video::{MusicVideoAttributes, MusicVideoRelationships};
pub use playlist::{PlaylistAttributes, PlaylistRelationships};
pub use rating::RatingAttributes;
pub use recommendation::{
    RecommendationAttributes, RecommendationReason, RecommendationRelationships,
    RecommendationTitle,
};
pub use resource::{NoRelationships, Relationship, Resource, ResourceObject};
pub use shared::{Artwork, EditorialNotes, PlayParameters, PlaylistDescription};
pub use song::{SongAttributes, SongRelationships};
pub use station::StationAttributes;
pub use storefront::StorefrontAttributes;
