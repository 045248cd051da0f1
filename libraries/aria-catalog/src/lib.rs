//! Aria Catalog
//!
//! Typed resource model and polymorphic decoder for the Aria music
//! catalog/library API.
//!
//! # Features
//!
//! - **Resource graph**: a closed union of typed resources (albums,
//!   songs, playlists, library items, ...) with kind-specific
//!   attributes and named relationships
//! - **Polymorphic decoding**: discriminator-driven dispatch, including
//!   relationship arrays that mix resource kinds
//! - **Response envelope**: paging links, structured errors, and
//!   per-category search results
//!
//! # Example
//!
//! ```
//! use aria_catalog::Resource;
//!
//! let body = serde_json::json!({
//!     "data": [
//!         { "id": "1025210938", "type": "albums",
//!           "attributes": { "name": "Melodrama", "artistName": "Lorde" } }
//!     ]
//! });
//!
//! let response = aria_catalog::decode_response(&body)?;
//! match &response.data[0] {
//!     Resource::Album(album) => {
//!         assert_eq!(album.attributes.as_ref().unwrap().name, "Melodrama");
//!     }
//!     other => panic!("expected an album, got {other:?}"),
//! }
//! # Ok::<(), aria_catalog::DecodeError>(())
//! ```

mod decode;
mod error;
mod kind;
mod response;
mod types;

// Re-export main types
pub use decode::{decode_resource, decode_resource_as, decode_resources, decode_response};
pub use error::{DecodeError, Result};
pub use kind::ResourceKind;
pub use response::{ApiError, ResponseRoot, ResultPage, SearchResults};
pub use types::{
    ActivityAttributes, ActivityRelationships, AlbumAttributes, AlbumRelationships,
    ArtistAttributes, ArtistRelationships, Artwork, CuratorAttributes, CuratorRelationships,
    EditorialNotes, GenreAttributes, LibraryAlbumAttributes, LibraryAlbumRelationships,
    LibraryArtistAttributes, LibraryArtistRelationships, LibraryMusicVideoAttributes,
    LibraryMusicVideoRelationships, LibraryPlaylistAttributes, LibraryPlaylistRelationships,
    LibrarySongAttributes, LibrarySongRelationships, MusicVideoAttributes,
    MusicVideoRelationships, NoRelationships, PlayParameters, PlaylistAttributes,
    PlaylistDescription, PlaylistRelationships, RatingAttributes, RecommendationAttributes,
    RecommendationReason, RecommendationRelationships, RecommendationTitle, Relationship,
    Resource, ResourceObject, SongAttributes, SongRelationships, StationAttributes,
    StorefrontAttributes,
};
