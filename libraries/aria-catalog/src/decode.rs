//! Polymorphic decoding of catalog response bodies.
//!
//! Decoding is discriminator-driven: every resource object names its
//! concrete kind in a `type` field, which is resolved through the closed
//! [`ResourceKind`] registry before a single attribute is touched. The
//! rest of the object is mapped structurally, recursing into
//! relationship `data` arrays where resources of mixed kinds may appear.
//!
//! Decoding is read-only. Resources are never serialized back to the
//! wire through this path; request bodies are built from explicit DTOs
//! by the HTTP layer.

use crate::error::{DecodeError, Result};
use crate::kind::ResourceKind;
use crate::response::{ApiError, ResponseRoot, ResultPage, SearchResults};
use crate::types::{
    ActivityRelationships, AlbumRelationships, ArtistRelationships, CuratorRelationships,
    LibraryAlbumRelationships, LibraryArtistRelationships, LibraryMusicVideoRelationships,
    LibraryPlaylistRelationships, LibrarySongRelationships, MusicVideoRelationships,
    NoRelationships, PlaylistRelationships, RecommendationRelationships, Relationship, Resource,
    ResourceObject, SongRelationships,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// Decode a single resource object of any registered kind.
pub fn decode_resource(value: &Value) -> Result<Resource> {
    decode_resource_at(value, "$")
}

/// Decode a heterogeneous array of resource objects.
///
/// Each element dispatches on its own `type` field, so a single array
/// may mix kinds (e.g. songs and music videos in a `tracks`
/// relationship).
pub fn decode_resources(value: &Value) -> Result<Vec<Resource>> {
    decode_resources_at(value, "$")
}

/// Decode a resource object that must be of one specific kind.
///
/// Used for contexts where the surrounding key already names the kind,
/// such as search result categories. A well-formed resource of a
/// different kind is a structural mismatch, not a kind lookup failure.
pub fn decode_resource_as(value: &Value, expected: ResourceKind) -> Result<Resource> {
    decode_resource_as_at(value, expected, "$")
}

/// Decode a complete top-level response document.
///
/// `data` and `errors` are decoded independently: the service contract
/// allows partial success, so errors are surfaced even when data is
/// present. Search-style documents additionally carry a `results` bag
/// decoded one homogeneous category at a time.
pub fn decode_response(value: &Value) -> Result<ResponseRoot> {
    let obj = as_object(value, "$")?;

    let data = match obj.get("data") {
        None | Some(Value::Null) => Vec::new(),
        Some(v) => decode_resources_at(v, "$.data")?,
    };

    let errors: Vec<ApiError> = match obj.get("errors") {
        None | Some(Value::Null) => Vec::new(),
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| mismatch("$.errors", &e.to_string()))?,
    };

    let results = match obj.get("results") {
        None | Some(Value::Null) => None,
        Some(v) => Some(decode_results(v)?),
    };

    debug!(
        resources = data.len(),
        errors = errors.len(),
        has_results = results.is_some(),
        "decoded response envelope"
    );

    Ok(ResponseRoot {
        data,
        errors,
        href: opt_string(obj, "href", "$")?,
        next: opt_string(obj, "next", "$")?,
        meta: opaque(obj, "meta"),
        results,
    })
}

fn decode_resources_at(value: &Value, path: &str) -> Result<Vec<Resource>> {
    let items = value
        .as_array()
        .ok_or_else(|| mismatch(path, "expected an array of resource objects"))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| decode_resource_at(item, &format!("{path}[{i}]")))
        .collect()
}

fn decode_resource_at(value: &Value, path: &str) -> Result<Resource> {
    let obj = as_object(value, path)?;

    let tag = match obj.get("type") {
        None | Some(Value::Null) => {
            return Err(DecodeError::MissingDiscriminator { path: path.into() })
        }
        Some(v) => v
            .as_str()
            .ok_or_else(|| mismatch(&format!("{path}.type"), "discriminator must be a string"))?,
    };

    let kind = ResourceKind::from_discriminator(tag).ok_or_else(|| {
        DecodeError::UnsupportedResourceKind {
            discriminator: tag.to_string(),
            path: path.into(),
        }
    })?;

    let rel_path = format!("{path}.relationships");
    let rel_obj = match obj.get("relationships") {
        None | Some(Value::Null) => None,
        Some(v) => Some(as_object(v, &rel_path)?),
    };
    let rels = RelationshipFields {
        obj: rel_obj,
        path: &rel_path,
    };

    // One arm per registry entry; adding a kind fails to compile until
    // its shape is wired in here.
    let resource = match kind {
        ResourceKind::Albums => Resource::Album(object(obj, path, &rels, |m| {
            Ok(AlbumRelationships {
                artists: m.get("artists")?,
                genres: m.get("genres")?,
                tracks: m.get("tracks")?,
            })
        })?),
        ResourceKind::Artists => Resource::Artist(object(obj, path, &rels, |m| {
            Ok(ArtistRelationships {
                albums: m.get("albums")?,
                genres: m.get("genres")?,
                playlists: m.get("playlists")?,
            })
        })?),
        ResourceKind::Playlists => Resource::Playlist(object(obj, path, &rels, |m| {
            Ok(PlaylistRelationships {
                curator: m.get("curator")?,
                tracks: m.get("tracks")?,
            })
        })?),
        ResourceKind::Songs => Resource::Song(object(obj, path, &rels, |m| {
            Ok(SongRelationships {
                albums: m.get("albums")?,
                artists: m.get("artists")?,
                genres: m.get("genres")?,
                station: m.get("station")?,
            })
        })?),
        ResourceKind::Stations => {
            Resource::Station(object(obj, path, &rels, |_| Ok(NoRelationships))?)
        }
        ResourceKind::Genres => {
            Resource::Genre(object(obj, path, &rels, |_| Ok(NoRelationships))?)
        }
        ResourceKind::Curators => Resource::Curator(object(obj, path, &rels, |m| {
            Ok(CuratorRelationships {
                playlists: m.get("playlists")?,
            })
        })?),
        ResourceKind::AppleCurators => Resource::AppleCurator(object(obj, path, &rels, |m| {
            Ok(CuratorRelationships {
                playlists: m.get("playlists")?,
            })
        })?),
        ResourceKind::MusicVideos => Resource::MusicVideo(object(obj, path, &rels, |m| {
            Ok(MusicVideoRelationships {
                albums: m.get("albums")?,
                artists: m.get("artists")?,
                genres: m.get("genres")?,
                songs: m.get("songs")?,
            })
        })?),
        ResourceKind::Activities => Resource::Activity(object(obj, path, &rels, |m| {
            Ok(ActivityRelationships {
                playlists: m.get("playlists")?,
            })
        })?),
        ResourceKind::Ratings => {
            Resource::Rating(object(obj, path, &rels, |_| Ok(NoRelationships))?)
        }
        ResourceKind::Storefronts => {
            Resource::Storefront(object(obj, path, &rels, |_| Ok(NoRelationships))?)
        }
        ResourceKind::PersonalRecommendation => {
            Resource::Recommendation(object(obj, path, &rels, |m| {
                Ok(RecommendationRelationships {
                    contents: m.get("contents")?,
                    recommendations: m.get("recommendations")?,
                })
            })?)
        }
        ResourceKind::LibraryAlbums => Resource::LibraryAlbum(object(obj, path, &rels, |m| {
            Ok(LibraryAlbumRelationships {
                artists: m.get("artists")?,
                catalog: m.get("catalog")?,
                tracks: m.get("tracks")?,
            })
        })?),
        ResourceKind::LibraryArtists => Resource::LibraryArtist(object(obj, path, &rels, |m| {
            Ok(LibraryArtistRelationships {
                albums: m.get("albums")?,
                catalog: m.get("catalog")?,
            })
        })?),
        ResourceKind::LibraryMusicVideos => {
            Resource::LibraryMusicVideo(object(obj, path, &rels, |m| {
                Ok(LibraryMusicVideoRelationships {
                    albums: m.get("albums")?,
                    artists: m.get("artists")?,
                    catalog: m.get("catalog")?,
                })
            })?)
        }
        ResourceKind::LibraryPlaylists => {
            Resource::LibraryPlaylist(object(obj, path, &rels, |m| {
                Ok(LibraryPlaylistRelationships {
                    catalog: m.get("catalog")?,
                    tracks: m.get("tracks")?,
                })
            })?)
        }
        ResourceKind::LibrarySongs => Resource::LibrarySong(object(obj, path, &rels, |m| {
            Ok(LibrarySongRelationships {
                albums: m.get("albums")?,
                artists: m.get("artists")?,
                catalog: m.get("catalog")?,
            })
        })?),
    };

    Ok(resource)
}

fn decode_resource_as_at(value: &Value, expected: ResourceKind, path: &str) -> Result<Resource> {
    let resource = decode_resource_at(value, path)?;
    let actual = resource.kind();
    if actual != expected {
        return Err(mismatch(
            path,
            &format!("expected `{expected}` but found `{actual}`"),
        ));
    }
    Ok(resource)
}

/// Named relationship fields of one resource, looked up lazily.
struct RelationshipFields<'a> {
    obj: Option<&'a Map<String, Value>>,
    path: &'a str,
}

impl RelationshipFields<'_> {
    fn get(&self, name: &str) -> Result<Option<Relationship>> {
        let Some(obj) = self.obj else {
            return Ok(None);
        };
        match obj.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => decode_relationship(v, &format!("{}.{name}", self.path)).map(Some),
        }
    }
}

fn decode_relationship(value: &Value, path: &str) -> Result<Relationship> {
    let obj = as_object(value, path)?;

    // No `data` key means the identifiers were omitted; href/next still
    // decode so the caller can paginate later. Either way the list is
    // empty, never null.
    let data = match obj.get("data") {
        None | Some(Value::Null) => Vec::new(),
        Some(v) => decode_resources_at(v, &format!("{path}.data"))?,
    };

    Ok(Relationship {
        href: opt_string(obj, "href", path)?,
        next: opt_string(obj, "next", path)?,
        meta: opaque(obj, "meta"),
        data,
    })
}

fn object<A, R>(
    obj: &Map<String, Value>,
    path: &str,
    rels: &RelationshipFields<'_>,
    build_rels: impl FnOnce(&RelationshipFields<'_>) -> Result<R>,
) -> Result<ResourceObject<A, R>>
where
    A: DeserializeOwned,
{
    let relationships = match rels.obj {
        Some(_) => Some(build_rels(rels)?),
        None => None,
    };

    Ok(ResourceObject {
        id: required_id(obj, path)?,
        href: opt_string(obj, "href", path)?,
        attributes: decode_attributes(obj, path)?,
        relationships,
        meta: opaque(obj, "meta"),
    })
}

fn decode_attributes<A>(obj: &Map<String, Value>, path: &str) -> Result<Option<A>>
where
    A: DeserializeOwned,
{
    match obj.get("attributes") {
        None | Some(Value::Null) => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|e| mismatch(&format!("{path}.attributes"), &e.to_string())),
    }
}

fn decode_results(value: &Value) -> Result<SearchResults> {
    let obj = as_object(value, "$.results")?;
    Ok(SearchResults {
        activities: category(obj, "activities", ResourceKind::Activities)?,
        albums: category(obj, "albums", ResourceKind::Albums)?,
        apple_curators: category(obj, "apple-curators", ResourceKind::AppleCurators)?,
        artists: category(obj, "artists", ResourceKind::Artists)?,
        curators: category(obj, "curators", ResourceKind::Curators)?,
        music_videos: category(obj, "music-videos", ResourceKind::MusicVideos)?,
        playlists: category(obj, "playlists", ResourceKind::Playlists)?,
        songs: category(obj, "songs", ResourceKind::Songs)?,
        stations: category(obj, "stations", ResourceKind::Stations)?,
        library_albums: category(obj, "library-albums", ResourceKind::LibraryAlbums)?,
        library_artists: category(obj, "library-artists", ResourceKind::LibraryArtists)?,
        library_music_videos: category(
            obj,
            "library-music-videos",
            ResourceKind::LibraryMusicVideos,
        )?,
        library_playlists: category(obj, "library-playlists", ResourceKind::LibraryPlaylists)?,
        library_songs: category(obj, "library-songs", ResourceKind::LibrarySongs)?,
    })
}

fn category(
    obj: &Map<String, Value>,
    name: &str,
    kind: ResourceKind,
) -> Result<Option<ResultPage>> {
    let page = match obj.get(name) {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };

    let path = format!("$.results.{name}");
    let page_obj = as_object(page, &path)?;

    let data = match page_obj.get("data") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_resource_as_at(item, kind, &format!("{path}.data[{i}]")))
            .collect::<Result<_>>()?,
        Some(_) => {
            return Err(mismatch(
                &format!("{path}.data"),
                "expected an array of resource objects",
            ))
        }
    };

    Ok(Some(ResultPage {
        href: opt_string(page_obj, "href", &path)?,
        next: opt_string(page_obj, "next", &path)?,
        data,
    }))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| mismatch(path, "expected a JSON object"))
}

fn required_id(obj: &Map<String, Value>, path: &str) -> Result<String> {
    let id = match obj.get("id") {
        None | Some(Value::Null) => {
            return Err(mismatch(path, "missing required `id`"));
        }
        Some(v) => v
            .as_str()
            .ok_or_else(|| mismatch(&format!("{path}.id"), "expected a string"))?,
    };
    if id.is_empty() {
        return Err(mismatch(&format!("{path}.id"), "must be non-empty"));
    }
    Ok(id.to_string())
}

fn opt_string(obj: &Map<String, Value>, key: &str, path: &str) -> Result<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| mismatch(&format!("{path}.{key}"), "expected a string")),
    }
}

fn opaque(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.clone()),
    }
}

fn mismatch(path: &str, detail: &str) -> DecodeError {
    DecodeError::StructuralMismatch {
        path: path.into(),
        detail: detail.into(),
    }
}
