//! Decoding tests for the Aria catalog resource model.
//!
//! Fixtures are hand-written JSON documents shaped like real service
//! responses, covering every registered resource kind plus the
//! polymorphic and envelope edge cases.

use aria_catalog::{
    decode_resource, decode_resource_as, decode_resources, decode_response, DecodeError, Resource,
    ResourceKind,
};
use serde_json::{json, Value};

/// A minimal valid resource object for the given kind.
fn minimal(kind: ResourceKind) -> Value {
    json!({ "id": format!("{kind}-id-1"), "type": kind.as_str() })
}

// =============================================================================
// Registry Sweep
// =============================================================================

mod registry {
    use super::*;

    #[test]
    fn every_registered_kind_decodes_to_its_own_kind() {
        for kind in ResourceKind::ALL {
            let resource = decode_resource(&minimal(kind))
                .unwrap_or_else(|e| panic!("kind {kind} failed to decode: {e}"));
            assert_eq!(resource.kind(), kind, "decoded kind mismatch for {kind}");
            assert_eq!(resource.id(), format!("{kind}-id-1"));
        }
    }

    #[test]
    fn unregistered_kind_is_a_hard_failure() {
        let err = decode_resource(&json!({ "id": "x", "type": "bogus-kind" })).unwrap_err();
        match err {
            DecodeError::UnsupportedResourceKind { discriminator, .. } => {
                assert_eq!(discriminator, "bogus-kind");
            }
            other => panic!("expected UnsupportedResourceKind, got {other:?}"),
        }
    }

    #[test]
    fn registry_covers_exactly_eighteen_kinds() {
        assert_eq!(ResourceKind::ALL.len(), 18);
    }
}

// =============================================================================
// Attribute Decoding
// =============================================================================

mod attributes {
    use super::*;

    #[test]
    fn album_attributes_decode_from_camel_case() {
        let value = json!({
            "id": "1025210938",
            "type": "albums",
            "href": "/v1/catalog/us/albums/1025210938",
            "attributes": {
                "name": "Melodrama",
                "artistName": "Lorde",
                "releaseDate": "2017-06-16",
                "trackCount": 11,
                "genreNames": ["Pop", "Music"],
                "isSingle": false,
                "recordLabel": "Universal",
                "artwork": {
                    "width": 3000,
                    "height": 3000,
                    "url": "https://example.org/{w}x{h}bb.jpg",
                    "bgColor": "2c2934"
                }
            }
        });

        let Resource::Album(album) = decode_resource(&value).unwrap() else {
            panic!("expected an album");
        };
        assert_eq!(album.href.as_deref(), Some("/v1/catalog/us/albums/1025210938"));

        let attrs = album.attributes.expect("attributes should decode");
        assert_eq!(attrs.name, "Melodrama");
        assert_eq!(attrs.artist_name, "Lorde");
        assert_eq!(attrs.release_date.as_deref(), Some("2017-06-16"));
        assert_eq!(attrs.track_count, 11);
        assert_eq!(attrs.genre_names, vec!["Pop", "Music"]);
        assert!(!attrs.is_single);

        let artwork = attrs.artwork.expect("artwork should decode");
        assert_eq!(artwork.width, Some(3000));
        assert_eq!(artwork.bg_color.as_deref(), Some("2c2934"));
    }

    #[test]
    fn unknown_attribute_fields_are_tolerated() {
        let value = json!({
            "id": "g1",
            "type": "genres",
            "attributes": {
                "name": "Electronic",
                "someFutureField": { "nested": true }
            }
        });
        let Resource::Genre(genre) = decode_resource(&value).unwrap() else {
            panic!("expected a genre");
        };
        assert_eq!(genre.attributes.unwrap().name, "Electronic");
    }

    #[test]
    fn wrong_attribute_shape_is_a_structural_mismatch() {
        let value = json!({
            "id": "s1",
            "type": "songs",
            "attributes": { "name": "Good Song", "artistName": 42 }
        });
        let err = decode_resource(&value).unwrap_err();
        match err {
            DecodeError::StructuralMismatch { path, .. } => {
                assert_eq!(path, "$.attributes");
            }
            other => panic!("expected StructuralMismatch, got {other:?}"),
        }
    }

    #[test]
    fn release_date_accepts_a_bare_year() {
        let value = json!({
            "id": "a2",
            "type": "albums",
            "attributes": { "name": "Old Record", "artistName": "Somebody", "releaseDate": "1969" }
        });
        let Resource::Album(album) = decode_resource(&value).unwrap() else {
            panic!("expected an album");
        };
        assert_eq!(album.attributes.unwrap().release_date.as_deref(), Some("1969"));
    }
}

// =============================================================================
// Relationship Polymorphism
// =============================================================================

mod relationships {
    use super::*;

    #[test]
    fn mixed_kinds_in_one_data_array_decode_per_element() {
        let value = json!({
            "id": "p1",
            "type": "playlists",
            "relationships": {
                "tracks": {
                    "href": "/v1/catalog/us/playlists/p1/tracks",
                    "data": [
                        { "id": "s1", "type": "songs",
                          "attributes": { "name": "Track One", "artistName": "A" } },
                        { "id": "mv1", "type": "music-videos",
                          "attributes": { "name": "Track Two", "artistName": "B" } }
                    ]
                }
            }
        });

        let Resource::Playlist(playlist) = decode_resource(&value).unwrap() else {
            panic!("expected a playlist");
        };
        let tracks = playlist
            .relationships
            .expect("relationships should decode")
            .tracks
            .expect("tracks relationship should be present");

        assert_eq!(tracks.data.len(), 2);
        assert_eq!(tracks.data[0].kind(), ResourceKind::Songs);
        assert_eq!(tracks.data[1].kind(), ResourceKind::MusicVideos);
        assert_eq!(
            tracks.href.as_deref(),
            Some("/v1/catalog/us/playlists/p1/tracks")
        );
    }

    #[test]
    fn empty_data_array_decodes_to_an_empty_list() {
        let value = json!({
            "id": "a1",
            "type": "albums",
            "relationships": { "tracks": { "data": [] } }
        });
        let Resource::Album(album) = decode_resource(&value).unwrap() else {
            panic!("expected an album");
        };
        let tracks = album.relationships.unwrap().tracks.unwrap();
        assert!(tracks.data.is_empty());
    }

    #[test]
    fn omitted_data_keeps_pagination_links() {
        let value = json!({
            "id": "a1",
            "type": "albums",
            "relationships": {
                "tracks": {
                    "href": "/v1/catalog/us/albums/a1/tracks",
                    "next": "/v1/catalog/us/albums/a1/tracks?offset=10"
                }
            }
        });
        let Resource::Album(album) = decode_resource(&value).unwrap() else {
            panic!("expected an album");
        };
        let tracks = album.relationships.unwrap().tracks.unwrap();
        assert!(tracks.data.is_empty());
        assert_eq!(tracks.href.as_deref(), Some("/v1/catalog/us/albums/a1/tracks"));
        assert_eq!(
            tracks.next.as_deref(),
            Some("/v1/catalog/us/albums/a1/tracks?offset=10")
        );
    }

    #[test]
    fn nested_resources_recurse_through_their_own_relationships() {
        let value = json!({
            "id": "la1",
            "type": "library-albums",
            "relationships": {
                "catalog": {
                    "data": [ {
                        "id": "a1",
                        "type": "albums",
                        "relationships": {
                            "artists": { "data": [ { "id": "ar1", "type": "artists" } ] }
                        }
                    } ]
                }
            }
        });

        let Resource::LibraryAlbum(library_album) = decode_resource(&value).unwrap() else {
            panic!("expected a library album");
        };
        let catalog = library_album.relationships.unwrap().catalog.unwrap();
        let Resource::Album(album) = &catalog.data[0] else {
            panic!("expected the catalog counterpart to be an album");
        };
        let artists = album.relationships.as_ref().unwrap().artists.as_ref().unwrap();
        assert_eq!(artists.data[0].id(), "ar1");
    }

    #[test]
    fn bad_nested_resource_fails_the_whole_decode() {
        let value = json!({
            "id": "a1",
            "type": "albums",
            "relationships": {
                "tracks": { "data": [
                    { "id": "s1", "type": "songs" },
                    { "id": "x", "type": "not-a-thing" }
                ] }
            }
        });
        let err = decode_resource(&value).unwrap_err();
        match err {
            DecodeError::UnsupportedResourceKind { path, .. } => {
                assert_eq!(path, "$.relationships.tracks.data[1]");
            }
            other => panic!("expected UnsupportedResourceKind, got {other:?}"),
        }
    }
}

// =============================================================================
// Idempotence
// =============================================================================

mod idempotence {
    use super::*;

    #[test]
    fn decoding_twice_yields_structurally_equal_graphs() {
        let value = json!({
            "data": [ {
                "id": "p1",
                "type": "playlists",
                "attributes": { "name": "Heavy Rotation", "curatorName": "Aria" },
                "relationships": {
                    "tracks": { "data": [
                        { "id": "s1", "type": "songs",
                          "attributes": { "name": "One", "artistName": "A" } },
                        { "id": "mv1", "type": "music-videos",
                          "attributes": { "name": "Two", "artistName": "B" } }
                    ] }
                }
            } ],
            "meta": { "total": 1 }
        });

        let first = decode_response(&value).unwrap();
        let second = decode_response(&value).unwrap();
        assert_eq!(first, second);
    }
}

// =============================================================================
// Envelope Assembly
// =============================================================================

mod envelope {
    use super::*;

    #[test]
    fn heterogeneous_top_level_data_decodes() {
        let value = json!([
            { "id": "s1", "type": "songs" },
            { "id": "st1", "type": "stations" }
        ]);
        let resources = decode_resources(&value).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].kind(), ResourceKind::Songs);
        assert_eq!(resources[1].kind(), ResourceKind::Stations);
    }

    #[test]
    fn errors_decode_alongside_partial_data() {
        let value = json!({
            "data": [ { "id": "a1", "type": "albums" } ],
            "errors": [ {
                "id": "err-1",
                "code": "40400",
                "title": "Resource Not Found",
                "status": "404",
                "detail": "one of the requested ids does not exist",
                "source": { "parameter": "ids" }
            } ]
        });

        let response = decode_response(&value).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.errors.len(), 1);

        let error = &response.errors[0];
        assert_eq!(error.code.as_deref(), Some("40400"));
        assert_eq!(error.status.as_deref(), Some("404"));
        assert_eq!(error.source, Some(json!({ "parameter": "ids" })));
    }

    #[test]
    fn missing_data_decodes_to_an_empty_list() {
        let value = json!({
            "errors": [ { "title": "Forbidden", "status": "403" } ]
        });
        let response = decode_response(&value).unwrap();
        assert!(response.data.is_empty());
        assert_eq!(response.errors.len(), 1);
    }

    #[test]
    fn paging_links_and_meta_survive() {
        let value = json!({
            "data": [],
            "href": "/v1/me/library/songs",
            "next": "/v1/me/library/songs?offset=25",
            "meta": { "total": 340 }
        });
        let response = decode_response(&value).unwrap();
        assert_eq!(response.href.as_deref(), Some("/v1/me/library/songs"));
        assert_eq!(response.next.as_deref(), Some("/v1/me/library/songs?offset=25"));
        assert_eq!(response.meta, Some(json!({ "total": 340 })));
    }
}

// =============================================================================
// Search Results
// =============================================================================

mod search {
    use super::*;

    #[test]
    fn categories_decode_homogeneously() {
        let value = json!({
            "results": {
                "albums": {
                    "href": "/v1/catalog/us/search?types=albums",
                    "data": [ { "id": "a1", "type": "albums" } ]
                },
                "songs": {
                    "data": [
                        { "id": "s1", "type": "songs" },
                        { "id": "s2", "type": "songs" }
                    ],
                    "next": "/v1/catalog/us/search?types=songs&offset=5"
                },
                "library-songs": {
                    "data": [ { "id": "ls1", "type": "library-songs" } ]
                }
            }
        });

        let response = decode_response(&value).unwrap();
        let results = response.results.expect("results bag should decode");

        let albums = results.albums.as_ref().unwrap();
        assert_eq!(albums.data.len(), 1);
        assert_eq!(albums.data[0].kind(), ResourceKind::Albums);

        let songs = results.songs.as_ref().unwrap();
        assert_eq!(songs.data.len(), 2);
        assert_eq!(
            songs.next.as_deref(),
            Some("/v1/catalog/us/search?types=songs&offset=5")
        );

        let library_songs = results.library_songs.as_ref().unwrap();
        assert_eq!(library_songs.data[0].kind(), ResourceKind::LibrarySongs);

        assert!(results.artists.is_none());
        assert!(!results.is_empty());
    }

    #[test]
    fn kind_mismatch_inside_a_category_is_rejected() {
        let value = json!({
            "results": {
                "albums": { "data": [ { "id": "s1", "type": "songs" } ] }
            }
        });
        let err = decode_response(&value).unwrap_err();
        match err {
            DecodeError::StructuralMismatch { path, detail } => {
                assert_eq!(path, "$.results.albums.data[0]");
                assert!(detail.contains("albums"));
            }
            other => panic!("expected StructuralMismatch, got {other:?}"),
        }
    }

    #[test]
    fn restricted_decode_accepts_the_named_kind() {
        let value = json!({ "id": "c1", "type": "curators" });
        let resource = decode_resource_as(&value, ResourceKind::Curators).unwrap();
        assert_eq!(resource.kind(), ResourceKind::Curators);
    }
}
