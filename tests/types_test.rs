use spotex::types::*;

const PLAYLIST_JSON: &str = r#"{
  "id": "pl1",
  "name": "Pop Rising",
  "tracks": {
    "total": 4,
    "next": null,
    "items": [
      { "track": { "name": "Hey", "preview_url": "https://p.scdn.co/mp3-preview/abc",
                   "artists": [ { "id": "a1", "name": "Joe" }, { "id": "a2", "name": "Ann" } ] } },
      { "track": null },
      null,
      { "track": { "name": null, "preview_url": null, "artists": [ { "id": null, "name": "Local" } ] } }
    ]
  }
}"#;

#[test]
fn test_playlist_deserializes_with_null_entries() {
    let playlist: PlaylistResponse = serde_json::from_str(PLAYLIST_JSON).unwrap();

    assert_eq!(playlist.id, "pl1");
    assert_eq!(playlist.name, "Pop Rising");
    assert_eq!(playlist.entry_count(), 4);

    // null entry and null track are passed over
    let tracks: Vec<&Track> = playlist.tracks().collect();
    assert_eq!(tracks.len(), 2);

    assert_eq!(tracks[0].name, "Hey");
    assert_eq!(tracks[0].first_artist().unwrap().name, "Joe");
    assert_eq!(tracks[0].first_artist().unwrap().id.as_deref(), Some("a1"));
    assert!(tracks[0].preview_url.is_some());

    // null strings become empty, null ids stay absent
    assert_eq!(tracks[1].name, "");
    assert_eq!(tracks[1].first_artist().unwrap().id, None);
    assert_eq!(tracks[1].preview_url, None);
}

#[test]
fn test_playlist_without_tracks_object() {
    let playlist: PlaylistResponse = serde_json::from_str(r#"{ "id": "empty" }"#).unwrap();
    assert_eq!(playlist.entry_count(), 0);
    assert_eq!(playlist.tracks().count(), 0);
}

#[test]
fn test_search_response_keeps_null_slots() {
    let json = r#"{ "playlists": { "items": [ { "id": "p1", "name": "Jazz" }, null ], "total": 2 } }"#;
    let res: PlaylistsResponse = serde_json::from_str(json).unwrap();

    assert_eq!(res.playlists.items.len(), 2);
    assert_eq!(res.playlists.items.into_iter().flatten().count(), 1);
}

#[test]
fn test_artist_genres_default_to_empty() {
    let artist: Artist = serde_json::from_str(r#"{ "id": "a1", "name": "Joe" }"#).unwrap();
    assert!(artist.genres.is_empty());
}

#[test]
fn test_label_serializes_as_plain_string() {
    let label = Label::new("pop");
    assert_eq!(serde_json::to_string(&label).unwrap(), "\"pop\"");
    assert_eq!(label.to_string(), "pop");
    assert_eq!(Label::from("pop"), label);
}

#[test]
fn test_audio_format_extension() {
    assert_eq!(AudioFormat::default(), AudioFormat::Mp3);
    assert_eq!(AudioFormat::Mp3.extension(), "mp3");
    assert_eq!(AudioFormat::Wav.extension(), "wav");
}
