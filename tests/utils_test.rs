use spotex::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA256 digest, base64 without padding
    assert_eq!(challenge.len(), 43);

    // Should be deterministic
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // URL-safe alphabet only
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_sanitize_filename_strips_illegal_characters() {
    assert_eq!(sanitize_filename("AC/DC: Back?"), "ACDC Back");
    assert_eq!(sanitize_filename(r#"a\b/c*d?e:f"g<h>i|j"#), "abcdefghij");

    // Legal names are untouched, including unicode and dots
    assert_eq!(sanitize_filename("Hey"), "Hey");
    assert_eq!(sanitize_filename("Mr. Brightside"), "Mr. Brightside");
    assert_eq!(sanitize_filename("Björk – Jóga"), "Björk – Jóga");
}

#[test]
fn test_sanitize_filename_never_returns_empty() {
    assert_eq!(sanitize_filename("???"), "track");
    assert_eq!(sanitize_filename("/ :"), "track");
}

#[test]
fn test_sanitize_filename_strips_control_characters() {
    assert_eq!(sanitize_filename("Hey\0Joe\n\t"), "HeyJoe");
    assert_eq!(sanitize_filename("\u{7f}\u{1b}"), "track");
}

#[test]
fn test_sanitize_filename_bounds_length() {
    let long = "Symphonie ".repeat(30);
    let stem = sanitize_filename(&long);
    assert!(stem.len() <= MAX_FILENAME_STEM_BYTES);
    assert!(long.starts_with(&stem));

    // Multi-byte characters are never split
    let wide = "é".repeat(150);
    let stem = sanitize_filename(&wide);
    assert_eq!(stem.len(), MAX_FILENAME_STEM_BYTES);
    assert!(stem.chars().all(|c| c == 'é'));

    let mixed = format!("a{}", "日".repeat(100));
    let stem = sanitize_filename(&mixed);
    assert!(stem.len() <= MAX_FILENAME_STEM_BYTES);
    assert_eq!(stem.len(), 1 + 66 * 3);
}

#[test]
fn test_join_genres() {
    let genres = vec!["dance pop".to_string(), "pop".to_string()];
    assert_eq!(join_genres(&genres), "dance pop pop");
    assert_eq!(join_genres(&[]), "");
}

#[test]
fn test_combined_line() {
    assert_eq!(combined_line("Hey", "Joe", "rock"), "Hey Joe rock");

    // No trailing space for artists without genres
    assert_eq!(combined_line("Hey", "Joe", ""), "Hey Joe");
}

#[test]
fn test_parse_playlist_id_accepts_known_forms() {
    let id = "37i9dQZF1DWZQaaqNMbbXa";

    assert_eq!(parse_playlist_id(id).unwrap(), id);
    assert_eq!(
        parse_playlist_id("spotify:playlist:37i9dQZF1DWZQaaqNMbbXa").unwrap(),
        id
    );
    assert_eq!(
        parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DWZQaaqNMbbXa?si=abc123")
            .unwrap(),
        id
    );
    assert_eq!(parse_playlist_id("  37i9dQZF1DWZQaaqNMbbXa  ").unwrap(), id);
}

#[test]
fn test_parse_playlist_id_rejects_garbage() {
    let result = parse_playlist_id("");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_playlist_id("spotify:playlist:");
    assert!(result.unwrap_err().contains("invalid playlist id"));

    let result = parse_playlist_id("not an id");
    assert!(result.unwrap_err().contains("invalid playlist id"));
}
