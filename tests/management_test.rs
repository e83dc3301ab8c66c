use chrono::Utc;
use spotex::{management::TokenManager, types::Token};

fn token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: "user-library-read".to_string(),
        expires_in,
        obtained_at,
    }
}

#[test]
fn test_fresh_token_is_not_expired() {
    let now = Utc::now().timestamp() as u64;
    let manager = TokenManager::new(token(now, 3600));

    assert!(!manager.is_expired());
    assert_eq!(manager.current_token().access_token, "access");
}

#[test]
fn test_old_token_is_expired() {
    let manager = TokenManager::new(token(0, 3600));
    assert!(manager.is_expired());
}

#[test]
fn test_token_inside_margin_is_expired() {
    // Four minutes of validity left is treated as expired
    let now = Utc::now().timestamp() as u64;
    let manager = TokenManager::new(token(now, 200));
    assert!(manager.is_expired());
}

#[test]
fn test_token_roundtrips_through_json() {
    let original = token(1_700_000_000, 3600);
    let json = serde_json::to_string(&original).unwrap();
    let parsed: Token = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.refresh_token, "refresh");
    assert_eq!(parsed.obtained_at, 1_700_000_000);
}
