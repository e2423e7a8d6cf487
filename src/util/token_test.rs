use super::*;
use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};

fn token_with_payload(payload: &str) -> String {
    format!("header.{}.sig", STANDARD.encode(payload))
}

// =============================================================
// decode_username
// =============================================================

#[test]
fn decode_username_reads_padded_standard_payload() {
    assert_eq!(decode_username("x.eyJ1c2VybmFtZSI6ImFsaWNlIn0=.y").unwrap(), "alice");
}

#[test]
fn decode_username_reads_unpadded_url_safe_payload() {
    let payload = URL_SAFE_NO_PAD.encode(r#"{"username":"b?b>","sub":"42"}"#);
    assert!(payload.contains('_') || payload.contains('-'));
    let token = format!("h.{payload}.s");
    assert_eq!(decode_username(&token).unwrap(), "b?b>");
}

#[test]
fn decode_username_ignores_extra_claims() {
    let token = token_with_payload(r#"{"exp":1700000000,"username":"carol","roles":["a"]}"#);
    assert_eq!(decode_username(&token).unwrap(), "carol");
}

#[test]
fn decode_username_accepts_two_segment_token() {
    let token = format!("h.{}", STANDARD.encode(r#"{"username":"dave"}"#));
    assert_eq!(decode_username(&token).unwrap(), "dave");
}

#[test]
fn decode_username_without_dot_is_missing_payload() {
    assert!(matches!(decode_username("abc"), Err(TokenError::MissingPayload)));
}

#[test]
fn decode_username_rejects_bad_base64() {
    assert!(matches!(decode_username("h.!!!not-b64!!!.s"), Err(TokenError::InvalidBase64(_))));
}

#[test]
fn decode_username_rejects_non_json_payload() {
    let token = token_with_payload("plain text");
    assert!(matches!(decode_username(&token), Err(TokenError::InvalidJson(_))));
}

#[test]
fn decode_username_rejects_payload_without_username() {
    let token = token_with_payload(r#"{"sub":"42"}"#);
    assert!(matches!(decode_username(&token), Err(TokenError::MissingUsername)));
}

#[test]
fn decode_username_rejects_array_payload() {
    let token = token_with_payload(r#"["alice"]"#);
    assert!(matches!(decode_username(&token), Err(TokenError::InvalidJson(_))));
    assert_eq!(identity_from_token(&token), "");
}

#[test]
fn decode_username_rejects_scalar_payload() {
    let token = token_with_payload(r#""alice""#);
    assert!(matches!(decode_username(&token), Err(TokenError::InvalidJson(_))));
    assert_eq!(identity_from_token(&token), "");
}

#[test]
fn decode_segment_rejects_mixed_alphabets() {
    assert!(matches!(decode_segment("ab-c+def"), Err(TokenError::InvalidBase64(_))));
    assert!(matches!(decode_segment("ab_c/def"), Err(TokenError::InvalidBase64(_))));
}

#[test]
fn decode_segment_accepts_either_alphabet_alone() {
    assert_eq!(decode_segment("-_8").unwrap(), vec![0xfb, 0xff]);
    assert_eq!(decode_segment("+/8=").unwrap(), vec![0xfb, 0xff]);
}

#[test]
fn decode_username_rejects_non_string_username() {
    let token = token_with_payload(r#"{"username":7}"#);
    assert!(matches!(decode_username(&token), Err(TokenError::InvalidJson(_))));
}

// =============================================================
// identity_from_token
// =============================================================

#[test]
fn identity_of_empty_token_is_empty() {
    assert_eq!(identity_from_token(""), "");
}

#[test]
fn identity_of_well_formed_token_is_username() {
    for name in ["alice", "Bob Smith", "ユーザー", ""] {
        let token = token_with_payload(&serde_json::json!({ "username": name }).to_string());
        assert_eq!(identity_from_token(&token), name);
    }
}

#[test]
fn identity_of_malformed_token_is_empty() {
    assert_eq!(identity_from_token("abc"), "");
    assert_eq!(identity_from_token("a.%%%.c"), "");
    assert_eq!(identity_from_token(&token_with_payload("[1,2]")), "");
}

#[test]
fn payload_segment_takes_index_one() {
    assert_eq!(payload_segment("a.b.c"), Some("b"));
    assert_eq!(payload_segment("a"), None);
    assert_eq!(payload_segment("a..c"), Some(""));
}
