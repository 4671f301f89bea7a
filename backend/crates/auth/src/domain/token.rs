//! Token Codec
//!
//! Tokens are compact HS256 JWS strings:
//! `base64url(header).base64url(claims).base64url(hmac_sha256(secret, header.claims))`.
//!
//! The signature is checked before the header or the claims are decoded,
//! so nothing from an unauthenticated payload is ever interpreted.

use std::time::Duration;

use chrono::Utc;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{platform::Platform, user_name::UserName};
use crate::error::{AuthError, AuthResult};

const ALGORITHM: &str = "HS256";
const TOKEN_TYPE: &str = "JWT";

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// Verified token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub platform: Platform,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expires-at, unix seconds (exclusive)
    pub exp: i64,
}

impl Claims {
    /// `true` once `now` reaches `exp`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Issue a token valid for `ttl` from now
pub fn issue(
    user_name: &UserName,
    platform: Platform,
    ttl: Duration,
    secret: &[u8],
) -> AuthResult<String> {
    issue_at(user_name, platform, ttl, secret, Utc::now().timestamp())
}

/// Issue a token as if the clock read `now` (unix seconds)
pub fn issue_at(
    user_name: &UserName,
    platform: Platform,
    ttl: Duration,
    secret: &[u8],
    now: i64,
) -> AuthResult<String> {
    let exp = i64::try_from(ttl.as_secs())
        .ok()
        .and_then(|ttl_secs| now.checked_add(ttl_secs))
        .ok_or_else(|| AuthError::Internal(format!("Token TTL out of range: {ttl:?}")))?;

    let claims = Claims {
        username: user_name.as_str().to_string(),
        platform,
        iat: now,
        exp,
    };
    encode(&claims, secret)
}

/// Validate a token against the current clock
pub fn validate(token: &str, secret: &[u8]) -> AuthResult<Claims> {
    validate_at(token, secret, Utc::now().timestamp())
}

/// Validate a token as if the clock read `now` (unix seconds)
pub fn validate_at(token: &str, secret: &[u8], now: i64) -> AuthResult<Claims> {
    let mut parts = token.split('.');
    let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(AuthError::Malformed);
    };

    let signature = from_base64url(signature_b64).map_err(|_| AuthError::Malformed)?;
    let signing_input = format!("{header_b64}.{claims_b64}");
    if !verify_hmac_sha256(secret, signing_input.as_bytes(), &signature)? {
        return Err(AuthError::BadSignature);
    }

    let header: Header = decode_segment(header_b64)?;
    if header.alg != ALGORITHM {
        return Err(AuthError::Malformed);
    }

    let claims: Claims = decode_segment(claims_b64)?;
    if claims.is_expired_at(now) {
        return Err(AuthError::Expired);
    }

    Ok(claims)
}

fn encode(claims: &Claims, secret: &[u8]) -> AuthResult<String> {
    let header = Header {
        alg: ALGORITHM.to_string(),
        typ: TOKEN_TYPE.to_string(),
    };
    let signing_input = format!("{}.{}", encode_segment(&header)?, encode_segment(claims)?);
    let signature = hmac_sha256(secret, signing_input.as_bytes())?;
    Ok(format!("{signing_input}.{}", to_base64url(&signature)))
}

fn encode_segment<T: Serialize>(value: &T) -> AuthResult<String> {
    let json = serde_json::to_vec(value)
        .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))?;
    Ok(to_base64url(&json))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> AuthResult<T> {
    let bytes = from_base64url(segment).map_err(|_| AuthError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-signing-secret";
    const NOW: i64 = 1_700_000_000;
    const HOUR: Duration = Duration::from_secs(3600);

    fn alice() -> UserName {
        UserName::new("alice_01").unwrap()
    }

    fn sign_raw(header: &str, claims: &str) -> String {
        let input = format!("{}.{}", to_base64url(header.as_bytes()), to_base64url(claims.as_bytes()));
        let sig = hmac_sha256(SECRET, input.as_bytes()).unwrap();
        format!("{input}.{}", to_base64url(&sig))
    }

    #[test]
    fn test_issue_then_validate_returns_inputs() {
        for platform in [Platform::Test, Platform::Steam] {
            let token = issue_at(&alice(), platform, HOUR, SECRET, NOW).unwrap();
            let claims = validate_at(&token, SECRET, NOW).unwrap();
            assert_eq!(claims.username, "alice_01");
            assert_eq!(claims.platform, platform);
            assert_eq!(claims.iat, NOW);
            assert_eq!(claims.exp, NOW + 3600);
        }
    }

    #[test]
    fn test_validate_against_wall_clock() {
        let token = issue(&alice(), Platform::Test, HOUR, SECRET).unwrap();
        let claims = validate(&token, SECRET).unwrap();
        assert_eq!(claims.username, "alice_01");
        assert_eq!(claims.platform, Platform::Test);
    }

    #[test]
    fn test_issue_is_deterministic_for_same_instant() {
        let a = issue_at(&alice(), Platform::Steam, HOUR, SECRET, NOW).unwrap();
        let b = issue_at(&alice(), Platform::Steam, HOUR, SECRET, NOW).unwrap();
        let c = issue_at(&alice(), Platform::Steam, HOUR, SECRET, NOW + 1).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_wrong_secret_is_bad_signature() {
        let token = issue_at(&alice(), Platform::Test, HOUR, SECRET, NOW).unwrap();
        let others: [&[u8]; 3] = [b"another-secret", b"", b"test-signing-secreT"];
        for other in others {
            assert!(matches!(
                validate_at(&token, other, NOW),
                Err(AuthError::BadSignature)
            ));
        }
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let token = issue(&alice(), Platform::Test, Duration::ZERO, SECRET).unwrap();
        assert!(matches!(validate(&token, SECRET), Err(AuthError::Expired)));

        let token = issue_at(&alice(), Platform::Test, Duration::ZERO, SECRET, NOW).unwrap();
        assert!(matches!(
            validate_at(&token, SECRET, NOW),
            Err(AuthError::Expired)
        ));
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let token = issue_at(&alice(), Platform::Steam, HOUR, SECRET, NOW).unwrap();
        assert!(validate_at(&token, SECRET, NOW + 3599).is_ok());
        assert!(matches!(
            validate_at(&token, SECRET, NOW + 3600),
            Err(AuthError::Expired)
        ));
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let token = issue_at(&alice(), Platform::Test, HOUR, SECRET, NOW).unwrap();
        assert!(matches!(
            validate_at(&token, b"other", NOW + 10 * 3600),
            Err(AuthError::BadSignature)
        ));
    }

    #[test]
    fn test_tampered_claims_are_bad_signature() {
        let token = issue_at(&alice(), Platform::Test, HOUR, SECRET, NOW).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let forged_claims = to_base64url(
            br#"{"username":"mallory_1","platform":"TEST","iat":1700000000,"exp":1700003600}"#,
        );
        let forged = format!("{}.{}.{}", parts[0], forged_claims, parts[2]);
        assert!(matches!(
            validate_at(&forged, SECRET, NOW),
            Err(AuthError::BadSignature)
        ));
    }

    #[test]
    fn test_malformed_tokens() {
        let token = issue_at(&alice(), Platform::Test, HOUR, SECRET, NOW).unwrap();
        let cases = [
            String::new(),
            "abc".to_string(),
            "a.b".to_string(),
            format!("{token}.extra"),
            token.replace('.', "!"),
            format!("{}.!!!", token.rsplit_once('.').unwrap().0),
        ];
        for case in cases {
            assert!(
                matches!(validate_at(&case, SECRET, NOW), Err(AuthError::Malformed)),
                "expected Malformed for {case:?}"
            );
        }
    }

    #[test]
    fn test_signed_garbage_payload_is_malformed() {
        let token = sign_raw(r#"{"alg":"HS256","typ":"JWT"}"#, "not json");
        assert!(matches!(
            validate_at(&token, SECRET, NOW),
            Err(AuthError::Malformed)
        ));

        let token = sign_raw(
            r#"{"alg":"HS256","typ":"JWT"}"#,
            r#"{"username":"alice_01","platform":"XBOX","iat":1,"exp":9999999999}"#,
        );
        assert!(matches!(
            validate_at(&token, SECRET, NOW),
            Err(AuthError::Malformed)
        ));
    }

    #[test]
    fn test_other_algorithm_is_malformed() {
        let token = sign_raw(
            r#"{"alg":"none","typ":"JWT"}"#,
            r#"{"username":"alice_01","platform":"TEST","iat":1,"exp":9999999999}"#,
        );
        assert!(matches!(
            validate_at(&token, SECRET, NOW),
            Err(AuthError::Malformed)
        ));
    }

    #[test]
    fn test_ttl_overflow_is_internal() {
        let result = issue_at(&alice(), Platform::Test, Duration::MAX, SECRET, NOW);
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }
}
