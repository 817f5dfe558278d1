use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde_json::Value;

use crate::{Result, SessionError};

/// Decodes the payload (claims) section of a JWT without verifying it.
///
/// The wallet only displays claims; verification is the resource servers'
/// concern.
pub fn decode_jwt_payload(token: &str) -> Result<Value> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(SessionError::MalformedToken(
            "expected three dot-separated sections".to_string(),
        ));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| SessionError::MalformedToken(e.to_string()))?;
    let claims = serde_json::from_slice(&bytes)?;
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_jwt(claims: &Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
        format!("{header}.{payload}.c2lnbmF0dXJl")
    }

    #[test]
    fn test_decode_payload() {
        let claims = json!({
            "sub": "email|68a1b2c3",
            "email": "player@example.com",
            "nickname": "player1",
            "aud": "platform_api"
        });
        let decoded = decode_jwt_payload(&make_jwt(&claims)).unwrap();
        assert_eq!(decoded["sub"], "email|68a1b2c3");
        assert_eq!(decoded["email"], "player@example.com");
    }

    #[test]
    fn test_decode_rejects_wrong_section_count() {
        assert!(matches!(
            decode_jwt_payload("onlyonepart"),
            Err(SessionError::MalformedToken(_))
        ));
        assert!(matches!(
            decode_jwt_payload("a.b.c.d"),
            Err(SessionError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(matches!(
            decode_jwt_payload("aaa.!!!.ccc"),
            Err(SessionError::MalformedToken(_))
        ));
    }
}
