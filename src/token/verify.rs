//! HMAC token verification.
//! Used by: strategy::jwt.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::error::{Error, Result};
use crate::token::claims::{Claims, EXP};
use crate::token::{ensure_hmac, ensure_secret};

/// Verifies signature and expiry, returning the embedded claims.
///
/// The algorithm is pinned: a token whose header names any other algorithm is
/// rejected as a signature failure. Expiry uses no leeway and requires the
/// current time to be strictly before `exp`.
pub fn decode(token: &str, secret: &str, algorithm: Algorithm) -> Result<Claims> {
    ensure_secret(secret)?;
    ensure_hmac(algorithm)?;

    let mut validation = Validation::new(algorithm);
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.set_required_spec_claims(&[EXP]);

    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    let claims = data.claims;

    let exp = claims
        .exp()
        .ok_or_else(|| Error::ClaimMissing(EXP.into()))?;
    if Utc::now().timestamp() >= exp {
        return Err(Error::TokenExpired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::claims::USER_ID;
    use crate::token::sign::{encode, encode_at};
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn issue(user_id: &str) -> Result<String> {
        encode(&Claims::for_user(user_id), 300, SECRET, Algorithm::HS256)
    }

    fn flip_signature_char(token: &str, index: usize) -> String {
        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
        format!("{head}.{}", chars.into_iter().collect::<String>())
    }

    #[test]
    fn valid_token_verifies() -> Result<()> {
        let mut claims = Claims::for_user("agent-1");
        claims.insert("scope", "read");
        let token = encode(&claims, 300, SECRET, Algorithm::HS256)?;
        let decoded = decode(&token, SECRET, Algorithm::HS256)?;
        for (key, value) in claims.iter() {
            assert_eq!(decoded.get(key), Some(value));
        }
        assert!(decoded.exp().is_some());
        Ok(())
    }

    #[test]
    fn scenario_issue_for_user_seven() -> Result<()> {
        let before = Utc::now().timestamp();
        let token = encode(&Claims::for_user("7"), 3600, "s", Algorithm::HS256)?;
        assert_eq!(token.matches('.').count(), 2);
        let claims = decode(&token, "s", Algorithm::HS256)?;
        assert_eq!(claims.user_id().as_deref(), Some("7"));
        let exp = claims.exp().unwrap();
        assert!(exp >= before + 3600);
        assert!(exp <= Utc::now().timestamp() + 3600);
        Ok(())
    }

    #[test]
    fn expired_token_rejected() -> Result<()> {
        let issued_at = Utc::now() - Duration::seconds(120);
        let token = encode_at(&Claims::for_user("agent-1"), 60, SECRET, Algorithm::HS256, issued_at)?;
        let result = decode(&token, SECRET, Algorithm::HS256);
        assert!(matches!(result, Err(Error::TokenExpired)));
        Ok(())
    }

    #[test]
    fn token_expiring_now_rejected() -> Result<()> {
        let issued_at = Utc::now() - Duration::seconds(60);
        let token = encode_at(&Claims::for_user("agent-1"), 60, SECRET, Algorithm::HS256, issued_at)?;
        let result = decode(&token, SECRET, Algorithm::HS256);
        assert!(matches!(result, Err(Error::TokenExpired)));
        Ok(())
    }

    #[test]
    fn one_second_token_expires_after_two_seconds() -> Result<()> {
        let token = encode(&Claims::for_user("agent-1"), 1, SECRET, Algorithm::HS256)?;
        std::thread::sleep(std::time::Duration::from_secs(2));
        let result = decode(&token, SECRET, Algorithm::HS256);
        assert!(matches!(result, Err(Error::TokenExpired)));
        Ok(())
    }

    #[test]
    fn tampered_signature_rejected() -> Result<()> {
        let token = issue("agent-1")?;
        let signature_len = token.rsplit('.').next().unwrap().len();
        for index in [0, signature_len / 2, signature_len - 1] {
            let tampered = flip_signature_char(&token, index);
            let result = decode(&tampered, SECRET, Algorithm::HS256);
            assert!(matches!(result, Err(Error::SignatureInvalid)), "index {index}");
        }
        Ok(())
    }

    #[test]
    fn wrong_secret_rejected() -> Result<()> {
        let token = issue("agent-1")?;
        let result = decode(&token, "other-secret", Algorithm::HS256);
        assert!(matches!(result, Err(Error::SignatureInvalid)));
        Ok(())
    }

    #[test]
    fn algorithm_mismatch_rejected() -> Result<()> {
        let token = encode(&Claims::for_user("agent-1"), 300, SECRET, Algorithm::HS512)?;
        let result = decode(&token, SECRET, Algorithm::HS256);
        assert!(matches!(result, Err(Error::SignatureInvalid)));
        Ok(())
    }

    #[test]
    fn missing_exp_rejected() -> Result<()> {
        let mut claims = Claims::new();
        claims.insert(USER_ID, "agent-1");
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .map_err(|e| Error::Signing(e.to_string()))?;
        let result = decode(&token, SECRET, Algorithm::HS256);
        assert!(matches!(result, Err(Error::ClaimMissing(claim)) if claim == "exp"));
        Ok(())
    }

    #[test]
    fn garbage_rejected_as_malformed() {
        for token in ["", "no-dot-here", "a.b", "a.b.c", "!!.??.**"] {
            let result = decode(token, SECRET, Algorithm::HS256);
            assert!(matches!(result, Err(Error::MalformedToken(_))), "{token:?}");
        }
    }

    #[test]
    fn empty_secret_is_a_config_error() -> Result<()> {
        let token = issue("agent-1")?;
        assert!(matches!(decode(&token, "", Algorithm::HS256), Err(Error::Config(_))));
        Ok(())
    }
}
