//! JSON Web Token (JWT) utilities for encoding and decoding tokens.
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use serde::{de::DeserializeOwned, Serialize};

#[inline]
pub fn encode_jwt<T: Serialize>(
    claims: &T,
    secret: &[u8],
    algorithm: Option<Algorithm>,
) -> Result<String, JwtError> {
    let header = Header::new(algorithm.unwrap_or(Algorithm::HS256));
    encode(&header, claims, &EncodingKey::from_secret(secret))
}

#[inline]
pub fn decode_jwt<T: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    validation: Option<Validation>,
) -> Result<TokenData<T>, JwtError> {
    let validation = validation.unwrap_or_default();
    decode::<T>(token, &DecodingKey::from_secret(secret), &validation)
}

/// HS256 validation pinned to one issuer, without audience checks.
pub fn issuer_validation(issuer: &str) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.set_issuer(&[issuer]);
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        iss: String,
        exp: i64,
    }

    fn claims(iss: &str) -> TestClaims {
        TestClaims {
            sub: "u1".into(),
            iss: iss.into(),
            exp: chrono::Utc::now().timestamp() + 60,
        }
    }

    #[test]
    fn round_trips_with_matching_secret_and_issuer() {
        let token = encode_jwt(&claims("edu"), b"secret", None).unwrap();
        let data =
            decode_jwt::<TestClaims>(&token, b"secret", Some(issuer_validation("edu"))).unwrap();
        assert_eq!(data.claims.sub, "u1");
    }

    #[test]
    fn rejects_wrong_secret_or_issuer() {
        let token = encode_jwt(&claims("edu"), b"secret", None).unwrap();
        assert!(decode_jwt::<TestClaims>(&token, b"other", Some(issuer_validation("edu"))).is_err());
        assert!(
            decode_jwt::<TestClaims>(&token, b"secret", Some(issuer_validation("other"))).is_err()
        );
    }
}
