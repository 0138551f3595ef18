use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{ConfigError, SecurityConfig};

/// Issuer label stamped into every token and required at verification.
pub const TOKEN_ISSUER: &str = "todo-api";

/// Fixed-shape JWT claims. The wire payload is exactly these five fields;
/// anything else fails verification rather than being ignored downstream.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the owning account id, as a UUID string.
    #[serde(default)]
    pub sub: String,
    /// Denormalized contact address, for client convenience only.
    #[serde(default)]
    pub email: String,
    /// Expiry, epoch seconds.
    pub exp: i64,
    /// Issued-at, epoch seconds.
    pub iat: i64,
    /// Issuer label.
    #[serde(default)]
    pub iss: String,
}

impl Claims {
    pub fn new(subject: Uuid, email: &str, expiry: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.to_string(),
            email: email.to_string(),
            exp: (now + expiry).timestamp(),
            iat: now.timestamp(),
            iss: TOKEN_ISSUER.to_string(),
        }
    }

    /// The authenticated identity carried by this token. A token without a
    /// parseable subject never yields an identity, signature or not.
    pub fn subject_id(&self) -> Result<Uuid, TokenError> {
        if self.sub.trim().is_empty() {
            return Err(TokenError::MissingSubject);
        }
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::MissingSubject)
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature checked out but the expiry has elapsed.
    #[error("Token has expired")]
    Expired,

    /// Bad signature, malformed structure, wrong algorithm or wrong issuer.
    #[error("Invalid token")]
    Invalid,

    /// Structurally valid token without a usable subject claim.
    #[error("Token has no usable subject claim")]
    MissingSubject,

    #[error("Token generation failed: {0}")]
    Signing(String),
}

/// Issues and verifies signed bearer tokens.
///
/// Built once from validated [`SecurityConfig`] and shared by reference via
/// server state; nothing here re-reads configuration per call. Tokens are
/// self-contained: the server keeps no session state and has no revocation
/// list, so a token lapses only by expiry.
#[derive(Clone)]
pub struct TokenService {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry: Duration,
}

impl TokenService {
    pub fn new(security: &SecurityConfig) -> Result<Self, ConfigError> {
        let algorithm = security.algorithm()?;

        let mut validation = Validation::new(algorithm);
        // Expiry must flip exactly at the claimed timestamp
        validation.leeway = 0;
        validation.set_issuer(&[TOKEN_ISSUER]);

        Ok(Self {
            header: Header::new(algorithm),
            encoding_key: EncodingKey::from_secret(security.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(security.jwt_secret.as_bytes()),
            validation,
            expiry: security.token_expiry(),
        })
    }

    /// Issue a signed token for the given account.
    pub fn issue(&self, subject: Uuid, email: &str) -> Result<String, TokenError> {
        let claims = Claims::new(subject, email, self.expiry);
        encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// Expiry failures are reported separately from every other kind of
    /// rejection; callers use the distinction for logging only.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        // Refuse identity-less tokens even when the signature is valid
        data.claims.subject_id()?;

        Ok(data.claims)
    }

    /// Configured token lifetime in seconds, for response metadata.
    pub fn expiry_seconds(&self) -> i64 {
        self.expiry.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecurityConfig;

    fn security(secret: &str) -> SecurityConfig {
        SecurityConfig {
            jwt_secret: secret.to_string(),
            jwt_algorithm: "HS256".to_string(),
            jwt_expiry_days: 7,
        }
    }

    fn service() -> TokenService {
        TokenService::new(&security("0123456789abcdef0123456789abcdef")).unwrap()
    }

    fn encode_raw(service: &TokenService, claims: &impl serde::Serialize) -> String {
        encode(&service.header, claims, &service.encoding_key).unwrap()
    }

    #[test]
    fn issue_then_verify_preserves_subject() {
        let service = service();
        let subject = Uuid::new_v4();

        let token = service.issue(subject, "user@example.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.subject_id().unwrap(), subject);
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.iss, TOKEN_ISSUER);
    }

    #[test]
    fn token_is_three_part_compact_form() {
        let service = service();
        let token = service.issue(Uuid::new_v4(), "user@example.com").unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn payload_claims_are_exactly_the_wire_contract() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        use base64::Engine;

        let service = service();
        let token = service.issue(Uuid::new_v4(), "user@example.com").unwrap();

        let payload = token.split('.').nth(1).unwrap();
        let decoded = URL_SAFE_NO_PAD.decode(payload).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&decoded).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["email", "exp", "iat", "iss", "sub"]);
        assert_eq!(value["iss"], "todo-api");
    }

    #[test]
    fn expired_token_reports_expiry() {
        let service = service();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "user@example.com".to_string(),
            exp: (Utc::now() - Duration::seconds(1)).timestamp(),
            iat: (Utc::now() - Duration::days(1)).timestamp(),
            iss: TOKEN_ISSUER.to_string(),
        };

        let token = encode_raw(&service, &claims);
        assert!(matches!(service.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn token_near_expiry_still_verifies() {
        let service = service();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "user@example.com".to_string(),
            exp: (Utc::now() + Duration::seconds(2)).timestamp(),
            iat: Utc::now().timestamp(),
            iss: TOKEN_ISSUER.to_string(),
        };

        let token = encode_raw(&service, &claims);
        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn wrong_secret_is_invalid_not_expired() {
        let issuing = service();
        let verifying =
            TokenService::new(&security("ffffffffffffffffffffffffffffffff")).unwrap();

        let token = issuing.issue(Uuid::new_v4(), "user@example.com").unwrap();
        assert!(matches!(verifying.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn tampered_token_is_invalid() {
        let service = service();
        let mut token = service.issue(Uuid::new_v4(), "user@example.com").unwrap();
        token.push('x');
        assert!(matches!(service.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn wrong_issuer_is_invalid() {
        let service = service();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "user@example.com".to_string(),
            exp: (Utc::now() + Duration::days(1)).timestamp(),
            iat: Utc::now().timestamp(),
            iss: "someone-else".to_string(),
        };

        let token = encode_raw(&service, &claims);
        assert!(matches!(service.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn missing_subject_claim_is_rejected() {
        let service = service();
        let claims = serde_json::json!({
            "email": "user@example.com",
            "exp": (Utc::now() + Duration::days(1)).timestamp(),
            "iat": Utc::now().timestamp(),
            "iss": TOKEN_ISSUER,
        });

        let token = encode_raw(&service, &claims);
        assert!(matches!(
            service.verify(&token),
            Err(TokenError::MissingSubject)
        ));
    }

    #[test]
    fn empty_or_garbage_subject_is_rejected() {
        let service = service();
        for sub in ["", "   ", "not-a-uuid"] {
            let claims = Claims {
                sub: sub.to_string(),
                email: "user@example.com".to_string(),
                exp: (Utc::now() + Duration::days(1)).timestamp(),
                iat: Utc::now().timestamp(),
                iss: TOKEN_ISSUER.to_string(),
            };
            let token = encode_raw(&service, &claims);
            assert!(
                matches!(service.verify(&token), Err(TokenError::MissingSubject)),
                "subject {sub:?} should be rejected"
            );
        }
    }

    #[test]
    fn expiry_seconds_matches_configured_days() {
        assert_eq!(service().expiry_seconds(), 7 * 24 * 60 * 60);
    }
}
