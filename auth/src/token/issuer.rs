use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;

/// Immutable token configuration, supplied once at construction.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric signing secret (should be at least 32 bytes for HS256)
    pub secret: String,
    /// Issuer embedded in and required of every token
    pub issuer: String,
    /// Audience embedded in and required of every token
    pub audience: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
}

/// A freshly signed token together with its expiry instant.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies bearer tokens.
///
/// Uses HS256 (HMAC with SHA-256). Validation is pure and side-effect-free
/// so it can run on every authenticated request without any store access;
/// looking up the current account is a separate, explicit step.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    expiration_minutes: i64,
    validation: Validation,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// The validation rules pin the configured issuer and audience and use
    /// zero clock-skew tolerance.
    pub fn new(config: TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer,
            audience: config.audience,
            expiration_minutes: config.expiration_minutes,
            validation,
        }
    }

    /// Issue a signed token for an account.
    ///
    /// Embeds subject, email, display name, role and a fresh unique token
    /// identifier; expiry is `now + expiration_minutes`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(
        &self,
        subject: &str,
        email: &str,
        display_name: &str,
        role: &str,
    ) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.expiration_minutes);

        let claims = Claims {
            sub: subject.to_string(),
            email: email.to_string(),
            name: display_name.to_string(),
            role: role.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Decode and fully validate a token, returning its claims.
    ///
    /// Checks signature, issuer, audience and expiry (zero leeway).
    ///
    /// # Errors
    /// * `Expired` - Token lifetime has elapsed
    /// * `InvalidIssuer` / `InvalidAudience` - Configured values not matched
    /// * `DecodingFailed` - Structurally invalid token or bad signature
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidIssuer => TokenError::InvalidIssuer,
                    ErrorKind::InvalidAudience => TokenError::InvalidAudience,
                    _ => TokenError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Check whether a token is currently valid.
    ///
    /// Any failure (malformed input, bad signature, wrong issuer or
    /// audience, expired) collapses to `false`; this never errors.
    pub fn validate(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TokenConfig {
        TokenConfig {
            secret: "test_secret_key_at_least_32_bytes!".to_string(),
            issuer: "directory".to_string(),
            audience: "directory-clients".to_string(),
            expiration_minutes: 60,
        }
    }

    #[test]
    fn test_issue_and_validate() {
        let issuer = TokenIssuer::new(test_config());

        let issued = issuer
            .issue("user123", "teste@teste.com", "Maria", "Patient")
            .expect("Failed to issue token");

        assert!(!issued.token.is_empty());
        assert!(issuer.validate(&issued.token));

        let claims = issuer.decode(&issued.token).expect("Failed to decode");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "teste@teste.com");
        assert_eq!(claims.name, "Maria");
        assert_eq!(claims.role, "Patient");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_jti_is_fresh_per_issuance() {
        let issuer = TokenIssuer::new(test_config());

        let first = issuer
            .issue("user123", "teste@teste.com", "Maria", "Patient")
            .expect("Failed to issue token");
        let second = issuer
            .issue("user123", "teste@teste.com", "Maria", "Patient")
            .expect("Failed to issue token");

        let first_claims = issuer.decode(&first.token).expect("Failed to decode");
        let second_claims = issuer.decode(&second.token).expect("Failed to decode");
        assert_ne!(first_claims.jti, second_claims.jti);
    }

    #[test]
    fn test_validate_garbage_is_false() {
        let issuer = TokenIssuer::new(test_config());

        assert!(!issuer.validate("not.a.token"));
        assert!(!issuer.validate(""));
    }

    #[test]
    fn test_validate_wrong_secret_is_false() {
        let issuer = TokenIssuer::new(test_config());
        let other = TokenIssuer::new(TokenConfig {
            secret: "another_secret_key_32_bytes_long!!".to_string(),
            ..test_config()
        });

        let issued = issuer
            .issue("user123", "teste@teste.com", "Maria", "Patient")
            .expect("Failed to issue token");

        assert!(!other.validate(&issued.token));
    }

    #[test]
    fn test_validate_wrong_issuer_or_audience_is_false() {
        let issuer = TokenIssuer::new(test_config());
        let wrong_issuer = TokenIssuer::new(TokenConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });
        let wrong_audience = TokenIssuer::new(TokenConfig {
            audience: "other-clients".to_string(),
            ..test_config()
        });

        let issued = issuer
            .issue("user123", "teste@teste.com", "Maria", "Patient")
            .expect("Failed to issue token");

        assert!(!wrong_issuer.validate(&issued.token));
        assert!(!wrong_audience.validate(&issued.token));

        assert!(matches!(
            wrong_issuer.decode(&issued.token),
            Err(TokenError::InvalidIssuer)
        ));
        assert!(matches!(
            wrong_audience.decode(&issued.token),
            Err(TokenError::InvalidAudience)
        ));
    }

    #[test]
    fn test_expired_token_is_false() {
        let expired = TokenIssuer::new(TokenConfig {
            expiration_minutes: -5,
            ..test_config()
        });

        let issued = expired
            .issue("user123", "teste@teste.com", "Maria", "Patient")
            .expect("Failed to issue token");

        assert!(!expired.validate(&issued.token));
        assert!(matches!(
            expired.decode(&issued.token),
            Err(TokenError::Expired)
        ));
    }
}
