use serde::Deserialize;
use serde::Serialize;

/// Claims embedded in every issued bearer token.
///
/// One fixed shape rather than a generic map: the directory issues exactly
/// one kind of token, and a concrete struct keeps the contract visible at
/// the type level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account identifier)
    pub sub: String,

    /// Account email address
    pub email: String,

    /// Display name
    pub name: String,

    /// Account role ("Administrator", "Doctor" or "Patient")
    pub role: String,

    /// Unique token identifier, fresh per issuance (anti-replay marker;
    /// not tracked server-side)
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
