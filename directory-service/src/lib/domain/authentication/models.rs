use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::models::AccountRole;

/// Credential bundle returned on successful login.
///
/// The refresh token is opaque and currently has no redemption path; it is
/// issued for clients that want to hold one, nothing more.
#[derive(Debug, Clone)]
pub struct Credential {
    pub token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub display_name: String,
    pub role: AccountRole,
}
