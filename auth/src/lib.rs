//! Credential utilities library
//!
//! Provides reusable credential infrastructure for the directory services:
//! - Password hashing (Argon2id)
//! - Signed bearer token issuance and validation
//! - Opaque refresh token generation
//!
//! Each service defines its own authentication flows and adapts these
//! implementations. This keeps store access and orchestration out of the
//! cryptographic layer.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{TokenConfig, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(TokenConfig {
//!     secret: "secret_key_at_least_32_bytes_long!".into(),
//!     issuer: "directory".into(),
//!     audience: "directory-clients".into(),
//!     expiration_minutes: 60,
//! });
//! let issued = issuer
//!     .issue("user123", "alice@example.com", "Alice", "Patient")
//!     .unwrap();
//! assert!(issuer.validate(&issued.token));
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::generate_refresh_token;
pub use token::Claims;
pub use token::IssuedToken;
pub use token::TokenConfig;
pub use token::TokenError;
pub use token::TokenIssuer;
