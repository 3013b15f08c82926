use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Generate an opaque refresh token.
///
/// 32 bytes from the operating system CSPRNG, base64-encoded. The token is
/// handed to the client as-is; this layer neither persists nor validates
/// refresh tokens.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}
