// Utility helpers

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::{
    constants::{GAME_KEY_BYTES, GAME_KEY_LEN},
    error::{AppError, Result},
};

/// Mint an opaque, URL-safe game key.
pub fn new_game_key() -> String {
    URL_SAFE_NO_PAD.encode(rand::random::<[u8; GAME_KEY_BYTES]>())
}

/// Cheap validity pre-filter for client-supplied game keys, run before
/// any store lookup. Keys are opaque to callers; a well-formed one is
/// exactly `GAME_KEY_LEN` characters of url-safe base64.
pub fn validate_game_key(key: &str) -> Result<()> {
    if key.len() != GAME_KEY_LEN || URL_SAFE_NO_PAD.decode(key).is_err() {
        return Err(AppError::NotFound("Invalid game key".to_string()));
    }
    Ok(())
}
