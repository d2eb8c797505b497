// ============================================================================
// SESSION STORE - Persistencia del token de acceso
// ============================================================================
// Una sola clave, un solo valor. Sin validación: eso es trabajo del
// auth_service y del ciclo de vida de sesión.
// ============================================================================

use crate::utils::constants::STORAGE_KEY_ACCESS_TOKEN;
use crate::utils::storage::{get_string, remove_key, set_string};

/// Token persistido de una sesión anterior, si existe
pub fn load_token() -> Option<String> {
    get_string(STORAGE_KEY_ACCESS_TOKEN).filter(|t| !t.is_empty())
}

/// Persiste el token, sobreescribiendo cualquier valor anterior
pub fn save_token(token: &str) {
    if let Err(e) = set_string(STORAGE_KEY_ACCESS_TOKEN, token) {
        log::error!("❌ Error guardando token: {}", e);
    }
}

/// Elimina el token persistido
pub fn clear_token() {
    if let Err(e) = remove_key(STORAGE_KEY_ACCESS_TOKEN) {
        log::error!("❌ Error eliminando token: {}", e);
    }
}
