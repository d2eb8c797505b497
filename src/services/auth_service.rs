// ============================================================================
// AUTH SERVICE - Login y validación de identidad
// ============================================================================
// Solo comunicación HTTP. No toca localStorage: la persistencia del token
// pertenece a session_store y las decisiones de estado a use_session.
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{TokenResponse, User};
use crate::services::error::ApiError;

/// Intercambia usuario/contraseña por un token de acceso.
///
/// El backend espera un formulario `application/x-www-form-urlencoded`,
/// no JSON. En caso de rechazo, el cuerpo de la respuesta es el mensaje
/// que se muestra en el formulario de login.
pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
    let url = format!("{}/auth/token", CONFIG.backend_url());
    let body = format!(
        "username={}&password={}",
        urlencoding::encode(username),
        urlencoding::encode(password)
    );

    log::info!("🔐 Iniciando sesión: {}", username);

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| ApiError::Transport(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Network error: {}", e)))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    token_from_response(status, &text)
}

/// Valida un token contra `/users/me` y devuelve la identidad del usuario.
///
/// Cualquier fallo (401, 500, cuerpo ilegible, red caída) colapsa en
/// `InvalidCredential`: la política del llamador es cerrar la sesión,
/// sin distinguir la causa.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    let url = format!("{}/users/me", CONFIG.backend_url());

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|_| ApiError::InvalidCredential)?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    user_from_response(status, &text)
}

/// Mapea la respuesta del endpoint de token a un resultado de login
pub(crate) fn token_from_response(status: u16, body: &str) -> Result<String, ApiError> {
    if !(200..300).contains(&status) {
        let message = if body.trim().is_empty() {
            "Login failed".to_string()
        } else {
            body.to_string()
        };
        return Err(ApiError::Authentication(message));
    }

    serde_json::from_str::<TokenResponse>(body)
        .map(|r| r.access_token)
        .map_err(|e| ApiError::Transport(format!("Parse error: {}", e)))
}

/// Mapea la respuesta de `/users/me` a una identidad o a token inválido
pub(crate) fn user_from_response(status: u16, body: &str) -> Result<User, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::InvalidCredential);
    }

    serde_json::from_str::<User>(body).map_err(|_| ApiError::InvalidCredential)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn token_extracted_from_success_body() {
        let token = token_from_response(200, r#"{"access_token":"abc123","token_type":"bearer"}"#);
        assert_eq!(token, Ok("abc123".to_string()));
    }

    #[test]
    fn rejected_login_carries_response_body() {
        let err = token_from_response(401, "Incorrect username or password").unwrap_err();
        assert_eq!(
            err,
            ApiError::Authentication("Incorrect username or password".to_string())
        );
    }

    #[test]
    fn rejected_login_with_empty_body_uses_generic_message() {
        let err = token_from_response(401, "  ").unwrap_err();
        assert_eq!(err, ApiError::Authentication("Login failed".to_string()));
    }

    #[test]
    fn unparseable_success_body_is_a_transport_error() {
        let err = token_from_response(200, "<html>proxy error</html>").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn me_endpoint_success_yields_user_identity() {
        let user = user_from_response(200, r#"{"name":"Demo Admin","role":"admin"}"#).unwrap();
        assert_eq!(user.name, "Demo Admin");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn any_me_failure_is_invalid_credential() {
        assert_eq!(
            user_from_response(401, "unauthorized"),
            Err(ApiError::InvalidCredential)
        );
        assert_eq!(
            user_from_response(500, "internal error"),
            Err(ApiError::InvalidCredential)
        );
        // Cuerpo ilegible con status 200
        assert_eq!(
            user_from_response(200, "not json"),
            Err(ApiError::InvalidCredential)
        );
    }
}
