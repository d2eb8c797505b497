// ============================================================================
// USE_SESSION - Ciclo de vida de la sesión
// ============================================================================
// Único dueño de las mutaciones del token persistido. La identidad solo se
// acepta desde /users/me: un login exitoso vuelve a pasar por la validación,
// nunca salta directo a Authenticated.
// ============================================================================

use yew::prelude::*;

use crate::models::User;
use crate::services::error::ApiError;
use crate::services::{auth_service, session_store};

/// Fase actual de la sesión. Un logout o un token rechazado vuelven a
/// Anonymous, desde donde se puede iniciar sesión de nuevo.
#[derive(Clone, PartialEq, Debug)]
pub enum SessionPhase {
    Anonymous,
    Checking,
    Authenticated(User),
}

pub struct UseSessionHandle {
    pub phase: SessionPhase,
    pub token: Option<String>,
    /// Llamado por el formulario de login con un token recién emitido
    pub on_token: Callback<String>,
    pub logout: Callback<()>,
}

/// Transición tras validar el token: cualquier fallo (401, 500, red caída)
/// degrada a Anonymous por igual.
pub(crate) fn phase_after_validation(result: Result<User, ApiError>) -> SessionPhase {
    match result {
        Ok(user) => SessionPhase::Authenticated(user),
        Err(_) => SessionPhase::Anonymous,
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let token = use_state(session_store::load_token);
    let phase = use_state(|| {
        if token.is_some() {
            log::info!("🔑 Token persistido encontrado, validando sesión...");
            SessionPhase::Checking
        } else {
            SessionPhase::Anonymous
        }
    });

    // Revalidar identidad cada vez que aparece un token (arranque o login)
    {
        let phase = phase.clone();
        let token_handle = token.clone();
        use_effect_with((*token).clone(), move |current: &Option<String>| {
            if let Some(tok) = current.clone() {
                phase.set(SessionPhase::Checking);
                let phase = phase.clone();
                let token_handle = token_handle.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let next = phase_after_validation(auth_service::fetch_current_user(&tok).await);
                    match &next {
                        SessionPhase::Authenticated(user) => {
                            log::info!("✅ Sesión validada: {}", user.name);
                        }
                        _ => {
                            // Token y usuario se invalidan juntos
                            log::info!("🚪 Token rechazado, cerrando sesión");
                            session_store::clear_token();
                            token_handle.set(None);
                        }
                    }
                    phase.set(next);
                });
            }
            || ()
        });
    }

    let on_token = {
        let token = token.clone();
        let phase = phase.clone();
        Callback::from(move |new_token: String| {
            session_store::save_token(&new_token);
            phase.set(SessionPhase::Checking);
            token.set(Some(new_token));
        })
    };

    let logout = {
        let token = token.clone();
        let phase = phase.clone();
        Callback::from(move |_| {
            log::info!("👋 Logout");
            session_store::clear_token();
            token.set(None);
            phase.set(SessionPhase::Anonymous);
        })
    };

    UseSessionHandle {
        phase: (*phase).clone(),
        token: (*token).clone(),
        on_token,
        logout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn validated_user_is_the_one_from_the_backend() {
        let user = User {
            name: "Demo Admin".to_string(),
            role: Role::Admin,
            email: None,
        };

        match phase_after_validation(Ok(user.clone())) {
            SessionPhase::Authenticated(u) => assert_eq!(u, user),
            other => panic!("expected Authenticated, got {:?}", other),
        }
    }

    #[test]
    fn rejected_validation_demotes_to_anonymous() {
        // fetch_current_user colapsa 401, 500, cuerpos ilegibles y fallos de
        // red en InvalidCredential antes de llegar aquí; la transición es la
        // misma para cualquier error que pudiera aparecer en el futuro
        assert_eq!(
            phase_after_validation(Err(ApiError::InvalidCredential)),
            SessionPhase::Anonymous
        );
        assert_eq!(
            phase_after_validation(Err(ApiError::Transport("connection refused".to_string()))),
            SessionPhase::Anonymous
        );
    }
}
