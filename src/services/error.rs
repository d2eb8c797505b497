use thiserror::Error;

/// Errores de los servicios HTTP.
///
/// `InvalidCredential` agrupa deliberadamente 401, 500, cuerpos ilegibles y
/// fallos de red durante la validación: el controlador de sesión no distingue
/// entre token expirado, token malformado o servidor caído.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// El backend rechazó las credenciales de login
    #[error("{0}")]
    Authentication(String),

    /// Un token previamente aceptado ya no es válido
    #[error("Session is no longer valid")]
    InvalidCredential,

    /// Fallo a nivel de red o respuesta inutilizable
    #[error("Network error: {0}")]
    Transport(String),
}
