use serde::{Deserialize, Serialize};

/// Respuesta del endpoint de token (`POST /auth/token`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
