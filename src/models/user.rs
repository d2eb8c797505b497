use serde::{Deserialize, Serialize};

/// Rol del usuario - controla qué funcionalidades se muestran
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Gm,
    Am,
    /// Un rol desconocido sigue siendo un usuario válido, solo sin features
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Etiqueta en mayúsculas para el badge del dashboard
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Gm => "GM",
            Role::Am => "AM",
            Role::Unknown => "—",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_lowercase_strings() {
        let user: User =
            serde_json::from_str(r#"{"name":"Ana","role":"gm","email":"ana@base44.local"}"#)
                .unwrap();
        assert_eq!(user.role, Role::Gm);
        assert_eq!(user.name, "Ana");
    }

    #[test]
    fn unrecognized_role_falls_back_to_unknown() {
        let user: User = serde_json::from_str(r#"{"name":"Bob","role":"ceo"}"#).unwrap();
        assert_eq!(user.role, Role::Unknown);
        assert_eq!(user.email, None);
    }
}
