use crate::models::Role;

/// Lista fija de funcionalidades visibles para cada rol, en el orden en que
/// se muestran en el Quick View. Un rol desconocido no ve ninguna.
pub fn features_for_role(role: &Role) -> Vec<&'static str> {
    match role {
        Role::Admin => vec![
            "Manage users (Admin, GM, AM)",
            "Set department & AM targets",
            "View org-wide reports",
            "Reset passwords",
        ],
        Role::Gm => vec![
            "Manage assigned AMs",
            "Set AM targets for your department",
            "Track department pipeline",
            "Reset AM passwords",
        ],
        Role::Am => vec![
            "View personal targets",
            "Manage prospective customers",
            "Log meetings & follow-ups",
            "Presentation mode for deals",
        ],
        Role::Unknown => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_features_are_non_empty_and_distinct_from_am() {
        let admin = features_for_role(&Role::Admin);
        let am = features_for_role(&Role::Am);

        assert!(!admin.is_empty());
        assert!(!am.is_empty());
        assert_ne!(admin, am);
    }

    #[test]
    fn every_known_role_gets_four_features() {
        for role in [Role::Admin, Role::Gm, Role::Am] {
            assert_eq!(features_for_role(&role).len(), 4);
        }
    }

    #[test]
    fn unknown_role_gets_nothing() {
        assert!(features_for_role(&Role::Unknown).is_empty());
    }
}
