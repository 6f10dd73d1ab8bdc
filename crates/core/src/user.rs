//! User profile and role modeling.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// Role granted to a user profile.
///
/// The set is fixed by the backend schema; capability checks are derived
/// here so every consumer agrees on which roles unlock which surfaces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    User,
    Dean,
    QuamsCoordinator,
    AssociateDean,
    Department,
    Faculty,
    Staff,
}

impl UserRole {
    /// Every role the backend can hand out, for exhaustive checks in tests.
    pub const ALL: [UserRole; 8] = [
        UserRole::Admin,
        UserRole::User,
        UserRole::Dean,
        UserRole::QuamsCoordinator,
        UserRole::AssociateDean,
        UserRole::Department,
        UserRole::Faculty,
        UserRole::Staff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Dean => "dean",
            UserRole::QuamsCoordinator => "quams_coordinator",
            UserRole::AssociateDean => "associate_dean",
            UserRole::Department => "department",
            UserRole::Faculty => "faculty",
            UserRole::Staff => "staff",
        }
    }

    /// Dean, QUAMS coordinator, and admin share the administrative surfaces.
    pub fn has_admin_access(self) -> bool {
        matches!(
            self,
            UserRole::Dean | UserRole::QuamsCoordinator | UserRole::Admin
        )
    }

    /// Document validation is open to admin-access roles plus the associate
    /// dean and department roles.
    pub fn has_validation_access(self) -> bool {
        self.has_admin_access()
            || matches!(self, UserRole::AssociateDean | UserRole::Department)
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user's profile.
///
/// Owned exclusively by the user store: populated on session initialization
/// or explicit login, cleared on logout or a remote sign-out event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub department: Option<String>,
    /// Active flag maintained by the backend.
    pub status: bool,
    pub avatar: Option<String>,
}

impl User {
    /// Display name: `"{first} {last}"`, trimmed. May be empty when both
    /// parts are blank; callers supply their own fallback.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_access_matrix() {
        for role in UserRole::ALL {
            let expected = matches!(
                role,
                UserRole::Dean | UserRole::QuamsCoordinator | UserRole::Admin
            );
            assert_eq!(role.has_admin_access(), expected, "role {role}");
        }
    }

    #[test]
    fn validation_access_matrix() {
        for role in UserRole::ALL {
            let expected = role.has_admin_access()
                || matches!(role, UserRole::AssociateDean | UserRole::Department);
            assert_eq!(role.has_validation_access(), expected, "role {role}");
        }
    }

    #[test]
    fn validation_access_superset_of_admin_access() {
        for role in UserRole::ALL {
            if role.has_admin_access() {
                assert!(role.has_validation_access(), "role {role}");
            }
        }
    }

    #[test]
    fn role_serializes_as_snake_case() {
        let json = serde_json::to_string(&UserRole::QuamsCoordinator).unwrap();
        assert_eq!(json, "\"quams_coordinator\"");

        let parsed: UserRole = serde_json::from_str("\"associate_dean\"").unwrap();
        assert_eq!(parsed, UserRole::AssociateDean);
    }

    #[test]
    fn display_name_trims_blank_parts() {
        let user = User {
            id: UserId::new(),
            first_name: "Ana".to_string(),
            last_name: String::new(),
            email: "ana@example.edu".to_string(),
            role: UserRole::Faculty,
            department: None,
            status: true,
            avatar: None,
        };
        assert_eq!(user.display_name(), "Ana");
    }
}
