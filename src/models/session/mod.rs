// Session module
// Types returned by the external auth collaborator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse role derived from the session, used to gate write affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn parse(value: &str) -> Role {
        match value.to_lowercase().as_str() {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

/// The authenticated user as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_role_string")]
    pub role: String,
}

fn default_role_string() -> String {
    "user".to_string()
}

/// An active session. Presence of a session means "authorized".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn role(&self) -> Role {
        Role::parse(&self.user.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session(role: &str) -> Session {
        Session {
            user: User {
                id: "user-1".to_string(),
                name: "Dina".to_string(),
                email: "dina@example.com".to_string(),
                image: None,
                role: role.to_string(),
            },
            expires_at: None,
        }
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("anything-else"), Role::User);
    }

    #[test]
    fn test_is_admin() {
        assert!(sample_session("admin").is_admin());
        assert!(!sample_session("user").is_admin());
    }

    #[test]
    fn test_session_deserializes_without_role() {
        let raw = r#"{"user":{"id":"u1","name":"Dina","email":"d@example.com"}}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.role(), Role::User);
    }
}
