use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The site owner. Only admins can sign in to the dashboard.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of an admin, never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminProfile {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
            display_name: admin.display_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_drops_password_hash() {
        let admin = Admin {
            id: Uuid::new_v4(),
            email: "owner@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            display_name: "Owner".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let profile = AdminProfile::from(&admin);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(profile.id, admin.id);
        assert_eq!(json["email"], "owner@example.com");
        assert!(json.get("password_hash").is_none());
    }
}
