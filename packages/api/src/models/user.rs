//! # Session users
//!
//! [`UserInfo`] is the client-safe view of whoever is logged in. It crosses the
//! server/client boundary through the server functions and is all the UI and
//! the route gate ever look at.
//!
//! [`SessionUser`] is what the server keeps in the session store: the
//! [`UserInfo`] plus the opaque token issued by the backend. The token is
//! attached to backend calls made on the user's behalf and never leaves the
//! server.

use serde::{Deserialize, Deserializer, Serialize};

/// Role value that unlocks the admin screens.
pub const ADMIN_ROLE: &str = "admin";

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(alias = "_id", deserialize_with = "de_user_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default = "default_role", deserialize_with = "de_role")]
    pub role: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

fn default_role() -> String {
    "user".to_string()
}

fn de_role<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_role))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Number(i64),
}

fn de_user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawUserId::deserialize(deserializer)? {
        RawUserId::Text(id) => id,
        RawUserId::Number(id) => id.to_string(),
    })
}

/// Session payload kept server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub user: UserInfo,
    pub token: String,
}
