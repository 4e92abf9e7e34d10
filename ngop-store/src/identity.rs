//! The logged-in identity and its privilege level.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Convention marker older records carried inside the work-group string
/// instead of an explicit role field.
pub const ADMIN_MARKER: &str = "Administrator";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        match role.as_str() {
            "Admin" => Role::Admin,
            "User" => Role::User,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role_str = match self {
            Role::Admin => "Admin",
            Role::User => "User",
        };
        write!(f, "{role_str}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub mission_group: String,
    pub work_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    /// Absent in records persisted before roles became explicit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserInfo {
    /// The explicit role when present; legacy records fall back to the
    /// work-group marker convention.
    pub fn effective_role(&self) -> Role {
        match &self.role {
            Some(role) => role.clone(),
            None if self.work_group.contains(ADMIN_MARKER) => Role::Admin,
            None => Role::User,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.effective_role() == Role::Admin
    }
}
