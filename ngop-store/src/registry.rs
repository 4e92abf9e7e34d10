//! Registered-user records. Passwords are stored in the clear: this is a
//! demo surface, not a security boundary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::email::Email;
use crate::identity::{Role, UserInfo, ADMIN_MARKER};
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub email: String,
    pub password: String,
    pub user_info: UserInfo,
}

pub struct NewRegistration {
    pub email: Email,
    pub password: String,
    pub organization_name: String,
    pub work_group: String,
    pub admin: bool,
}

pub struct UserRegistry {
    path: PathBuf,
}

impl UserRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all registered users. A missing or unreadable registry is
    /// simply empty.
    pub fn load(&self) -> Vec<RegisteredUser> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("could not read {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!("could not parse {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    pub fn save(&self, users: &[RegisteredUser]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(users)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Adds a user. New identities always get mission group "General"; an
    /// admin registration carries both the explicit role and the legacy
    /// work-group marker, so older readers still recognize it.
    pub fn register(&self, registration: NewRegistration) -> Result<UserInfo, RegisterError> {
        let mut users = self.load();
        if users
            .iter()
            .any(|u| u.email == registration.email.as_ref())
        {
            return Err(RegisterError::DuplicateEmail(registration.email.to_string()));
        }

        let work_group = if registration.admin {
            format!("{} ({ADMIN_MARKER})", registration.work_group)
        } else {
            registration.work_group
        };
        let user_info = UserInfo {
            mission_group: "General".to_string(),
            work_group,
            organization_name: Some(registration.organization_name),
            role: Some(if registration.admin {
                Role::Admin
            } else {
                Role::User
            }),
        };

        users.push(RegisteredUser {
            email: registration.email.to_string(),
            password: registration.password,
            user_info: user_info.clone(),
        });
        self.save(&users)?;
        Ok(user_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn registration(email: &str, admin: bool) -> NewRegistration {
        NewRegistration {
            email: Email::try_from(email).unwrap(),
            password: "secret".to_string(),
            organization_name: "กองวัณโรค".to_string(),
            work_group: "กลุ่มงานทดสอบ".to_string(),
            admin,
        }
    }

    #[test]
    fn registering_persists_the_record() {
        let dir = tempdir().unwrap();
        let registry = UserRegistry::new(dir.path().join("registered_users.json"));

        let info = registry.register(registration("user@example.com", false)).unwrap();
        assert_eq!(info.mission_group, "General");
        assert_eq!(info.work_group, "กลุ่มงานทดสอบ");
        assert!(!info.is_admin());

        let users = registry.load();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "user@example.com");
        assert_eq!(users[0].password, "secret");
    }

    #[test]
    fn admin_registration_gets_marker_and_explicit_role() {
        let dir = tempdir().unwrap();
        let registry = UserRegistry::new(dir.path().join("registered_users.json"));

        let info = registry.register(registration("boss@example.com", true)).unwrap();
        assert_eq!(info.work_group, "กลุ่มงานทดสอบ (Administrator)");
        assert_eq!(info.role, Some(Role::Admin));
        assert!(info.is_admin());
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let dir = tempdir().unwrap();
        let registry = UserRegistry::new(dir.path().join("registered_users.json"));

        registry.register(registration("user@example.com", false)).unwrap();
        let err = registry
            .register(registration("user@example.com", true))
            .unwrap_err();
        assert!(matches!(err, RegisterError::DuplicateEmail(_)));
        assert_eq!(registry.load().len(), 1);
    }

    #[test]
    fn unreadable_registry_counts_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("registered_users.json");
        std::fs::write(&path, "not json at all").unwrap();

        let registry = UserRegistry::new(&path);
        assert!(registry.load().is_empty());
    }
}
