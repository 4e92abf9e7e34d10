//! Credential check: two fixed division accounts, then the registry. No
//! lockout, no rate limiting.

use thiserror::Error;

use crate::identity::{Role, UserInfo};
use crate::registry::UserRegistry;

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
}

pub fn authenticate(
    registry: &UserRegistry,
    email: &str,
    password: &str,
) -> Result<UserInfo, AuthError> {
    if let Some(identity) = builtin_identity(email, password) {
        return Ok(identity);
    }

    registry
        .load()
        .into_iter()
        .find(|u| u.email == email && u.password == password)
        .map(|u| u.user_info)
        .ok_or(AuthError::InvalidCredentials)
}

// The division's two preprovisioned accounts, checked before the registry.
fn builtin_identity(email: &str, password: &str) -> Option<UserInfo> {
    match (email, password) {
        ("admin.dtb@gmail.com", "admin123") => Some(UserInfo {
            mission_group: "กลุ่มภารกิจยุทธศาสตร์ แผนงาน และพัฒนาองค์กร".to_string(),
            work_group: "กลุ่มงานยุทธศาสตร์และแผนงาน (Administrator)".to_string(),
            organization_name: Some("กองวัณโรค".to_string()),
            role: Some(Role::Admin),
        }),
        ("opd.dtb@gmail.com", "opd123") => Some(UserInfo {
            mission_group: "กลุ่มภารกิจพัฒนาระบบบริการ".to_string(),
            work_group: "กลุ่มงานพัฒนาระบบบริการคลินิกวัณโรค".to_string(),
            organization_name: Some("กองวัณโรค".to_string()),
            role: Some(Role::User),
        }),
        _ => None,
    }
}
