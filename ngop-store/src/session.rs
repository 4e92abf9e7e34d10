//! Current-login persistence. The session file holds the identity JSON and
//! nothing else; logout just removes it.

use anyhow::{Context, Result};
use std::path::Path;
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

use crate::identity::UserInfo;

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

/// Loads the logged-in identity. Returns None when nobody is logged in.
pub fn load_session(path: &Path) -> Result<Option<UserInfo>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = std::fs::read_to_string(path).context("Failed to read session file")?;
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let user = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse session file at {}", path.display()))?;
    Ok(Some(user))
}

pub fn save_session(path: &Path, user: &UserInfo) -> Result<()> {
    let raw = serde_json::to_string_pretty(user)?;
    secure_write(path, &raw)
}

/// Deletes the saved session (logout).
pub fn clear_session(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Role;
    use tempfile::tempdir;

    fn some_user() -> UserInfo {
        UserInfo {
            mission_group: "General".to_string(),
            work_group: "กลุ่มงานทดสอบ".to_string(),
            organization_name: Some("กองวัณโรค".to_string()),
            role: Some(Role::User),
        }
    }

    #[test]
    fn session_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        assert_eq!(load_session(&path).unwrap(), None);

        save_session(&path, &some_user()).unwrap();
        assert_eq!(load_session(&path).unwrap(), Some(some_user()));

        clear_session(&path).unwrap();
        assert_eq!(load_session(&path).unwrap(), None);
    }

    #[test]
    fn clearing_a_missing_session_is_fine() {
        let dir = tempdir().unwrap();
        assert!(clear_session(&dir.path().join("session.json")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        save_session(&path, &some_user()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
