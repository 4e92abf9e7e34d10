mod auth;
mod export;
mod progress;
mod project;
mod watch;

pub use auth::*;
pub use export::*;
pub use progress::*;
pub use project::*;
pub use watch::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use ngop_core::Project;
use ngop_store::{session, ProjectStore, StoreConfig, UserInfo, UserRegistry};

/// Everything a command needs: the three store files plus the session.
pub struct CommandContext {
    pub store: ProjectStore,
    pub registry: UserRegistry,
    session_path: PathBuf,
}

impl CommandContext {
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Ok(Self {
            store: ProjectStore::new(config.projects_path()?),
            registry: UserRegistry::new(config.registry_path()?),
            session_path: config.session_path()?,
        })
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    pub fn current_user(&self) -> Result<Option<UserInfo>> {
        session::load_session(&self.session_path)
    }

    pub fn require_user(&self) -> Result<UserInfo> {
        match self.current_user()? {
            Some(user) => Ok(user),
            None => bail!("not logged in; run `ngop login <email>` first"),
        }
    }

    /// Mutating commands refuse admin sessions: administrators get the
    /// overview, work groups edit their own data.
    pub fn require_editor(&self) -> Result<UserInfo> {
        let user = self.require_user()?;
        if user.is_admin() {
            bail!("administrator accounts are read-only");
        }
        Ok(user)
    }
}

pub(crate) fn find_project<'a>(projects: &'a [Project], id: &str) -> Result<&'a Project> {
    match projects.iter().find(|p| p.id.as_str() == id) {
        Some(project) => Ok(project),
        None => bail!("no project with id {id}"),
    }
}
