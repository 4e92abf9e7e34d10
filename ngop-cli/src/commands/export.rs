use std::path::Path;

use anyhow::{Context as _, Result};
use ngop_core::report;

use crate::commands::{find_project, CommandContext};

pub fn export(ctx: &CommandContext, project_id: &str, out: &Path) -> Result<()> {
    ctx.require_user()?;
    let projects = ctx.store.load();
    let project = find_project(&projects, project_id)?;

    let path = out.join(report::file_name(project));
    std::fs::create_dir_all(out)
        .with_context(|| format!("could not create {}", out.display()))?;
    std::fs::write(&path, report::render(project))
        .with_context(|| format!("could not write {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}
