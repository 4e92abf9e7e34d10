use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use ngop_core::{edit, track, ActivityId, ActivityStatus};

use crate::commands::{find_project, CommandContext};

pub fn set_status(
    ctx: &CommandContext,
    project_id: &str,
    activity_id: &str,
    status: &str,
) -> Result<()> {
    ctx.require_editor()?;
    let status: ActivityStatus = match status.parse() {
        Ok(status) => status,
        Err(_) => {
            let known = ActivityStatus::ALL
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            bail!("unknown status '{status}' (expected one of: {known})");
        }
    };

    let projects = ctx.store.load();
    let project = find_project(&projects, project_id)?;
    let activity_id = ActivityId::from(activity_id);
    if project.activity(&activity_id).is_none() {
        bail!("no activity with id {activity_id} in project {project_id}");
    }

    let updated_project = track::set_status(project, &activity_id, status);
    let (updated, _) = edit::upsert_project(&projects, updated_project, None);
    ctx.store.save(&updated)?;
    println!("{}", status.label_th());
    Ok(())
}

pub fn report_progress(
    ctx: &CommandContext,
    project_id: &str,
    activity_id: &str,
    text: &str,
    attachments: &[PathBuf],
) -> Result<()> {
    ctx.require_editor()?;
    let projects = ctx.store.load();
    let project = find_project(&projects, project_id)?;
    let activity_id = ActivityId::from(activity_id);
    if project.activity(&activity_id).is_none() {
        bail!("no activity with id {activity_id} in project {project_id}");
    }

    let mut refs = Vec::new();
    for path in attachments {
        let reference = ngop_store::attachment_from_file(path)
            .with_context(|| format!("could not attach {}", path.display()))?;
        refs.push(reference);
    }

    let mut updated_project = track::set_progress_report(project, &activity_id, text);
    if !refs.is_empty() {
        updated_project = track::set_attachments(&updated_project, &activity_id, refs.clone());
    }
    let (updated, _) = edit::upsert_project(&projects, updated_project, None);
    ctx.store.save(&updated)?;

    for reference in &refs {
        // Attachments are session-scoped; the digest is what identifies them.
        println!("attached {} ({})", reference.file_name, reference.digest);
    }
    println!("saved progress for {activity_id}");
    Ok(())
}
