use anyhow::Result;
use ngop_core::{cost, format};

use crate::commands::CommandContext;

/// Blocks on store change notifications until interrupted, reloading the
/// full snapshot on each one.
pub fn watch(ctx: &CommandContext) -> Result<()> {
    ctx.require_user()?;

    // Load once so a fresh setup gets its seed before the watch starts.
    let projects = ctx.store.load();
    println!(
        "watching {} ({} โครงการ, {} บาท)",
        ctx.store.path().display(),
        projects.len(),
        format::baht(cost::grand_total(&projects))
    );

    let watcher = ctx.store.subscribe()?;
    loop {
        let event = watcher.events().recv()?;
        tracing::debug!(?event, "store changed on disk");
        let projects = ctx.store.load();
        println!(
            "reloaded: {} โครงการ, งบประมาณรวมทุกโครงการ {} บาท",
            projects.len(),
            format::baht(cost::grand_total(&projects))
        );
    }
}
