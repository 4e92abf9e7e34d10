mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use ngop_store::StoreConfig;

use crate::cli::{ActivityCommands, Cli, Commands, ProjectCommands};
use crate::commands::CommandContext;

fn main() -> Result<()> {
    dotenvy::from_filename(".env.local").ok();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .compact()
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::load()?;
    let ctx = CommandContext::from_config(&config)?;

    match cli.command {
        Commands::Login { email } => commands::login(&ctx, &email),
        Commands::Logout => commands::logout(&ctx),
        Commands::Whoami => commands::whoami(&ctx),
        Commands::Register {
            email,
            organization,
            work_group,
            admin,
        } => commands::register(&ctx, &email, &organization, &work_group, admin),
        Commands::Project(project) => match project {
            ProjectCommands::List => commands::list_projects(&ctx),
            ProjectCommands::Show { project_id } => commands::show_project(&ctx, &project_id),
            ProjectCommands::Add { name } => commands::add_project(&ctx, &name),
            ProjectCommands::Delete { project_id } => commands::delete_project(&ctx, &project_id),
        },
        Commands::Activity(activity) => match activity {
            ActivityCommands::Add { project_id } => commands::add_activity(&ctx, &project_id),
        },
        Commands::Status {
            project_id,
            activity_id,
            status,
        } => commands::set_status(&ctx, &project_id, &activity_id, &status),
        Commands::Progress {
            project_id,
            activity_id,
            text,
            attach,
        } => commands::report_progress(&ctx, &project_id, &activity_id, &text, &attach),
        Commands::Export { project_id, out } => commands::export(&ctx, &project_id, &out),
        Commands::Watch => commands::watch(&ctx),
    }
}
