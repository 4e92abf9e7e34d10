use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ngop")]
#[command(about = "ระบบบริหารจัดการงบดำเนินการ กองวัณโรค")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in and persist the session
    Login { email: String },
    /// Remove the saved session
    Logout,
    /// Show the logged-in identity
    Whoami,
    /// Register a new account
    Register {
        email: String,
        /// Organization name, e.g. กองวัณโรค
        #[arg(long)]
        organization: String,
        /// Work group (department) the account belongs to
        #[arg(long = "work-group")]
        work_group: String,
        /// Register with administrator privileges
        #[arg(long)]
        admin: bool,
    },
    /// Inspect and edit projects
    #[command(subcommand)]
    Project(ProjectCommands),
    /// Activity-level edits
    #[command(subcommand)]
    Activity(ActivityCommands),
    /// Move an activity to a new status
    Status {
        project_id: String,
        activity_id: String,
        /// One of: not_started, in_progress, completed
        status: String,
    },
    /// Record a progress narrative for an activity
    Progress {
        project_id: String,
        activity_id: String,
        text: String,
        /// Files to attach (kept for this session only)
        #[arg(long = "attach")]
        attach: Vec<PathBuf>,
    },
    /// Write a project's summary report to a file
    Export {
        project_id: String,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Watch the store and reload on external changes
    Watch,
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects with totals
    List,
    /// Show one project in full
    Show { project_id: String },
    /// Create a project
    Add { name: String },
    /// Remove a project
    Delete { project_id: String },
}

#[derive(Debug, Subcommand)]
pub enum ActivityCommands {
    /// Append a blank activity to a project
    Add { project_id: String },
}
