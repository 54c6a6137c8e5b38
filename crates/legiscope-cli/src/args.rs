// NOTE: Command Organization
//
// Namespaced subcommands (commission list / commission sessions, profile
// show / profile edit) instead of a flat command set: the dashboard's tabs
// map one-to-one onto namespaces, which keeps --help discoverable as
// endpoints accumulate.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "legiscope")]
#[command(about = "Browse commissions, politicians and legislative activity from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (beats LEGISCOPE_API_URL and config.toml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check backend availability and agent configuration
    Health,

    /// Commission directory and session history
    Commission {
        #[command(subcommand)]
        command: CommissionCommand,
    },

    /// Politician directory
    Politician {
        #[command(subcommand)]
        command: PoliticianCommand,
    },

    /// KOM profiles: view or edit the curated record for one politician
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Recent legislative activity across commissions
    Activity {
        #[arg(long, default_value = "")]
        group: String,
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long, default_value = "")]
        query: String,
    },

    /// News feed from the configured source
    News {
        #[arg(long)]
        source: Option<String>,
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Ask the legislative agent a question
    Chat {
        /// Question text (required, non-empty)
        message: String,
    },

    /// Upload a document to the backend
    Upload {
        /// Local file to send
        path: std::path::PathBuf,
    },
}

#[derive(Subcommand)]
pub enum CommissionCommand {
    /// List commissions in a group
    List {
        #[arg(long)]
        group: Option<String>,
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Session history for one commission, grouped by year
    Sessions {
        group: String,
        name: String,
        /// Show only this year
        #[arg(long)]
        year: Option<String>,
    },

    /// Full transcript text for one session
    Transcript {
        group: String,
        name: String,
        session_id: String,
    },
}

#[derive(Subcommand)]
pub enum PoliticianCommand {
    /// List politicians, optionally filtered by name
    List {
        #[arg(long, default_value = "")]
        query: String,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Print the stored KOM profile for (chamber, id)
    Show { chamber: String, id: String },

    /// Open the interactive profile editor for (chamber, id)
    Edit {
        chamber: String,
        id: String,
        /// Display name from caller context (shown, never persisted)
        #[arg(long, default_value = "")]
        name: String,
        /// Display role from caller context (shown, never persisted)
        #[arg(long, default_value = "")]
        role: String,
    },
}
