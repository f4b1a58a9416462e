use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::types::{ExportFormatArg, RoleArg};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign in and store the session token")]
    Login {
        username: String,

        #[arg(long, env = "JURNAL_PASSWORD", hide_env_values = true)]
        password: String,
    },

    #[command(about = "Sign out and forget the stored token")]
    Logout,

    #[command(about = "Show the signed-in user")]
    Whoami,

    #[command(about = "Summary for the signed-in user's role")]
    Dashboard,

    #[command(about = "Show or change configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Staff accounts")]
    User {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Classes", visible_alias = "class")]
    Kelas {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Subjects", visible_alias = "subject")]
    Mapel {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Students", visible_alias = "student")]
    Siswa {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Timetable slots", visible_alias = "schedule")]
    Jadwal {
        #[command(subcommand)]
        command: EntityCommand,
    },

    #[command(about = "Teaching journal entries", visible_alias = "journal")]
    Jurnal {
        #[command(subcommand)]
        command: EntityCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Set a configuration key")]
    Set { key: String, value: String },
}

/// Which records a listing starts from.
#[derive(Debug, Clone, Default, Args)]
pub struct ScopeArgs {
    /// Keep only records whose filter reference has this id
    /// (teacher for journals, creator for schedules, class for students)
    #[arg(long)]
    pub filter: Option<String>,

    /// Only the signed-in teacher's journals or schedules
    #[arg(long, conflicts_with = "role")]
    pub mine: bool,

    /// Only users with this role
    #[arg(long)]
    pub role: Option<RoleArg>,
}

#[derive(Subcommand)]
pub enum EntityCommand {
    #[command(about = "List one page of records")]
    List {
        #[command(flatten)]
        scope: ScopeArgs,

        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Defaults to the configured page size
        #[arg(long)]
        page_size: Option<usize>,

        /// Include detail-only fields
        #[arg(long)]
        all_fields: bool,
    },

    #[command(about = "List the values the filter accepts")]
    Options {
        #[command(flatten)]
        scope: ScopeArgs,
    },

    #[command(about = "Show one record")]
    Show { id: String },

    #[command(about = "Create a record from a JSON body")]
    Create {
        /// JSON object, or @path to read it from a file
        #[arg(long)]
        data: String,
    },

    #[command(about = "Replace a record from a JSON body")]
    Update {
        id: String,

        /// JSON object, or @path to read it from a file
        #[arg(long)]
        data: String,
    },

    #[command(about = "Delete a record")]
    Delete { id: String },

    #[command(about = "Export every record matching the filter")]
    Export {
        #[command(flatten)]
        scope: ScopeArgs,

        #[arg(long, value_enum, default_value = "sheet")]
        to: ExportFormatArg,

        /// Directory the file is written to
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    #[command(about = "Print the detail view of every record matching the filter")]
    Print {
        #[command(flatten)]
        scope: ScopeArgs,
    },
}
