// Entities share one subcommand set (list, show, create, update, delete,
// export, print) so every listing behaves the same from the shell.

mod commands;
mod types;

pub use commands::*;
pub use types::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "jurnal")]
#[command(about = "Manage and export school classes, students, schedules and teaching journals", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $JURNAL_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Override the configured API base URL for this invocation
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}
