// jurnal CLI
//
// Every listing page works the same way: fetch the collection and the
// reference lists it labels against, filter and sort, then either show one
// page, export the whole filtered set, or print it. The server stays the
// source of truth; the CLI keeps nothing but the config file and the
// session token between runs.

mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, EntityCommand, LogLevel, OutputFormat};
pub use commands::run;
