use anyhow::Result;

use jurnal_runtime::resolve_data_path;
use jurnal_types::{Jadwal, Jurnal, Kelas, Mapel, Siswa, User};

use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};

pub async fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_path(cli.data_dir.as_deref())?;
    let ctx = HandlerContext::load(data_dir, cli.format, cli.api_url.as_deref())?;
    tracing::debug!(data_dir = %ctx.data_dir.display(), api = %ctx.config.api_base_url, "context loaded");

    match cli.command {
        Commands::Login { username, password } => {
            handlers::session::login(&ctx, &username, &password).await
        }
        Commands::Logout => handlers::session::logout(&ctx).await,
        Commands::Whoami => handlers::session::whoami(&ctx),
        Commands::Dashboard => handlers::dashboard::handle(&ctx).await,

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Set { key, value } => handlers::config::set(&ctx, &key, &value),
        },

        Commands::User { command } => handlers::entity::handle::<User>(&ctx, command).await,
        Commands::Kelas { command } => handlers::entity::handle::<Kelas>(&ctx, command).await,
        Commands::Mapel { command } => handlers::entity::handle::<Mapel>(&ctx, command).await,
        Commands::Siswa { command } => handlers::entity::handle::<Siswa>(&ctx, command).await,
        Commands::Jadwal { command } => handlers::entity::handle::<Jadwal>(&ctx, command).await,
        Commands::Jurnal { command } => handlers::entity::handle::<Jurnal>(&ctx, command).await,
    }
}
