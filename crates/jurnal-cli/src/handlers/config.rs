use anyhow::Result;

use crate::handlers::HandlerContext;
use crate::presentation::view_models::ConfigViewModel;
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let view_model = CommandResultViewModel::new(ConfigViewModel {
        path: ctx.config_path(),
        config: ctx.config.clone(),
    });
    ctx.render(view_model)
}

pub fn set(ctx: &HandlerContext, key: &str, value: &str) -> Result<()> {
    let path = ctx.config_path();
    // --api-url is a one-off override, so start from the file rather than ctx.config
    let mut config = jurnal_runtime::Config::load_lenient(&path)?;
    config.set(key, value)?;
    config.save_to(&path)?;
    tracing::info!(key, path = %path.display(), "config updated");

    let view_model = CommandResultViewModel::new(ConfigViewModel { path, config })
        .with_badge(StatusBadge::success(format!("Set {}", key)))
        .with_suggestion(Guidance::new("Show the full configuration").with_command("jurnal config show"));
    ctx.render(view_model)
}
