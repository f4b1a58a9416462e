use anyhow::Result;
use chrono::Utc;

use jurnal_runtime::{ViewScope, admin_dashboard, teacher_dashboard};
use jurnal_types::Role;

use crate::handlers::HandlerContext;
use crate::presentation::view_models::DashboardViewModel;
use crate::presentation::CommandResultViewModel;

pub async fn handle(ctx: &HandlerContext) -> Result<()> {
    let client = ctx.client()?;
    let scope = ViewScope::new();
    let cancel = scope.token();

    let (content, warnings) = if client.session().role() == Some(Role::Admin) {
        let data = admin_dashboard(&client, &cancel).await?;
        let warnings = data.warnings.clone();
        (DashboardViewModel::Admin(data), warnings)
    } else {
        let time = ctx.config.timestamp_format();
        let data = teacher_dashboard(&client, Utc::now(), time, &cancel).await?;
        let warnings = data.warnings.clone();
        (DashboardViewModel::Guru(data), warnings)
    };

    ctx.render(CommandResultViewModel::new(content).with_load_warnings(&warnings))
}
