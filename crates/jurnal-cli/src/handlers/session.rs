use anyhow::Result;

use jurnal_runtime::Error;

use crate::handlers::HandlerContext;
use crate::presentation::view_models::SessionViewModel;
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};

pub async fn login(ctx: &HandlerContext, username: &str, password: &str) -> Result<()> {
    let mut client = ctx.client()?;
    let user = client.login(username, password).await?.clone();
    ctx.store.save(client.session())?;

    let view_model = CommandResultViewModel::new(SessionViewModel::signed_in(&user))
        .with_badge(StatusBadge::success("Signed in"))
        .with_suggestion(Guidance::new("See today's summary").with_command("jurnal dashboard"));
    ctx.render(view_model)
}

/// The local session is cleared even when the server could not be told.
pub async fn logout(ctx: &HandlerContext) -> Result<()> {
    let mut client = ctx.client()?;
    let outcome = client.logout().await;
    ctx.store.clear()?;

    let mut view_model = CommandResultViewModel::new(SessionViewModel::signed_out())
        .with_badge(StatusBadge::success("Signed out"));
    if let Err(err) = outcome {
        tracing::warn!(error = %err, "server logout failed");
        view_model = view_model.with_suggestion(Guidance::new(format!(
            "The server was not notified: {}",
            err.user_message()
        )));
    }
    ctx.render(view_model)
}

pub fn whoami(ctx: &HandlerContext) -> Result<()> {
    let session = ctx.store.load()?;
    let user = session.user().ok_or(Error::MissingCredential)?;
    ctx.render(CommandResultViewModel::new(SessionViewModel::signed_in(user)))
}
