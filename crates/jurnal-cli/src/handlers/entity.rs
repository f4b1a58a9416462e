//! The shared subcommand set, generic over the entity being managed.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;

use jurnal_engine::{ExportFormat, PrintJob, RenderContext, TextPrinter};
use jurnal_runtime::{Client, Error, Listing, LoadWarning, Scope, ViewScope, load_board};
use jurnal_types::Role;

use crate::args::{EntityCommand, ScopeArgs};
use crate::handlers::HandlerContext;
use crate::handlers::screen::Screen;
use crate::presentation::presenters;
use crate::presentation::view_models::MutationAction;

pub async fn handle<T: Screen>(ctx: &HandlerContext, command: EntityCommand) -> Result<()> {
    match command {
        EntityCommand::List {
            scope,
            page,
            page_size,
            all_fields,
        } => list::<T>(ctx, &scope, page, page_size, all_fields).await,
        EntityCommand::Options { scope } => options::<T>(ctx, &scope).await,
        EntityCommand::Show { id } => show::<T>(ctx, &id).await,
        EntityCommand::Create { data } => create::<T>(ctx, &data).await,
        EntityCommand::Update { id, data } => update::<T>(ctx, &id, &data).await,
        EntityCommand::Delete { id } => delete::<T>(ctx, &id).await,
        EntityCommand::Export { scope, to, out } => export::<T>(ctx, &scope, to.into(), &out).await,
        EntityCommand::Print { scope } => print::<T>(ctx, &scope).await,
    }
}

fn scope_of(client: &Client, args: &ScopeArgs) -> Result<Scope> {
    if args.mine {
        let user = client.session().user().ok_or(Error::MissingCredential)?;
        return Ok(Scope::Teacher(user.id.clone()));
    }
    Ok(match args.role {
        Some(role) => Scope::Role(role.into()),
        None => Scope::All,
    })
}

/// Loads the collection with its reference lists and applies the filter.
async fn load_listing<T: Screen>(
    ctx: &HandlerContext,
    client: &Client,
    args: &ScopeArgs,
    page_size: usize,
) -> Result<(Listing<T>, Vec<LoadWarning>)> {
    let scope = scope_of(client, args)?;
    let view = ViewScope::new();
    let board = load_board(client, client.list_in::<T>(&scope), T::needs(), &view.token()).await?;

    let warnings = board.warnings.clone();
    let mut listing = Listing::from_board(board, ctx.config.timestamp_format(), page_size);
    listing.set_filter(args.filter.as_deref());
    Ok((listing, warnings))
}

async fn list<T: Screen>(
    ctx: &HandlerContext,
    args: &ScopeArgs,
    page: usize,
    page_size: Option<usize>,
    all_fields: bool,
) -> Result<()> {
    let client = ctx.client()?;
    let mut flags = scope_flags(args);
    if let Some(size) = page_size {
        flags.push(format!("--page-size {}", size));
    }
    if all_fields {
        flags.push("--all-fields".to_string());
    }

    let page_size = page_size.unwrap_or(ctx.config.page_size);
    let (mut listing, warnings) = load_listing::<T>(ctx, &client, args, page_size).await?;
    listing.go(page);
    ctx.render(presenters::present_listing(&listing, all_fields, &flags, &warnings))
}

/// `--mine` and `--role` as typed; the filter is taken from the listing.
fn scope_flags(args: &ScopeArgs) -> Vec<String> {
    let mut flags = Vec::new();
    if args.mine {
        flags.push("--mine".to_string());
    }
    if let Some(role) = args.role {
        flags.push(format!("--role {}", Role::from(role)));
    }
    flags
}

async fn options<T: Screen>(ctx: &HandlerContext, args: &ScopeArgs) -> Result<()> {
    let client = ctx.client()?;
    let (listing, warnings) = load_listing::<T>(ctx, &client, args, ctx.config.page_size).await?;
    ctx.render(presenters::present_options(&listing, &warnings))
}

async fn show<T: Screen>(ctx: &HandlerContext, id: &str) -> Result<()> {
    let client = ctx.client()?;
    let view = ViewScope::new();
    let primary = async { client.get::<T>(id).await.map(|record| vec![record]) };
    let board = match load_board(&client, primary, T::needs(), &view.token()).await {
        Err(
            err @ (Error::NotFound(_)
            | Error::Gateway { .. }
            | Error::Transport(_)
            | Error::Decode(_)),
        ) => {
            bail!("{}. Back to the listing: jurnal {} list", err.user_message(), T::KIND)
        }
        loaded => loaded?,
    };

    let Some(item) = board.items.first() else {
        bail!("Not found: {} {}. Back to the listing: jurnal {} list", T::KIND, id, T::KIND);
    };
    let render_ctx = RenderContext::new(&board.labels, ctx.config.timestamp_format());
    let members = item.members(&board);
    ctx.render(presenters::present_detail(item, &render_ctx, members, &board.warnings))
}

/// `--data` is inline JSON, or `@path` naming a JSON file.
fn parse_body<D: DeserializeOwned>(data: &str) -> Result<D> {
    let text = match data.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request body from {}", path))?,
        None => data.to_string(),
    };
    serde_json::from_str(&text).context("Invalid --data: expected a JSON object matching the form")
}

async fn create<T: Screen>(ctx: &HandlerContext, data: &str) -> Result<()> {
    let client = ctx.client()?;
    client.session().require_token()?;

    let draft = T::conform(&client, parse_body(data)?).await?;
    let created = client.create::<T>(&draft).await?;
    let id = created.as_ref().map(|record| record.id().to_string());
    ctx.render(presenters::present_mutation(T::KIND, MutationAction::Created, id))
}

async fn update<T: Screen>(ctx: &HandlerContext, id: &str, data: &str) -> Result<()> {
    let client = ctx.client()?;
    client.session().require_token()?;

    let draft = T::conform(&client, parse_body(data)?).await?;
    let updated = client.update::<T>(id, &draft).await?;
    let id = updated
        .as_ref()
        .map(|record| record.id().to_string())
        .unwrap_or_else(|| id.to_string());
    ctx.render(presenters::present_mutation(T::KIND, MutationAction::Updated, Some(id)))
}

async fn delete<T: Screen>(ctx: &HandlerContext, id: &str) -> Result<()> {
    let client = ctx.client()?;
    client.delete::<T>(id).await?;
    ctx.render(presenters::present_mutation(
        T::KIND,
        MutationAction::Deleted,
        Some(id.to_string()),
    ))
}

async fn export<T: Screen>(
    ctx: &HandlerContext,
    args: &ScopeArgs,
    format: ExportFormat,
    out: &Path,
) -> Result<()> {
    let client = ctx.client()?;
    let (listing, warnings) = load_listing::<T>(ctx, &client, args, ctx.config.page_size).await?;

    let artifact = listing.export(format)?;
    let report = artifact.save_in(out)?;
    ctx.render(presenters::present_export(T::KIND, report).with_load_warnings(&warnings))
}

async fn print<T: Screen>(ctx: &HandlerContext, args: &ScopeArgs) -> Result<()> {
    let client = ctx.client()?;
    let (listing, warnings) = load_listing::<T>(ctx, &client, args, ctx.config.page_size).await?;

    let title = format!("{} Detail", T::KIND.title());
    let rows = listing.visible().len();
    let mut job = PrintJob::new();

    // JSON output carries the document instead of interleaving it with the payload
    let (outcome, document) = if ctx.is_json() {
        let mut printer = TextPrinter::new(Vec::new());
        let outcome = listing.print(&mut job, &title, &mut printer)?;
        let document = String::from_utf8_lossy(&printer.into_inner()).into_owned();
        (outcome, Some(document))
    } else {
        let mut printer = TextPrinter::new(std::io::stdout().lock());
        (listing.print(&mut job, &title, &mut printer)?, None)
    };

    ctx.render(presenters::present_print(&title, outcome, rows, document).with_load_warnings(&warnings))
}
