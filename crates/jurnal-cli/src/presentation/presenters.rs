// View model construction. Presenters read runtime state and never render.

use jurnal_engine::{ExportReport, PrintOutcome, Record, RenderContext, headers};
use jurnal_runtime::{Listing, LoadWarning};
use jurnal_types::EntityKind;

use super::view_models::{
    CommandResultViewModel, DetailViewModel, ExportViewModel, Guidance, ListingViewModel,
    MemberRow, MutationAction, MutationViewModel, OptionsViewModel, PrintViewModel, StatusBadge,
};

/// `flags` are the listing's other command-line options (scope, page size),
/// repeated in the next-page tip so it lands on the same visible set.
pub fn present_listing<T: Record>(
    listing: &Listing<T>,
    all_fields: bool,
    flags: &[String],
    warnings: &[LoadWarning],
) -> CommandResultViewModel<ListingViewModel> {
    let ctx = listing.context();
    let page = listing.page();
    let on_screen_only = !all_fields;

    let mut header_row = Vec::new();
    let mut ids = Vec::with_capacity(page.items.len());
    let mut rows = Vec::with_capacity(page.items.len());
    for item in page.items {
        let fields = item.fields(&ctx);
        if header_row.is_empty() {
            header_row = headers(&fields, on_screen_only)
                .into_iter()
                .map(str::to_string)
                .collect();
        }
        ids.push(item.id().to_string());
        rows.push(
            fields
                .into_iter()
                .filter(|f| all_fields || f.on_screen)
                .map(|f| f.value)
                .collect(),
        );
    }

    let first = if page.is_empty() { 0 } else { page.start_index + 1 };
    let content = ListingViewModel {
        entity: T::KIND.as_str().to_string(),
        filter: listing.filter().map(str::to_string),
        page: page.page,
        total_pages: page.total_pages,
        total_items: page.total_items,
        first,
        last: page.end_index,
        headers: header_row,
        ids,
        rows,
        pages: listing.page_numbers(),
    };

    let mut result = CommandResultViewModel::new(content).with_load_warnings(warnings);
    if page.has_next() {
        let mut command = format!("jurnal {} list", T::KIND);
        if let Some(filter) = listing.filter() {
            command.push_str(&format!(" --filter {}", filter));
        }
        for flag in flags {
            command.push(' ');
            command.push_str(flag);
        }
        command.push_str(&format!(" --page {}", page.page + 1));
        result = result.with_suggestion(Guidance::new("Next page").with_command(command));
    }
    result
}

pub fn present_options<T: Record>(
    listing: &Listing<T>,
    warnings: &[LoadWarning],
) -> CommandResultViewModel<OptionsViewModel> {
    let content = OptionsViewModel {
        entity: T::KIND.as_str().to_string(),
        options: listing.options(),
    };
    let result = CommandResultViewModel::new(content).with_load_warnings(warnings);
    if T::filter_key().is_none() {
        return result.with_badge(StatusBadge::info(format!(
            "{} listings have no filter",
            T::KIND.title()
        )));
    }
    result
}

pub fn present_detail<T: Record>(
    item: &T,
    ctx: &RenderContext<'_>,
    members: Vec<MemberRow>,
    warnings: &[LoadWarning],
) -> CommandResultViewModel<DetailViewModel> {
    let content = DetailViewModel {
        entity: T::KIND.as_str().to_string(),
        id: item.id().to_string(),
        title: format!("{} {}", T::KIND.title(), item.id()),
        fields: item.fields(ctx),
        members,
    };
    CommandResultViewModel::new(content).with_load_warnings(warnings)
}

pub fn present_mutation(
    kind: EntityKind,
    action: MutationAction,
    id: Option<String>,
) -> CommandResultViewModel<MutationViewModel> {
    let label = format!("{} {}", kind.title(), action);
    let suggestion = id.as_ref().filter(|_| action != MutationAction::Deleted).map(|id| {
        Guidance::new("Review the saved record").with_command(format!("jurnal {} show {}", kind, id))
    });

    let content = MutationViewModel {
        entity: kind.as_str().to_string(),
        action,
        id,
    };
    let result = CommandResultViewModel::new(content).with_badge(StatusBadge::success(label));
    match suggestion {
        Some(guide) => result.with_suggestion(guide),
        None => result,
    }
}

pub fn present_export(kind: EntityKind, report: ExportReport) -> CommandResultViewModel<ExportViewModel> {
    CommandResultViewModel::new(ExportViewModel {
        entity: kind.as_str().to_string(),
        report,
    })
}

pub fn present_print(
    title: &str,
    outcome: PrintOutcome,
    rows: usize,
    document: Option<String>,
) -> CommandResultViewModel<PrintViewModel> {
    let content = PrintViewModel {
        title: title.to_string(),
        outcome,
        rows,
        document,
    };
    match outcome {
        PrintOutcome::Completed => CommandResultViewModel::new(content),
        PrintOutcome::Cancelled => {
            CommandResultViewModel::new(content).with_badge(StatusBadge::warning("Print cancelled"))
        }
    }
}
