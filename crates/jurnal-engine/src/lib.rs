// Engine module - the list pipeline shared by every listing page
// Gateway data flows: filter/sort -> paginate -> table, and filter/sort -> export

pub mod collate;
pub mod error;
pub mod export;
pub mod label;
pub mod pagination;
pub mod query;
pub mod record;
pub mod time;

pub use error::{Error, Result};
pub use export::{
    Artifact, DetailBlock, ExportFormat, ExportReport, PrintJob, PrintOutcome, PrintState,
    Printer, Table, TextPrinter, detail_blocks, export, file_name, table,
};
pub use label::{
    LabelIndex, LabelIndices, PLACEHOLDER, RefView, resolve_label, resolve_list,
    text_or_placeholder,
};
pub use pagination::{Page, PageCursor, PageToken, page_numbers, paginate};
pub use query::{FilterOption, RefKey, SortKey, filter_and_sort, filter_options};
pub use record::{Field, Record, RenderContext, headers};
pub use time::TimestampFormat;
