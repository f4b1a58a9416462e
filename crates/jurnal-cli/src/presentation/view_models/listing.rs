use std::fmt;

use serde::Serialize;

use jurnal_engine::{ExportReport, FilterOption, PageToken, PrintOutcome};

use super::CreateView;

/// One page of a listing as table cells.
#[derive(Debug, Serialize)]
pub struct ListingViewModel {
    pub entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based position of the first row, 0 when empty.
    pub first: usize,
    pub last: usize,
    pub headers: Vec<String>,
    pub ids: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub pages: Vec<PageToken>,
}

#[derive(Debug, Serialize)]
pub struct OptionsViewModel {
    pub entity: String,
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub entity: String,
    #[serde(flatten)]
    pub report: ExportReport,
}

#[derive(Debug, Serialize)]
pub struct PrintViewModel {
    pub title: String,
    pub outcome: PrintOutcome,
    pub rows: usize,
    /// Only carried when the document was not written to the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

impl CreateView for ListingViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::listing::ListingView;
        Box::new(ListingView::new(self))
    }
}

impl CreateView for OptionsViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::listing::OptionsView;
        Box::new(OptionsView::new(self))
    }
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::listing::ExportView;
        Box::new(ExportView::new(self))
    }
}

impl CreateView for PrintViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::listing::PrintView;
        Box::new(PrintView::new(self))
    }
}
