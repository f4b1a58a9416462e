use std::fmt;

use jurnal_engine::PageToken;

use crate::presentation::view_models::{
    ExportViewModel, ListingViewModel, OptionsViewModel, PrintViewModel,
};

// --------------------------------------------------------
// Listing View
// --------------------------------------------------------

pub struct ListingView<'a> {
    data: &'a ListingViewModel,
}

impl<'a> ListingView<'a> {
    pub fn new(data: &'a ListingViewModel) -> Self {
        Self { data }
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = std::iter::once(2)
            .chain(self.data.headers.iter().map(|h| h.chars().count()))
            .collect();
        for (id, row) in self.data.ids.iter().zip(&self.data.rows) {
            widths[0] = widths[0].max(id.chars().count());
            for (i, cell) in row.iter().enumerate() {
                widths[i + 1] = widths[i + 1].max(cell.chars().count().min(MAX_CELL));
            }
        }
        widths
    }
}

const MAX_CELL: usize = 40;

fn clip(text: &str) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= MAX_CELL {
        return single_line;
    }
    let mut clipped: String = single_line.chars().take(MAX_CELL - 1).collect();
    clipped.push('…');
    clipped
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn page_strip(tokens: &[PageToken], current: usize) -> String {
    tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(n) if *n == current => format!("[{}]", n),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl<'a> fmt::Display for ListingView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        if let Some(filter) = &data.filter {
            writeln!(f, "Filter: {}", filter)?;
        }

        if data.rows.is_empty() {
            writeln!(f, "No {} records.", data.entity)?;
            return Ok(());
        }

        let widths = self.widths();
        let header: Vec<String> = std::iter::once("ID")
            .chain(data.headers.iter().map(String::as_str))
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        writeln!(f, "{}", header.join("  ").trim_end())?;
        writeln!(f, "{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)))?;

        for (id, row) in data.ids.iter().zip(&data.rows) {
            let cells: Vec<String> = std::iter::once(id.clone())
                .chain(row.iter().map(|c| clip(c)))
                .zip(&widths)
                .map(|(c, w)| pad(&c, *w))
                .collect();
            writeln!(f, "{}", cells.join("  ").trim_end())?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Showing {}-{} of {} (page {} of {})",
            data.first, data.last, data.total_items, data.page, data.total_pages
        )?;
        if data.total_pages > 1 {
            writeln!(f, "Pages: {}", page_strip(&data.pages, data.page))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Filter Options View
// --------------------------------------------------------

pub struct OptionsView<'a> {
    data: &'a OptionsViewModel,
}

impl<'a> OptionsView<'a> {
    pub fn new(data: &'a OptionsViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for OptionsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.options.is_empty() {
            writeln!(f, "No filter values for {}.", self.data.entity)?;
            return Ok(());
        }
        let width = self
            .data
            .options
            .iter()
            .map(|o| o.id.chars().count())
            .max()
            .unwrap_or(0);
        for option in &self.data.options {
            writeln!(f, "{}  {}", pad(&option.id, width), option.label)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Export View
// --------------------------------------------------------

pub struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> ExportView<'a> {
    pub fn new(data: &'a ExportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let report = &self.data.report;
        writeln!(
            f,
            "Exported {} {} records as {}",
            report.row_count, self.data.entity, report.format
        )?;
        match &report.path {
            Some(path) => writeln!(f, "Saved to {}", path.display()),
            None => writeln!(f, "File: {}", report.file_name),
        }
    }
}

// --------------------------------------------------------
// Print View
// --------------------------------------------------------

pub struct PrintView<'a> {
    data: &'a PrintViewModel,
}

impl<'a> PrintView<'a> {
    pub fn new(data: &'a PrintViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PrintView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(document) = &self.data.document {
            write!(f, "{}", document)?;
        }
        Ok(())
    }
}
