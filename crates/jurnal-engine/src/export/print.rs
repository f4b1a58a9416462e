//! Print flow: switch to the detail projection, hand it to a printer, switch back.

use std::io::Write;

use serde::Serialize;

use super::{DetailBlock, detail_blocks};
use crate::error::{Error, Result};
use crate::record::{Record, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintState {
    /// Tabular view on screen.
    Idle,
    /// Detail projection being laid out for the full filtered set.
    Rendering,
    Printing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintOutcome {
    Completed,
    Cancelled,
}

/// Platform print dialog.
pub trait Printer {
    fn print(&mut self, title: &str, document: &str) -> Result<PrintOutcome>;
}

/// Writes the document to any writer, e.g. stdout piped to `lp`.
pub struct TextPrinter<W: Write> {
    out: W,
}

impl<W: Write> TextPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Printer for TextPrinter<W> {
    fn print(&mut self, _title: &str, document: &str) -> Result<PrintOutcome> {
        self.out.write_all(document.as_bytes())?;
        self.out.flush()?;
        Ok(PrintOutcome::Completed)
    }
}

/// `Idle -> Rendering -> Printing -> Idle`, returning to `Idle` however the
/// printer finishes.
#[derive(Debug)]
pub struct PrintJob {
    state: PrintState,
    history: Vec<PrintState>,
}

impl Default for PrintJob {
    fn default() -> Self {
        Self::new()
    }
}

/// Puts the job back to `Idle` when dropped, including on early return or panic.
struct Revert<'a>(&'a mut PrintJob);

impl Drop for Revert<'_> {
    fn drop(&mut self) {
        self.0.enter(PrintState::Idle);
    }
}

impl PrintJob {
    pub fn new() -> Self {
        Self {
            state: PrintState::Idle,
            history: vec![PrintState::Idle],
        }
    }

    pub fn state(&self) -> PrintState {
        self.state
    }

    /// Every state entered so far, starting with the initial `Idle`.
    pub fn history(&self) -> &[PrintState] {
        &self.history
    }

    fn enter(&mut self, state: PrintState) {
        tracing::debug!(from = ?self.state, to = ?state, "print state");
        self.state = state;
        self.history.push(state);
    }

    pub fn run<T, P>(
        &mut self,
        title: &str,
        items: &[T],
        ctx: &RenderContext<'_>,
        printer: &mut P,
    ) -> Result<PrintOutcome>
    where
        T: Record,
        P: Printer + ?Sized,
    {
        if items.is_empty() {
            return Err(Error::EmptyExport);
        }

        let guard = Revert(self);
        guard.0.enter(PrintState::Rendering);
        let document = render_text(title, &detail_blocks(items, ctx));

        guard.0.enter(PrintState::Printing);
        let outcome = printer.print(title, &document);
        if let Ok(outcome) = &outcome {
            tracing::info!(?outcome, rows = items.len(), "print finished");
        }
        outcome
    }
}

/// Plain-text detail projection with aligned labels.
pub fn render_text(title: &str, blocks: &[DetailBlock]) -> String {
    let width = blocks
        .iter()
        .flat_map(|b| b.fields.iter())
        .map(|f| f.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n\n", title);
    for block in blocks {
        out.push_str(&block.title);
        out.push('\n');
        for field in &block.fields {
            let pad = width - field.label.chars().count();
            out.push_str(&format!(
                "  {}{} : {}\n",
                field.label,
                " ".repeat(pad),
                field.value
            ));
        }
        out.push('\n');
    }
    out
}
