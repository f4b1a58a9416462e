//! Presentation state of one list view: the loaded collection, the active
//! filter, the derived visible set and the page cursor.
//!
//! The visible set is recomputed after every change and the cursor is kept
//! in range against it. Mutations patch the local collection only after the
//! gateway confirmed them, so a failed call leaves the listing untouched.

use jurnal_engine::{
    Artifact, ExportFormat, FilterOption, LabelIndices, Page, PageCursor, PageToken, PrintJob,
    PrintOutcome, Printer, Record, RenderContext, TimestampFormat, export, filter_and_sort,
    filter_options, page_numbers,
};

use crate::Result;
use crate::board::Board;
use crate::client::{Client, Resource};

#[derive(Debug, Clone)]
pub struct Listing<T> {
    items: Vec<T>,
    labels: LabelIndices,
    time: TimestampFormat,
    filter: Option<String>,
    visible: Vec<T>,
    cursor: PageCursor,
}

impl<T: Record> Listing<T> {
    pub fn new(items: Vec<T>, labels: LabelIndices, time: TimestampFormat, page_size: usize) -> Self {
        let mut listing = Self {
            items,
            labels,
            time,
            filter: None,
            visible: Vec::new(),
            cursor: PageCursor::new(page_size),
        };
        listing.refresh();
        listing
    }

    pub fn from_board(board: Board<T>, time: TimestampFormat, page_size: usize) -> Self {
        Self::new(board.items, board.labels, time, page_size)
    }

    pub fn context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.labels, self.time)
    }

    pub fn labels(&self) -> &LabelIndices {
        &self.labels
    }

    /// Everything loaded, ignoring the filter.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Filtered and sorted, across all pages.
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Changing the filter always goes back to the first page. Entities
    /// without a filter reference keep no filter at all.
    pub fn set_filter(&mut self, value: Option<&str>) {
        self.filter = value
            .filter(|_| T::filter_key().is_some())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        self.cursor.reset();
        self.refresh();
    }

    pub fn page(&self) -> Page<'_, T> {
        self.cursor.slice(&self.visible)
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    pub fn go(&mut self, page: usize) {
        self.cursor.go(page);
    }

    pub fn next_page(&mut self) {
        self.cursor.next();
    }

    pub fn prev_page(&mut self) {
        self.cursor.prev();
    }

    pub fn page_numbers(&self) -> Vec<PageToken> {
        page_numbers(self.cursor.page(), self.cursor.total_pages())
    }

    /// Filter dropdown derived from the whole collection, not the visible set.
    pub fn options(&self) -> Vec<FilterOption> {
        match T::filter_key() {
            Some(key) => {
                let index = T::filter_kind().and_then(|kind| self.labels.for_kind(kind));
                filter_options(&self.items, key, index)
            }
            None => Vec::new(),
        }
    }

    /// Export and print are disabled while nothing is visible.
    pub fn can_export(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Encodes the full visible set, never just the current page.
    pub fn export(&self, format: ExportFormat) -> Result<Artifact> {
        Ok(export(&self.visible, format, &self.context(), self.filter())?)
    }

    pub fn print<P: Printer + ?Sized>(
        &self,
        job: &mut PrintJob,
        title: &str,
        printer: &mut P,
    ) -> Result<PrintOutcome> {
        Ok(job.run(title, &self.visible, &self.context(), printer)?)
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.refresh();
    }

    pub fn apply_created(&mut self, record: T) {
        self.items.push(record);
        self.refresh();
    }

    /// Replaces the record with the same id; unknown ids are appended.
    pub fn apply_updated(&mut self, record: T) {
        match self.items.iter_mut().find(|item| item.id() == record.id()) {
            Some(slot) => *slot = record,
            None => self.items.push(record),
        }
        self.refresh();
    }

    pub fn apply_deleted(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed {
            self.refresh();
        }
        removed
    }

    fn refresh(&mut self) {
        let ctx = RenderContext::new(&self.labels, self.time);
        let sort = T::default_sort(&ctx);
        self.visible = filter_and_sort(&self.items, T::filter_key(), self.filter.as_deref(), &sort);
        self.cursor.sync_total(self.visible.len());
    }
}

impl<T: Resource> Listing<T> {
    /// Creates through the gateway; refetches when the reply had no record.
    pub async fn create(&mut self, client: &Client, draft: &T::Draft) -> Result<()> {
        match client.create::<T>(draft).await? {
            Some(record) => self.apply_created(record),
            None => self.replace_all(client.list::<T>().await?),
        }
        Ok(())
    }

    pub async fn update(&mut self, client: &Client, id: &str, draft: &T::Draft) -> Result<()> {
        match client.update::<T>(id, draft).await? {
            Some(record) => self.apply_updated(record),
            None => self.replace_all(client.list::<T>().await?),
        }
        Ok(())
    }

    pub async fn delete(&mut self, client: &Client, id: &str) -> Result<()> {
        client.delete::<T>(id).await?;
        self.apply_deleted(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jurnal_types::{Kelas, Ref, Siswa};

    fn siswa(id: &str, nama: &str, kelas: &str) -> Siswa {
        Siswa {
            id: id.into(),
            nama: Some(nama.into()),
            kelas: Some(Ref::bare(kelas)),
            ..Default::default()
        }
    }

    fn labels() -> LabelIndices {
        let kelas = vec![
            Kelas {
                id: "c1".into(),
                nama_kelas: Some("7A".into()),
                ..Default::default()
            },
            Kelas {
                id: "c2".into(),
                nama_kelas: Some("7B".into()),
                ..Default::default()
            },
        ];
        LabelIndices {
            kelas: jurnal_engine::LabelIndex::from_entities(&kelas),
            ..Default::default()
        }
    }

    fn listing() -> Listing<Siswa> {
        let mut items: Vec<Siswa> = (0..12)
            .map(|i| siswa(&format!("a{:02}", i), &format!("Ani {:02}", i), "c1"))
            .collect();
        items.push(siswa("b1", "Budi", "c2"));
        Listing::new(items, labels(), TimestampFormat::default(), 5)
    }

    #[test]
    fn test_filter_resets_page_and_clamps() {
        let mut listing = listing();
        listing.go(3);
        assert_eq!(listing.page().page, 3);

        listing.set_filter(Some("c2"));
        assert_eq!(listing.cursor().page(), 1);
        assert_eq!(listing.visible().len(), 1);
        assert_eq!(listing.page().items[0].id, "b1");
    }

    #[test]
    fn test_delete_on_last_page_pulls_cursor_back() {
        let mut listing = listing();
        listing.go(3);
        assert_eq!(listing.page().items.len(), 3);
        for id in ["a10", "a11", "b1"] {
            assert!(listing.apply_deleted(id));
        }
        assert_eq!(listing.cursor().page(), 2);
        assert!(!listing.apply_deleted("missing"));
    }

    #[test]
    fn test_options_use_class_index() {
        let options = listing().options();
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["7A", "7B"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut listing = listing();
        listing.apply_updated(siswa("b1", "Budi Santoso", "c1"));
        assert_eq!(listing.items().len(), 13);
        listing.set_filter(Some("c2"));
        assert!(!listing.can_export());
    }

    #[test]
    fn test_filter_ignored_without_filter_reference() -> Result<()> {
        let kelas = vec![Kelas {
            id: "c1".into(),
            nama_kelas: Some("7A".into()),
            ..Default::default()
        }];
        let mut listing = Listing::new(kelas, LabelIndices::default(), TimestampFormat::default(), 5);
        listing.set_filter(Some("x"));
        assert_eq!(listing.filter(), None);
        assert_eq!(listing.visible().len(), 1);

        let artifact = listing.export(ExportFormat::Sheet)?;
        assert_eq!(artifact.file_name, "kelas_detail.csv");
        Ok(())
    }

    #[test]
    fn test_filtered_export_names_the_filter() -> Result<()> {
        let mut listing = listing();
        listing.set_filter(Some("c2"));
        let artifact = listing.export(ExportFormat::Sheet)?;
        assert_eq!(artifact.file_name, "siswa_detail_filtered_c2.csv");
        assert_eq!(artifact.row_count, 1);
        Ok(())
    }

    #[test]
    fn test_export_covers_every_page() -> Result<()> {
        let listing = listing();
        let artifact = listing.export(ExportFormat::Sheet)?;
        assert_eq!(artifact.row_count, 13);
        Ok(())
    }
}
