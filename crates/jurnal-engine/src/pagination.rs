//! Page slicing and the compressed page-number strip shown under tables.

use std::fmt;

use serde::Serialize;

/// Visible slice of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, already clamped into `[1, total_pages]`.
    pub page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size).max(1)
}

/// Slices `items` for 1-based `page`. Out-of-range pages are clamped and a
/// zero page size is treated as 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let page = page.clamp(1, total_pages);

    let start_index = ((page - 1) * page_size).min(total_items);
    let end_index = (start_index + page_size).min(total_items);

    Page {
        items: &items[start_index..end_index],
        page,
        total_items,
        total_pages,
        start_index,
        end_index,
    }
}

/// Current page of a listing, kept in range as the underlying set changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Records a new collection size and pulls the page back into range.
    pub fn sync_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = self.page.clamp(1, self.total_pages());
    }

    /// Back to the first page; callers do this whenever the filter changes.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn go(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next(&mut self) {
        self.go(self.page + 1);
    }

    pub fn prev(&mut self) {
        self.go(self.page.saturating_sub(1));
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.page, self.page_size)
    }
}

/// Entry in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u64(*n as u64),
            PageToken::Ellipsis => serializer.serialize_str("…"),
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{}", n),
            PageToken::Ellipsis => write!(f, "…"),
        }
    }
}

/// Page numbers for pagination controls.
///
/// Up to seven pages are listed in full. Beyond that the strip keeps the
/// first and last page plus the current page's neighbours, with an ellipsis
/// standing in for each gap.
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<PageToken> {
    let total_pages = total_pages.max(1);
    if total_pages <= 7 {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let current = current.clamp(1, total_pages);
    let near: Vec<usize> = [current.saturating_sub(1), current, current + 1]
        .into_iter()
        .filter(|p| (1..=total_pages).contains(p))
        .collect();

    let mut tokens = vec![PageToken::Page(1)];
    if near.first().is_some_and(|&p| p > 2) {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend(
        near.iter()
            .copied()
            .filter(|&p| p != 1 && p != total_pages)
            .map(PageToken::Page),
    );
    if near.last().is_some_and(|&p| p < total_pages - 1) {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Page(total_pages));
    tokens
}
