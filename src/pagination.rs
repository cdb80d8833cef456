//! Fixed-size paging over ordered question listings.

use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// A validated, 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: i64) -> Option<Page> {
        usize::try_from(number).ok().filter(|n| *n >= 1).map(Page)
    }

    pub fn number(self) -> usize {
        self.0
    }

    /// Returns the items of this page; pages past the end are empty.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = (self.0 - 1).saturating_mul(QUESTIONS_PER_PAGE);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
        &items[start..end]
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> Option<Page> {
        match self.page {
            Some(number) => Page::new(number),
            None => Some(Page::FIRST),
        }
    }
}

pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    page.slice(items).to_vec()
}
