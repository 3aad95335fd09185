use serde::Serialize;

use crate::params::Params;

/// Pagination parameters as received. Kept as strings so that garbage input
/// falls back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl PageParams {
    pub fn from_params(params: &Params) -> Self {
        Self {
            page: params.owned("page"),
            per_page: params.owned("per_page"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub page: usize,
    pub per_page: usize,
}

impl Page {
    pub fn new(page: usize, per_page: usize, max_per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, max_per_page.max(1)),
        }
    }

    pub fn from_params(params: &PageParams, default_per_page: usize, max_per_page: usize) -> Self {
        let parse = |value: &Option<String>| value.as_deref().and_then(|v| v.trim().parse().ok());
        Self::new(
            parse(&params.page).unwrap_or(1),
            parse(&params.per_page).unwrap_or(default_per_page),
            max_per_page,
        )
    }

    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }
}

/// One page of results plus the counts a client needs to paginate.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T: Serialize> {
    pub articles: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(page: Page, total: usize, articles: Vec<T>) -> Self {
        Self {
            articles,
            total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages(total),
        }
    }
}
