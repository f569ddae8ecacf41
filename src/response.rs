use axum::http::Uri;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Rows skipped before this page; `None` when the page lies beyond any addressable row.
    pub fn offset(&self) -> Option<u64> {
        self.page.checked_sub(1)?.checked_mul(self.page_size)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Body of a list endpoint: a bare array unless pagination is configured.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Plain(Vec<T>),
    Paged(Page<T>),
}

/// Rows fetched for a list endpoint, with the total when a page was requested.
#[derive(Debug)]
pub struct Listed<T> {
    pub items: Vec<T>,
    pub page: Option<(PageRequest, u64)>,
}

impl<T> Listed<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listed<U> {
        Listed {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
        }
    }

    pub fn into_listing(self, uri: &Uri) -> Listing<T> {
        match self.page {
            None => Listing::Plain(self.items),
            Some((request, count)) => {
                let next = request
                    .page
                    .checked_mul(request.page_size)
                    .is_some_and(|seen| seen < count)
                    .then(|| page_link(uri, Some(request.page + 1)));
                let previous = match request.page {
                    1 => None,
                    2 => Some(page_link(uri, None)),
                    n => Some(page_link(uri, Some(n - 1))),
                };
                Listing::Paged(Page {
                    count,
                    next,
                    previous,
                    results: self.items,
                })
            }
        }
    }
}

/// The request path with its `page` parameter replaced, or dropped for the first page.
fn page_link(uri: &Uri, page: Option<u64>) -> String {
    let mut params: Vec<String> = uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty() && *pair != "page" && !pair.starts_with("page="))
        .map(str::to_string)
        .collect();
    if let Some(page) = page {
        params.push(format!("page={page}"));
    }
    if params.is_empty() {
        uri.path().to_string()
    } else {
        format!("{}?{}", uri.path(), params.join("&"))
    }
}
