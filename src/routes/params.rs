use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    response::PageRequest,
};

/// Query string with one value per parameter. A repeated parameter keeps its last value.
#[derive(Debug, Default)]
pub struct QueryParams(HashMap<String, String>);

impl QueryParams {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    fn take(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self::from_pairs(pairs))
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<String>,
}

impl From<&mut QueryParams> for Pagination {
    fn from(params: &mut QueryParams) -> Self {
        Self {
            page: params.take("page"),
        }
    }
}

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let mut params = QueryParams::from_request_parts(parts, state).await?;
        Ok(Self::from(&mut params))
    }
}

impl Pagination {
    /// Resolve the requested page against the configured page size. Without a
    /// page size every list endpoint returns the full collection.
    pub fn page_request(&self, page_size: Option<u64>) -> AppResult<Option<PageRequest>> {
        let Some(page_size) = page_size else {
            return Ok(None);
        };
        let page = match self.page.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|page| *page >= 1)
                .ok_or(AppError::InvalidPage)?,
        };
        Ok(Some(PageRequest { page, page_size }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum WatchSortBy {
    Name,
    Price,
}

impl WatchSortBy {
    fn from_field(field: &str) -> Option<Self> {
        match field {
            "name" => Some(WatchSortBy::Name),
            "price" => Some(WatchSortBy::Price),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct WatchQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl From<QueryParams> for WatchQuery {
    fn from(mut params: QueryParams) -> Self {
        Self {
            pagination: Pagination::from(&mut params),
            search: params.take("search"),
            ordering: params.take("ordering"),
        }
    }
}

impl<S> FromRequestParts<S> for WatchQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = QueryParams::from_request_parts(parts, state).await?;
        Ok(Self::from(params))
    }
}

impl WatchQuery {
    pub fn search_terms(&self) -> Vec<String> {
        self.search.as_deref().map(search_terms).unwrap_or_default()
    }

    pub fn ordering(&self) -> Vec<(WatchSortBy, SortOrder)> {
        self.ordering.as_deref().map(parse_ordering).unwrap_or_default()
    }
}

/// Split a search value into terms on whitespace and commas. Every term has to match.
pub fn search_terms(raw: &str) -> Vec<String> {
    raw.replace('\0', "")
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `name,-price` style orderings, ignoring fields that cannot be sorted on.
pub fn parse_ordering(raw: &str) -> Vec<(WatchSortBy, SortOrder)> {
    raw.split(',')
        .map(str::trim)
        .filter_map(|term| {
            let (field, order) = match term.strip_prefix('-') {
                Some(field) => (field, SortOrder::Desc),
                None => (term, SortOrder::Asc),
            };
            WatchSortBy::from_field(field).map(|field| (field, order))
        })
        .collect()
}

/// Integer primary key taken from the `{id}` path segment. Anything that is not
/// an integer addresses no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryKey(pub i32);

impl<S> FromRequestParts<S> for PrimaryKey
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        raw.trim()
            .parse::<i32>()
            .map(PrimaryKey)
            .map_err(|_| AppError::NotFound)
    }
}
