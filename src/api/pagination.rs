//! `?page=&limit=` handling shared by the list endpoints.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Serialize;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

/// Raw query parameters. Kept as strings so junk values fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Never rejects. A repeated key counts by its first occurrence.
#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Ok(Self::from_pairs(pairs))
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits. Trailing
/// garbage is ignored ("12abc" is 12); no digits at all is `None`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));
    Some(if negative { -magnitude } else { magnitude })
}

impl PageQuery {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" if query.page.is_none() => query.page = Some(value),
                "limit" if query.limit.is_none() => query.limit = Some(value),
                _ => {}
            }
        }
        query
    }

    /// 1-based page; anything unparsable, zero or negative is page 1
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|n| *n != 0)
            .unwrap_or(1)
            .max(1)
    }

    /// Clamped to `1..=MAX_LIMIT`; unparsable or zero means `DEFAULT_LIMIT`
    pub fn limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(parse_leading_int)
            .filter(|n| *n != 0)
            .unwrap_or(DEFAULT_LIMIT)
            .clamp(1, MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

/// One page of results plus totals, in the list-response shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T: Serialize> {
    pub items: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T: Serialize> Page<T> {
    pub fn new(items: Vec<T>, query: &PageQuery, total_items: i64) -> Self {
        let limit = query.limit();
        Self {
            items,
            page: query.page(),
            limit,
            total_items,
            total_pages: total_pages(total_items, limit),
        }
    }
}

/// `ceil(total / limit)`, never less than one
pub fn total_pages(total_items: i64, limit: i64) -> i64 {
    if total_items <= 0 || limit <= 0 {
        return 1;
    }
    ((total_items + limit - 1) / limit).max(1)
}
