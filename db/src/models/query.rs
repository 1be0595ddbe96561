//! Listing options for `GET contents` and the lenient parsers that turn raw
//! query-string values into them. Every parser falls back to its default
//! instead of rejecting the request.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

use super::content::ContentType;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 25;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
}

/// `asc(field)` / `desc(field)` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortBy {
    pub field: SortField,
    #[serde(rename = "type")]
    pub direction: SortDirection,
}

impl Default for SortBy {
    fn default() -> Self {
        Self {
            field: SortField::UpdatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, rest) = s.trim().split_once('(').ok_or(())?;
        let field = rest.strip_suffix(')').ok_or(())?;
        Ok(Self {
            field: field.trim().parse().map_err(|_| ())?,
            direction: direction.trim().parse().map_err(|_| ())?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQueryOptions {
    pub sort_by: SortBy,
    pub page: u64,
    pub limit: u64,
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
}

impl Default for ContentQueryOptions {
    fn default() -> Self {
        Self {
            sort_by: SortBy::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            content_type: None,
        }
    }
}

impl ContentQueryOptions {
    /// Saturates instead of overflowing for absurdly large pages.
    pub fn skip(&self) -> usize {
        let skip = self.page.saturating_sub(1).saturating_mul(self.limit);
        usize::try_from(skip).unwrap_or(usize::MAX)
    }
}

pub fn parse_sort_by(raw: Option<&str>) -> SortBy {
    raw.and_then(|v| v.parse().ok()).unwrap_or_default()
}

pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(DEFAULT_PAGE)
}

/// Non-numeric or zero limits fall back to the default; large ones are clamped.
pub fn parse_limit(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|limit| *limit >= 1)
        .map(|limit| limit.min(MAX_LIMIT))
        .unwrap_or(DEFAULT_LIMIT)
}

pub fn parse_content_type(raw: Option<&str>) -> Option<ContentType> {
    raw.and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub previous: Option<u64>,
    #[serde(rename = "self")]
    pub current: u64,
    pub next: Option<u64>,
    pub limit: u64,
}

impl Pagination {
    pub fn new(options: &ContentQueryOptions, has_more: bool) -> Self {
        Self {
            previous: (options.page > 1).then(|| options.page - 1),
            current: options.page,
            next: has_more.then(|| options.page.saturating_add(1)),
            limit: options.limit,
        }
    }
}
