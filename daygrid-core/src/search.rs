//! Keyword search with page-based pagination.

use serde::{Deserialize, Serialize};

use crate::error::{DayGridError, DayGridResult};
use crate::event::Event;

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub limit: i64,
    pub page: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// One page of matching events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub list: Vec<Event>,
    pub page_meta: PageMeta,
}

/// Return page `page` (1-based) of events whose title contains `keyword`,
/// ignoring case. An empty keyword matches every event.
///
/// Matches are counted before paging, so `total` covers every match. Pages past
/// the end come back empty rather than failing.
pub fn search(events: &[Event], keyword: &str, page: i64, limit: i64) -> DayGridResult<PageResult> {
    if page < 1 || limit < 1 {
        return Err(DayGridError::InvalidPagination { page, limit });
    }

    let needle = keyword.to_lowercase();

    let mut matches: Vec<&Event> = events
        .iter()
        .filter(|e| needle.is_empty() || e.title.to_lowercase().contains(&needle))
        .collect();
    matches.sort_by_key(|e| e.chronological_key());

    let total = matches.len() as i64;
    let total_pages = if total == 0 { 0 } else { (total - 1) / limit + 1 };

    // (page - 1) * limit can overflow for absurd pages; those are past the end anyway
    let skip = (page - 1).saturating_mul(limit);
    let list = usize::try_from(skip)
        .map(|skip| {
            matches
                .into_iter()
                .skip(skip)
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    Ok(PageResult {
        list,
        page_meta: PageMeta {
            limit,
            page,
            total,
            total_pages,
        },
    })
}
