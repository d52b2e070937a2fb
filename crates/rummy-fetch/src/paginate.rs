//! Paginated listing with the early-stop heuristic.
//!
//! The listing endpoint returns items newest first. Once the oldest item
//! collected so far predates the start of the requested range, no later page
//! can hold an in-range item and paging stops. This ordering is assumed, not
//! verified: a service that interleaves old and new items on early pages makes
//! the fetch silently incomplete.

use chrono::NaiveDateTime;
use rummy_types::{DateRange, Result, RummyError};
use std::future::Future;
use tracing::debug;

/// Maximum number of pages fetched before giving up on a listing.
pub const MAX_PAGES: usize = 10_000;

/// A batch of already-filtered items plus the continuation token.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Token for the next page, absent on the last one.
    pub next_page_token: Option<String>,
}

/// Result of a paginated listing.
#[derive(Debug, Clone)]
pub struct Collected<T> {
    /// Items within the requested range.
    pub items: Vec<T>,
    /// Number of pages requested.
    pub pages: usize,
    /// Whether the early stop ended the listing before the last page.
    pub stopped_early: bool,
}

/// Drives a page-fetching function until the listing is exhausted or the
/// early stop fires.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    max_pages: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(MAX_PAGES)
    }
}

impl Paginator {
    /// Creates a paginator that fetches at most `max_pages` pages.
    #[must_use]
    pub const fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Fetches pages through `fetch_page` and returns the items in `range`.
    ///
    /// `fetch_page` receives the continuation token (`None` for the first
    /// page). `date_of` yields each item's capture date.
    ///
    /// # Errors
    ///
    /// Returns the first error from `fetch_page` or `date_of`, or an error if
    /// the page limit is exceeded.
    pub async fn collect<T, F, Fut, D>(
        &self,
        range: DateRange,
        mut fetch_page: F,
        date_of: D,
    ) -> Result<Collected<T>>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
        D: Fn(&T) -> Result<NaiveDateTime>,
    {
        let mut items: Vec<T> = Vec::new();
        let mut oldest: Option<NaiveDateTime> = None;
        let mut token: Option<String> = None;
        let mut pages = 0;
        let mut stopped_early = false;

        loop {
            if pages >= self.max_pages {
                return Err(RummyError::Http(format!(
                    "listing exceeded {} pages, last token {:?}",
                    self.max_pages, token
                )));
            }

            pages += 1;
            debug!(page = pages, "fetching page");
            let page = fetch_page(token.take()).await?;
            debug!(page = pages, items = page.items.len(), "received page");

            for item in &page.items {
                let date = date_of(item)?;
                oldest = Some(oldest.map_or(date, |o| o.min(date)));
            }
            items.extend(page.items);

            if let Some(oldest) = oldest.filter(|o| range.precedes(*o)) {
                debug!(
                    page = pages,
                    %oldest,
                    start = %range.start,
                    "oldest item predates range, stopping"
                );
                stopped_early = page.next_page_token.is_some();
                break;
            }

            match page.next_page_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        let mut in_range = Vec::with_capacity(items.len());
        for item in items {
            if range.contains(date_of(&item)?) {
                in_range.push(item);
            }
        }

        debug!(
            pages,
            candidates = in_range.len(),
            stopped_early,
            "pagination complete"
        );

        Ok(Collected {
            items: in_range,
            pages,
            stopped_early,
        })
    }
}
