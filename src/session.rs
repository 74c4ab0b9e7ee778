//! Scan session state
//!
//! One [`ScanSession`] owns everything a scan displays: the full result
//! set from the last response, the filtered view derived from it, the
//! active filter, the sort mode, and the aggregate counters. Both the TUI
//! and the one-shot command render from this struct, so the
//! filter/sort/export semantics exist in exactly one place.

use crate::models::{ScanResponse, ScanResult};

/// Keys the sort cycle steps through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Subdomain,
    StatusCode,
    ResponseTime,
    ContentLength,
}

impl SortKey {
    pub fn next(self) -> SortKey {
        match self {
            SortKey::Subdomain => SortKey::StatusCode,
            SortKey::StatusCode => SortKey::ResponseTime,
            SortKey::ResponseTime => SortKey::ContentLength,
            SortKey::ContentLength => SortKey::Subdomain,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Subdomain => "subdomain",
            SortKey::StatusCode => "status code",
            SortKey::ResponseTime => "response time",
            SortKey::ContentLength => "content length",
        }
    }
}

/// Active filter over the full result set.
#[derive(Debug, Clone, Default)]
pub struct ResultFilter {
    /// Case-insensitive substring matched against subdomain and title.
    pub search: String,
    /// Exact status code, when set.
    pub status_code: Option<u16>,
}

impl ResultFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status_code.is_none()
    }

    fn matches(&self, result: &ScanResult) -> bool {
        let search = self.search.trim().to_lowercase();
        let matches_search = search.is_empty()
            || result.subdomain.to_lowercase().contains(&search)
            || result.title.to_lowercase().contains(&search);

        let matches_status = self
            .status_code
            .map_or(true, |code| result.status_code == code);

        matches_search && matches_status
    }
}

/// Aggregate counters from the last response.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStats {
    pub wordlist_size: usize,
    pub total_checked: usize,
    pub found_count: usize,
}

impl ScanStats {
    /// Success rate as displayed: found/checked x 100 with two decimals,
    /// exactly `0%` when nothing was checked.
    pub fn success_rate_display(&self) -> String {
        if self.total_checked == 0 {
            return "0%".to_string();
        }
        let rate = self.found_count as f64 / self.total_checked as f64 * 100.0;
        format!("{:.2}%", rate)
    }
}

/// All state for one scan session.
#[derive(Debug, Default)]
pub struct ScanSession {
    domain: String,
    results: Vec<ScanResult>,
    filtered: Vec<ScanResult>,
    filter: ResultFilter,
    sort: SortKey,
    stats: ScanStats,
    loaded: bool,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session contents with a fresh response. The previous
    /// result set is discarded wholesale, the filter resets, and the
    /// filtered view becomes the full set in service order.
    pub fn load(&mut self, response: ScanResponse) {
        self.domain = response.domain;
        self.stats = ScanStats {
            wordlist_size: response.wordlist_size,
            total_checked: response.total_checked,
            found_count: response.found_count,
        };
        self.results = response.subdomains;
        self.filter = ResultFilter::default();
        self.filtered = self.results.clone();
        self.loaded = true;
    }

    /// Recompute the filtered view from the full result set. Idempotent:
    /// the view depends only on the full set and the filter, never on the
    /// previous view.
    pub fn apply_filter(&mut self, filter: ResultFilter) {
        self.filter = filter;
        self.filtered = self
            .results
            .iter()
            .filter(|r| self.filter.matches(r))
            .cloned()
            .collect();
    }

    /// Advance the sort cycle and re-sort the filtered view in place.
    /// Returns the key now in effect. Sorting is stable, missing numeric
    /// fields order as zero, and content length sorts largest first.
    pub fn cycle_sort(&mut self) -> SortKey {
        self.sort = self.sort.next();
        self.sort_filtered();
        self.sort
    }

    fn sort_filtered(&mut self) {
        match self.sort {
            SortKey::Subdomain => self
                .filtered
                .sort_by(|a, b| a.subdomain.to_lowercase().cmp(&b.subdomain.to_lowercase())),
            SortKey::StatusCode => self.filtered.sort_by_key(|r| r.status_code),
            SortKey::ResponseTime => self.filtered.sort_by(|a, b| {
                a.response_time
                    .unwrap_or(0.0)
                    .total_cmp(&b.response_time.unwrap_or(0.0))
            }),
            SortKey::ContentLength => self.filtered.sort_by(|a, b| {
                b.content_length
                    .unwrap_or(0)
                    .cmp(&a.content_length.unwrap_or(0))
            }),
        }
    }

    /// Whether a scan response has been loaded this session.
    pub fn has_results(&self) -> bool {
        self.loaded
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn results(&self) -> &[ScanResult] {
        &self.results
    }

    /// The current filtered view, always a subset of [`results`].
    ///
    /// [`results`]: ScanSession::results
    pub fn filtered(&self) -> &[ScanResult] {
        &self.filtered
    }

    pub fn filter(&self) -> &ResultFilter {
        &self.filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }
}
