use chrono::{DateTime, Duration, Utc};

use crate::fetcher::Headline;

/// Filter, rank, and truncate the merged entry list.
///
/// An entry passes the recency filter when its publish time is within
/// `window` of `now`, or when it has no publish time at all — dateless
/// entries are kept and rank after every dated one. Pure function: the
/// caller supplies the clock.
pub fn select_top(
    mut entries: Vec<Headline>,
    now: DateTime<Utc>,
    window: Duration,
    limit: usize,
) -> Vec<Headline> {
    let cutoff = now - window;
    entries.retain(|e| e.published.map_or(true, |p| p >= cutoff));

    // Option orders None before Some, so comparing b to a sorts newest
    // first with dateless entries at the end. The sort is stable, which
    // keeps dateless entries in their original relative order.
    entries.sort_by(|a, b| b.published.cmp(&a.published));

    entries.truncate(limit);
    entries
}
