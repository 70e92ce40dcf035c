use crate::config::Granularity;
use crate::model::{AuthorDayMap, DayStats, IntervalBucket};
use chrono::NaiveDate;

/// Re-bucket one author's days over the shared `[min, max]` range.
///
/// The walk starts at the bucket boundary containing `min`, so buckets line
/// up across authors whatever their own activity window is.
pub fn bucketize(
    days: &AuthorDayMap,
    min: NaiveDate,
    max: NaiveDate,
    granularity: Granularity,
    include_empty: bool,
) -> Vec<IntervalBucket> {
    let Some(to) = max.succ_opt() else {
        return Vec::new();
    };

    let mut buckets = Vec::new();
    let mut from = granularity.align(min);

    while from < to {
        let end = granularity.advance(from);
        let stats = sum_days(days, from, end);

        if stats.commits > 0 || include_empty {
            buckets.push(IntervalBucket {
                start: from,
                additions: stats.additions,
                deletions: stats.deletions,
                commits: stats.commits,
            });
        }

        match end {
            Some(next) => from = next,
            None => break,
        }
    }

    buckets
}

/// Sum of every recorded day in `[start, end)`; `None` means unbounded.
fn sum_days(days: &AuthorDayMap, start: NaiveDate, end: Option<NaiveDate>) -> DayStats {
    start
        .iter_days()
        .take_while(|day| end.map_or(true, |end| *day < end))
        .filter_map(|day| days.get(&day))
        .sum()
}
