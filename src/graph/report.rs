use super::bucket::bucketize;
use crate::config::ReportConfig;
use crate::model::{AuthorReport, ContributionIndex, ContributionReport, DayStats};
use tracing::debug;

/// Build the report: authors sorted by identity, every author bucketed over
/// the same global date range.
pub fn assemble(index: &ContributionIndex, config: &ReportConfig) -> ContributionReport {
    let mut report = ContributionReport {
        granularity: config.granularity,
        authors: Vec::new(),
    };

    let Some((min, max)) = index.date_limits() else {
        return report;
    };

    for author in index.sorted_authors() {
        let Some(days) = index.days(author) else {
            continue;
        };

        let totals: DayStats = days.values().sum();
        let buckets = bucketize(days, min, max, config.granularity, config.include_empty);
        debug!(author, buckets = buckets.len(), "bucketized author");

        report.authors.push(AuthorReport {
            author: author.to_string(),
            totals,
            buckets,
        });
    }

    report
}
