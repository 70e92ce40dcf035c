use crate::error::{ContribError, Result};
use crate::model::{CommitKind, CommitRecord, ContributionIndex};
use tracing::debug;

/// Fold commit records into per-author, per-day totals.
///
/// Merge commits are counted as commits but carry no line changes. A normal
/// or initial commit without stats aborts the whole fold: dropping it would
/// under-count every total downstream.
pub fn accumulate<I>(records: I, author_filter: Option<&str>) -> Result<ContributionIndex>
where
    I: IntoIterator<Item = CommitRecord>,
{
    let author_filter = author_filter.filter(|a| !a.is_empty());
    let mut index = ContributionIndex::new();

    for record in records {
        if let Some(wanted) = author_filter {
            if record.author != wanted {
                continue;
            }
        }

        let day = index.day_mut(&record.author, record.day());

        match (record.kind, &record.stats) {
            (CommitKind::Merge, _) => {}
            (CommitKind::Normal, Some(stats)) => {
                day.files_changed += stats.files.len() as u64;
                day.additions += stats.added_lines();
                day.deletions += stats.deleted_lines();
            }
            (CommitKind::Initial, Some(stats)) => {
                day.files_changed += stats.files.len() as u64;
                day.additions += stats.added_lines();
            }
            (CommitKind::Normal, None) => {
                return Err(ContribError::DiffUnavailable {
                    commit: record.id,
                    author: record.author,
                });
            }
            (CommitKind::Initial, None) => {
                return Err(ContribError::InitialCommitStats { commit: record.id });
            }
        }

        day.commits += 1;
    }

    debug!(authors = index.len(), "accumulated contributions");
    Ok(index)
}
