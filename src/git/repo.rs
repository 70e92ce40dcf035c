use crate::error::{ContribError, Result};
use crate::model::{CommitKind, CommitRecord, CommitStats, DateRange, FileStats};
use chrono::{DateTime, FixedOffset};
use gix::object::tree::diff::ChangeDetached;
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use similar::{ChangeTag, TextDiff};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const BINARY_SNIFF_LEN: usize = 8192;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every commit reachable from HEAD whose author day falls in `range`, newest first.
    pub fn collect_records(&self, range: &DateRange) -> Result<Vec<CommitRecord>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut records = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Collecting commits...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let signature = commit.author()?;
            let time = signature.time()?;
            let timestamp = local_timestamp(time.seconds, time.offset)?;
            let author = signature.email.to_string();
            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();

            if !range.contains(timestamp.date_naive()) {
                stack.extend(parents);
                continue;
            }

            let kind = CommitKind::from_parent_count(parents.len());
            let stats = match kind {
                CommitKind::Merge => None,
                CommitKind::Normal => self.diff_or_warn(commit_id, |repo| {
                    repo.compute_diff_stats(commit_id, parents[0])
                }),
                CommitKind::Initial => self.diff_or_warn(commit_id, |repo| {
                    repo.compute_initial_commit_stats(commit_id)
                }),
            };

            records.push(CommitRecord {
                id: commit_id.to_string(),
                author,
                timestamp,
                kind,
                stats,
            });

            stack.extend(parents);
            pb.inc(1);
        }

        pb.finish_and_clear();

        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        debug!(count = records.len(), "collected commit records");
        Ok(records)
    }

    fn diff_or_warn<F>(&self, commit_id: ObjectId, compute: F) -> Option<CommitStats>
    where
        F: FnOnce(&Self) -> Result<CommitStats>,
    {
        match compute(self) {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!(commit = %commit_id, error = %e, "diff unavailable");
                None
            }
        }
    }

    fn compute_diff_stats(&self, commit_id: ObjectId, parent_id: ObjectId) -> Result<CommitStats> {
        let commit_tree = self.repo.find_commit(commit_id)?.tree()?;
        let parent_tree = self.repo.find_commit(parent_id)?.tree()?;

        let changes: Vec<ChangeDetached> = self.repo.diff_tree_to_tree(
            Some(&parent_tree),
            Some(&commit_tree),
            diff_options(),
        )?;

        let mut files = Vec::new();
        for change in changes {
            self.handle_change(change, &mut files)?;
        }

        Ok(CommitStats { files })
    }

    /// Root commit: every file of the snapshot counts as added in full.
    fn compute_initial_commit_stats(&self, commit_id: ObjectId) -> Result<CommitStats> {
        let commit_tree = self.repo.find_commit(commit_id)?.tree()?;
        let changes: Vec<ChangeDetached> =
            self.repo.diff_tree_to_tree(None, Some(&commit_tree), diff_options())?;

        let mut files = Vec::new();
        for change in changes {
            if let ChangeDetached::Addition { .. } = change {
                self.handle_change(change, &mut files)?;
            }
        }

        Ok(CommitStats { files })
    }

    fn handle_change(&self, change: ChangeDetached, files: &mut Vec<FileStats>) -> Result<()> {
        match change {
            ChangeDetached::Addition { id, location, .. } => {
                files.push(self.whole_file(id, location.to_string(), true)?);
            }
            ChangeDetached::Deletion { id, location, .. } => {
                files.push(self.whole_file(id, location.to_string(), false)?);
            }
            ChangeDetached::Modification {
                previous_id,
                id,
                location,
                ..
            } => {
                files.push(self.modified_file(previous_id, id, location.to_string())?);
            }
            ChangeDetached::Rewrite {
                source_id,
                id,
                source_location,
                location,
                copy,
                ..
            } => {
                // Only reachable if rewrite tracking gets turned on: count it
                // like an untracked move, source deleted and destination added.
                if !copy {
                    files.push(self.whole_file(source_id, source_location.to_string(), false)?);
                }
                files.push(self.whole_file(id, location.to_string(), true)?);
            }
        }
        Ok(())
    }

    /// A file added (`added == true`) or deleted in full.
    fn whole_file(&self, id: ObjectId, path: String, added: bool) -> Result<FileStats> {
        let obj = self.repo.find_object(id)?;
        let is_binary = is_binary_object(&obj);
        let lines = if is_binary { 0 } else { count_lines(&obj) };

        Ok(FileStats {
            path,
            added_lines: if added { lines } else { 0 },
            deleted_lines: if added { 0 } else { lines },
            is_binary,
        })
    }

    fn modified_file(&self, old_id: ObjectId, new_id: ObjectId, path: String) -> Result<FileStats> {
        let old_obj = self.repo.find_object(old_id)?;
        let new_obj = self.repo.find_object(new_id)?;
        let is_binary = is_binary_object(&old_obj) || is_binary_object(&new_obj);
        let (added_lines, deleted_lines) = if is_binary {
            (0, 0)
        } else {
            line_diff(&old_obj, &new_obj)
        };

        Ok(FileStats {
            path,
            added_lines,
            deleted_lines,
            is_binary,
        })
    }
}

/// Plain tree diff: a moved file is one deletion plus one addition.
fn diff_options() -> gix::diff::Options {
    gix::diff::Options::default().with_rewrites(None)
}

fn local_timestamp(seconds: i64, offset: i32) -> Result<DateTime<FixedOffset>> {
    let tz = FixedOffset::east_opt(offset)
        .ok_or_else(|| ContribError::InvalidDate(format!("Invalid timezone offset: {offset}")))?;
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.with_timezone(&tz))
        .ok_or_else(|| ContribError::InvalidDate(format!("Invalid timestamp: {seconds}")))
}

fn is_binary_object(object: &gix::Object) -> bool {
    object
        .data
        .as_slice()
        .iter()
        .take(BINARY_SNIFF_LEN)
        .any(|&b| b == 0)
}

fn count_lines(object: &gix::Object) -> u32 {
    String::from_utf8_lossy(object.data.as_slice()).lines().count() as u32
}

fn line_diff(old_object: &gix::Object, new_object: &gix::Object) -> (u32, u32) {
    let old_text = String::from_utf8_lossy(old_object.data.as_slice());
    let new_text = String::from_utf8_lossy(new_object.data.as_slice());

    let diff = TextDiff::from_lines(old_text.as_ref(), new_text.as_ref());
    let mut added = 0u32;
    let mut deleted = 0u32;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => added += 1,
            ChangeTag::Delete => deleted += 1,
            ChangeTag::Equal => {}
        }
    }
    (added, deleted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_keep_the_commit_offset() {
        // 2019-01-01T23:30:00Z is already 2019-01-02 at +02:00
        let ts = local_timestamp(1_546_385_400, 2 * 3600).unwrap();
        assert_eq!(ts.date_naive().to_string(), "2019-01-02");

        let utc = local_timestamp(1_546_385_400, 0).unwrap();
        assert_eq!(utc.date_naive().to_string(), "2019-01-01");
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        assert!(local_timestamp(0, 90_000).is_err());
    }
}
