use crate::config::Granularity;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitKind {
    /// No parent: stats come from the full snapshot.
    Initial,
    Normal,
    /// More than one parent: counted as a commit, never as changed lines.
    Merge,
}

impl CommitKind {
    pub fn from_parent_count(parents: usize) -> Self {
        match parents {
            0 => CommitKind::Initial,
            1 => CommitKind::Normal,
            _ => CommitKind::Merge,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStats {
    pub path: String,
    pub added_lines: u32,
    pub deleted_lines: u32,
    pub is_binary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitStats {
    pub files: Vec<FileStats>,
}

impl CommitStats {
    pub fn added_lines(&self) -> u64 {
        self.files.iter().map(|f| f.added_lines as u64).sum()
    }

    pub fn deleted_lines(&self) -> u64 {
        self.files.iter().map(|f| f.deleted_lines as u64).sum()
    }
}

/// One commit as delivered by the history source.
#[derive(Debug, Clone)]
pub struct CommitRecord {
    pub id: String,
    pub author: String,
    pub timestamp: DateTime<FixedOffset>,
    pub kind: CommitKind,
    /// `None` when the source could not produce a diff for this commit.
    pub stats: Option<CommitStats>,
}

impl CommitRecord {
    /// Calendar day in the commit's own timezone.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub commits: u64,
    #[serde(skip)]
    pub files_changed: u64,
    #[serde(rename = "insertions")]
    pub additions: u64,
    pub deletions: u64,
}

impl AddAssign for DayStats {
    fn add_assign(&mut self, other: Self) {
        self.commits += other.commits;
        self.files_changed += other.files_changed;
        self.additions += other.additions;
        self.deletions += other.deletions;
    }
}

impl<'a> std::iter::Sum<&'a DayStats> for DayStats {
    fn sum<I: Iterator<Item = &'a DayStats>>(iter: I) -> Self {
        iter.fold(DayStats::default(), |mut acc, day| {
            acc += *day;
            acc
        })
    }
}

pub type AuthorDayMap = HashMap<NaiveDate, DayStats>;

/// author -> calendar day -> totals
#[derive(Debug, Clone, Default)]
pub struct ContributionIndex {
    authors: HashMap<String, AuthorDayMap>,
}

impl ContributionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    /// Entry for `(author, day)`, created zeroed on first touch.
    pub fn day_mut(&mut self, author: &str, day: NaiveDate) -> &mut DayStats {
        self.authors
            .entry(author.to_string())
            .or_default()
            .entry(day)
            .or_default()
    }

    pub fn days(&self, author: &str) -> Option<&AuthorDayMap> {
        self.authors.get(author)
    }

    /// Author identities in ascending order.
    pub fn sorted_authors(&self) -> Vec<&str> {
        let mut authors: Vec<&str> = self.authors.keys().map(String::as_str).collect();
        authors.sort_unstable();
        authors
    }

    /// Earliest and latest day across every author, `None` when empty.
    pub fn date_limits(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.authors
            .values()
            .flat_map(|days| days.keys().copied())
            .fold(None, |limits, day| match limits {
                None => Some((day, day)),
                Some((min, max)) => Some((min.min(day), max.max(day))),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalBucket {
    #[serde(rename = "date")]
    pub start: NaiveDate,
    #[serde(rename = "add")]
    pub additions: u64,
    #[serde(rename = "sub")]
    pub deletions: u64,
    #[serde(skip)]
    pub commits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorReport {
    pub author: String,
    pub totals: DayStats,
    #[serde(rename = "graph")]
    pub buckets: Vec<IntervalBucket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionReport {
    pub granularity: Granularity,
    pub authors: Vec<AuthorReport>,
}

/// Half-open `[since, until)` window over calendar days.
#[derive(Debug, Clone, Default)]
pub struct DateRange {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl DateRange {
    pub fn new() -> Self {
        Self { since: None, until: None }
    }

    pub fn with_since(mut self, since: NaiveDate) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        if let Some(since) = self.since {
            if day < since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if day >= until {
                return false;
            }
        }
        true
    }
}
