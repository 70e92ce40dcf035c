pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod graph;
pub mod logging;
pub mod model;
pub mod util;

pub use config::{Granularity, ReportConfig};
pub use error::{ContribError, Result};
pub use model::{
    AuthorReport, CommitKind, CommitRecord, ContributionIndex, ContributionReport, DateRange,
    DayStats, IntervalBucket,
};
