use crate::config::{Granularity, ReportConfig, DEFAULT_COLUMNS};
use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contrib-graph")]
#[command(about = "Per-author contribution graphs over git history")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(flatten)]
    pub report: ReportArgs,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository (bare or normal)")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Only commits on or after this date (YYYY-MM-DD, RFC3339, or a duration like 90days)")]
    pub since: Option<String>,

    #[arg(long = "to", alias = "until", help = "Only commits before this date (YYYY-MM-DD, RFC3339, or a duration like 90days)")]
    pub until: Option<String>,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    #[arg(long, value_enum, default_value_t = Granularity::Day, help = "Bucket contributions per day, week or month")]
    pub interval: Granularity,

    #[arg(long, help = "Display intervals without contributions")]
    pub full_graph: bool,

    #[arg(long, help = "Display graph for a single committer")]
    pub author_email: Option<String>,

    #[arg(long, default_value_t = DEFAULT_COLUMNS, help = "Number of columns in your terminal or output")]
    pub max_columns: usize,

    #[arg(long, help = "Output as JSON", conflicts_with = "ndjson")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON, one author per line")]
    pub ndjson: bool,

    #[arg(long, help = "Disable colors in output")]
    pub no_colors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Ndjson,
}

impl ReportArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.ndjson {
            OutputFormat::Ndjson
        } else {
            OutputFormat::Text
        }
    }

    pub fn config(&self) -> ReportConfig {
        ReportConfig::new(self.interval)
            .with_include_empty(self.full_graph)
            .with_width(self.max_columns)
            .with_color(!self.no_colors && console::colors_enabled())
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let config = self.report.config();
        let format = self.report.format();
        crate::graph::exec(self.common, config, format, self.report.author_email)
    }
}
