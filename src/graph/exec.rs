use super::{accumulate, assemble, render_json, render_ndjson, render_text};
use crate::cli::{CommonArgs, OutputFormat};
use crate::config::ReportConfig;
use crate::git::GitRepo;
use crate::util::resolve_range;
use anyhow::Context;
use chrono::Local;

pub fn exec(
    common: CommonArgs,
    config: ReportConfig,
    format: OutputFormat,
    author: Option<String>,
) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;

    let range = resolve_range(
        common.since.as_deref(),
        common.until.as_deref(),
        Local::now().date_naive(),
    )
    .context("Failed to resolve date range")?;

    let records = repo
        .collect_records(&range)
        .context("Failed to collect commits from repository")?;

    let index = accumulate(records, author.as_deref()).context("Failed to aggregate commit stats")?;
    let report = assemble(&index, &config);

    match format {
        OutputFormat::Json => println!("{}", render_json(&report)?),
        OutputFormat::Ndjson => print!("{}", render_ndjson(&report)?),
        OutputFormat::Text => {
            println!("Repo: {}\n", repo.path().display());
            println!("Contributions excluding merge commits:");
            if report.authors.is_empty() {
                println!("\nNo contributions found");
            } else {
                print!("{}", render_text(&report, &config));
            }
        }
    }

    Ok(())
}
