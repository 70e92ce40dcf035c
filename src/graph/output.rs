use super::bar::render_bar;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::model::{AuthorReport, ContributionReport, IntervalBucket};
use crate::util::DATE_FORMAT;
use console::Style;

/// Columns taken by the `   Insertions: %4d ` prefix, plus slack.
const TOTALS_PREFIX: i64 = 20;
/// Columns taken by the `   YYYY-MM-DD | %3d(+) %3d(-) ` prefix, plus slack.
const BUCKET_PREFIX: i64 = 30;

struct Palette {
    author: Style,
    plus: Style,
    minus: Style,
}

impl Palette {
    fn new(color: bool) -> Self {
        Self {
            author: Style::new().blue().bright().force_styling(color),
            plus: Style::new().green().force_styling(color),
            minus: Style::new().red().force_styling(color),
        }
    }
}

pub fn render_text(report: &ContributionReport, config: &ReportConfig) -> String {
    let palette = Palette::new(config.color);
    let mut out = String::new();
    for author in &report.authors {
        write_author(&mut out, author, report, config, &palette);
    }
    out
}

fn write_author(
    out: &mut String,
    author: &AuthorReport,
    report: &ContributionReport,
    config: &ReportConfig,
    palette: &Palette,
) {
    let width = config.width as i64;
    let banner = "#".repeat(config.width);
    let totals = &author.totals;

    out.push_str(&format!(
        "\n\n{banner}\n{banner}\n\n\nAuthor: {}\n\nTotal:\n   {} commits\n   Insertions: {:4} {}\n   Deletions:  {:4} {}\n\nPer {}:\n",
        palette.author.apply_to(&author.author),
        totals.commits,
        totals.additions,
        render_bar(totals.additions, 0, width - TOTALS_PREFIX).paint(&palette.plus, &palette.minus),
        totals.deletions,
        render_bar(0, totals.deletions, width - TOTALS_PREFIX).paint(&palette.plus, &palette.minus),
        report.granularity,
    ));

    for bucket in &author.buckets {
        write_bucket(out, bucket, width, palette);
    }
}

fn write_bucket(out: &mut String, bucket: &IntervalBucket, width: i64, palette: &Palette) {
    out.push_str(&format!(
        "   {} | {:3}(+) {:3}(-) {}\n",
        bucket.start.format(DATE_FORMAT),
        bucket.additions,
        bucket.deletions,
        render_bar(bucket.additions, bucket.deletions, width - BUCKET_PREFIX)
            .paint(&palette.plus, &palette.minus),
    ));
}

pub fn render_json(report: &ContributionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One compact JSON object per author, newline separated.
pub fn render_ndjson(report: &ContributionReport) -> Result<String> {
    let mut out = String::new();
    for author in &report.authors {
        out.push_str(&serde_json::to_string(author)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Granularity;
    use crate::model::DayStats;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_report() -> ContributionReport {
        ContributionReport {
            granularity: Granularity::Week,
            authors: vec![
                AuthorReport {
                    author: "ann@x.io".to_string(),
                    totals: DayStats { commits: 3, files_changed: 4, additions: 12, deletions: 7 },
                    buckets: vec![
                        IntervalBucket { start: date("2018-12-09"), additions: 10, deletions: 3, commits: 2 },
                        IntervalBucket { start: date("2018-12-16"), additions: 2, deletions: 4, commits: 1 },
                    ],
                },
                AuthorReport {
                    author: "bo@x.io".to_string(),
                    totals: DayStats { commits: 1, files_changed: 1, additions: 1, deletions: 0 },
                    buckets: vec![IntervalBucket {
                        start: date("2018-12-16"),
                        additions: 1,
                        deletions: 0,
                        commits: 1,
                    }],
                },
            ],
        }
    }

    #[test]
    fn text_report_layout() {
        let config = ReportConfig::new(Granularity::Week).with_width(40);
        let text = render_text(&sample_report(), &config);
        let banner = "#".repeat(40);

        let expected_ann = format!(
            "\n\n{banner}\n{banner}\n\n\nAuthor: ann@x.io\n\nTotal:\n   3 commits\n   Insertions:   12 {}\n   Deletions:     7 {}\n\nPer week:\n   2018-12-09 |  10(+)   3(-) {}\n   2018-12-16 |   2(+)   4(-) {}\n",
            "+".repeat(12),
            "-".repeat(7),
            // 13 changes into 10 columns: 7.69 -> 8, 2.31 -> 2
            format!("{}{}", "+".repeat(8), "-".repeat(2)),
            format!("{}{}", "+".repeat(2), "-".repeat(4)),
        );

        assert!(text.starts_with(&expected_ann), "{text}");
        let ann = text.find("Author: ann@x.io").unwrap();
        let bo = text.find("Author: bo@x.io").unwrap();
        assert!(ann < bo);
    }

    #[test]
    fn narrow_width_drops_bars() {
        let config = ReportConfig::new(Granularity::Week).with_width(10);
        let text = render_text(&sample_report(), &config);
        assert!(text.contains("   Insertions:   12 \n"));
        assert!(text.contains("   2018-12-09 |  10(+)   3(-) \n"));
        assert!(text.starts_with("\n\n##########\n"));
    }

    #[test]
    fn empty_report_renders_nothing() {
        let report = ContributionReport {
            granularity: Granularity::Day,
            authors: Vec::new(),
        };
        assert_eq!(render_text(&report, &ReportConfig::default()), "");
        assert_eq!(render_ndjson(&report).unwrap(), "");

        let v: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(v, serde_json::json!({ "granularity": "day", "authors": [] }));
    }

    #[test]
    fn json_field_names_and_order() {
        let json = render_json(&sample_report()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            v,
            serde_json::json!({
                "granularity": "week",
                "authors": [
                    {
                        "author": "ann@x.io",
                        "totals": { "commits": 3, "insertions": 12, "deletions": 7 },
                        "graph": [
                            { "date": "2018-12-09", "add": 10, "sub": 3 },
                            { "date": "2018-12-16", "add": 2, "sub": 4 }
                        ]
                    },
                    {
                        "author": "bo@x.io",
                        "totals": { "commits": 1, "insertions": 1, "deletions": 0 },
                        "graph": [ { "date": "2018-12-16", "add": 1, "sub": 0 } ]
                    }
                ]
            })
        );

        let granularity = json.find("\"granularity\"").unwrap();
        let authors = json.find("\"authors\"").unwrap();
        assert!(granularity < authors);
    }

    #[test]
    fn ndjson_one_line_per_author() {
        let out = render_ndjson(&sample_report()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["author"], "ann@x.io");
        assert_eq!(first["graph"][0]["add"], 10);
    }
}
