//! One validation run over an opened feed.

use std::path::Path;

use chrono::NaiveDate;
use gtfs::GtfsFeed;

use crate::{
    config::ValidationConfig,
    feed_info::{feed_statuses, should_validate, write_feed_report},
    summary::RunSummary,
    validators::Validator,
};

pub const FEEDS_REPORT: &str = "feeds.csv";

/// Writes the feed report, applies the feed-info gate and runs the validator
/// suite. A report that cannot be written is logged and recorded in
/// [`RunSummary::failed_reports`]; the run carries on with the next one.
pub fn run_validation(
    feed: &GtfsFeed,
    feed_name: &str,
    output_dir: &Path,
    config: ValidationConfig,
    today: NaiveDate,
) -> RunSummary {
    let mut summary = RunSummary {
        feed: feed_name.to_owned(),
        config,
        feeds: feed_statuses(feed, today),
        ..Default::default()
    };

    if let Err(why) = write_feed_report(output_dir.join(FEEDS_REPORT), &summary.feeds) {
        log::error!("feeds report failed: {why}");
        summary.failed_reports.push("feeds".to_owned());
    }

    summary.validated = should_validate(&summary.feeds);
    if !summary.validated {
        log::warn!("no feed is in service today, skipping validation");
        return summary;
    }

    for validator in Validator::suite(config) {
        match validator.run(feed, output_dir) {
            Ok(report) => summary.validators.push(report),
            Err(why) => {
                log::error!("{} validation failed: {why}", validator.kind());
                summary.failed_reports.push(validator.kind().to_string());
            }
        }
    }
    summary
}
