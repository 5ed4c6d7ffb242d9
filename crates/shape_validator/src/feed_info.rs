//! The feed-info gate: which published datasets are in service today.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use chrono::NaiveDate;
use gtfs::{data_model::feed_info::FeedInfo, GtfsFeed};
use serde::Serialize;

use crate::report::ReportError;

pub const FEEDS_TITLE: &str = "ParseFeeds:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedStatus {
    pub index: usize,
    pub publisher: String,
    pub version: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub active: bool,
}

impl FeedStatus {
    fn new(index: usize, info: &FeedInfo, today: NaiveDate) -> Self {
        Self {
            index,
            publisher: info.publisher_name.clone(),
            version: info.version.clone(),
            start_date: info.start_date,
            end_date: info.end_date,
            active: info.is_active_on(today),
        }
    }

    /// `[index] version : <publisher> - start - end`, open bounds as `open`.
    pub fn line(&self) -> String {
        let date = |date: Option<NaiveDate>| {
            date.map_or_else(|| "open".to_owned(), |date| date.format("%Y-%m-%d").to_string())
        };
        format!(
            "[{}] {} : <{}> - {} - {}",
            self.index,
            self.version.as_deref().unwrap_or_default(),
            self.publisher,
            date(self.start_date),
            date(self.end_date)
        )
    }
}

pub fn feed_statuses(feed: &GtfsFeed, today: NaiveDate) -> Vec<FeedStatus> {
    feed.feed_infos
        .iter()
        .enumerate()
        .map(|(index, info)| FeedStatus::new(index, info, today))
        .collect()
}

/// Entity validation runs when any dataset is in service. Feeds without any
/// feed info are validated as well.
pub fn should_validate(statuses: &[FeedStatus]) -> bool {
    statuses.is_empty() || statuses.iter().any(|status| status.active)
}

pub fn write_feed_statuses<W: Write>(
    mut writer: W,
    statuses: &[FeedStatus],
) -> Result<(), ReportError> {
    writeln!(writer, "{FEEDS_TITLE}")?;
    for status in statuses {
        writeln!(writer, "{}", status.line())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_feed_report<P: AsRef<Path>>(
    path: P,
    statuses: &[FeedStatus],
) -> Result<(), ReportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_owned(),
        source,
    })?;
    write_feed_statuses(BufWriter::new(file), statuses)
}
