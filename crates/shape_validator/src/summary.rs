use serde::Serialize;

use crate::{config::ValidationConfig, feed_info::FeedStatus, validators::ValidatorReport};

/// What a run did, logged once at the end.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub feed: String,
    pub config: ValidationConfig,
    pub feeds: Vec<FeedStatus>,
    pub validated: bool,
    pub validators: Vec<ValidatorReport>,
    /// Validators whose report could not be written.
    pub failed_reports: Vec<String>,
}

impl RunSummary {
    /// A run passes when every feed is in service, every report was written
    /// and no validator found anything.
    pub fn passed(&self) -> bool {
        self.validated
            && self.failed_reports.is_empty()
            && !self
                .validators
                .iter()
                .any(|report| report.outcome.is_invalid())
    }

    pub fn log(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => log::info!("run summary: {json}"),
            Err(why) => log::warn!("could not serialize run summary: {why}"),
        }
    }
}
