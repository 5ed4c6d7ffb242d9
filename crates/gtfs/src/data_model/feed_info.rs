use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utility::serde::date::deserialize_yyyymmdd_option;

use super::{LanguageCode, Url};

/// Dataset metadata, including publisher, version, and expiration information.
/// See <https://gtfs.org/schedule/reference/#feed_infotxt>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedInfo {
    #[serde(rename = "feed_publisher_name")]
    pub publisher_name: String,

    #[serde(rename = "feed_publisher_url")]
    pub publisher_url: Url,

    #[serde(rename = "feed_lang")]
    pub language: LanguageCode,

    /// First day of service covered by the dataset. Open ended when absent.
    #[serde(
        rename = "feed_start_date",
        default,
        deserialize_with = "deserialize_yyyymmdd_option"
    )]
    pub start_date: Option<NaiveDate>,

    /// Last day of service covered by the dataset. Open ended when absent.
    #[serde(
        rename = "feed_end_date",
        default,
        deserialize_with = "deserialize_yyyymmdd_option"
    )]
    pub end_date: Option<NaiveDate>,

    #[serde(rename = "feed_version", default)]
    pub version: Option<String>,
}

impl FeedInfo {
    /// Whether `today` lies within the published service window, bounds
    /// included.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.start_date.map_or(true, |start| start <= today)
            && self.end_date.map_or(true, |end| today <= end)
    }
}
