use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use super::{LanguageCode, Timezone, Url};

pub type AgencyId = Id<Agency>;

/// Transit agencies with service represented in this dataset.
/// Primary Key: `agency_id`
/// See <https://gtfs.org/schedule/reference/#agencytxt>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    /// Identifies a transit brand. Required when the dataset contains data for
    /// multiple agencies.
    #[serde(rename = "agency_id")]
    pub id: Option<AgencyId>,

    #[serde(rename = "agency_name")]
    pub name: String,

    #[serde(rename = "agency_url")]
    pub url: Url,

    #[serde(rename = "agency_timezone")]
    pub timezone: Timezone,

    #[serde(rename = "agency_lang", default)]
    pub language_code: Option<LanguageCode>,
}

impl HasId for Agency {
    type IdType = String;
}
