use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use super::{Latitude, Longitude};

pub type StopId = Id<Stop>;

/// Stops where vehicles pick up or drop off riders. Also defines stations and
/// station entrances.
/// Primary Key: `stop_id`.
/// See <https://gtfs.org/schedule/reference/#stopstxt>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "stop_id")]
    pub id: StopId,

    #[serde(rename = "stop_name", default)]
    pub name: Option<String>,

    /// Conditionally required: absent for generic nodes and boarding areas.
    #[serde(rename = "stop_lat", default)]
    pub latitude: Option<Latitude>,

    #[serde(rename = "stop_lon", default)]
    pub longitude: Option<Longitude>,

    #[serde(rename = "parent_station", default)]
    pub parent_station: Option<StopId>,
}

impl HasId for Stop {
    type IdType = String;
}
