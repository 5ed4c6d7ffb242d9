use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use super::agency::AgencyId;

pub type RouteId = Id<Route>;

/// Transit routes. A route is a group of trips that are displayed to riders as
/// a single service.
/// Primary Key: `route_id`
/// See <https://gtfs.org/schedule/reference/#routestxt>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    #[serde(rename = "route_id")]
    pub id: RouteId,

    #[serde(rename = "agency_id", default)]
    pub agency_id: Option<AgencyId>,

    /// Short abstract identifier like "32", "100X" or "Green".
    #[serde(rename = "route_short_name", default)]
    pub short_name: Option<String>,

    #[serde(rename = "route_long_name", default)]
    pub long_name: Option<String>,

    /// Kind of transportation, e.g. `3` for bus. Kept numeric since the
    /// extended route types go well beyond the basic enumeration.
    #[serde(rename = "route_type")]
    pub route_type: u16,
}

impl HasId for Route {
    type IdType = String;
}
