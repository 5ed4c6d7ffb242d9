use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use super::{routes::RouteId, shapes::ShapeId, IdString};

pub type TripId = Id<Trip>;

/// Trips for each route. A trip is a sequence of two or more stops that occur
/// during a specific time period.
/// Primary Key: `trip_id`
/// See <https://gtfs.org/schedule/reference/#tripstxt>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "route_id")]
    pub route_id: RouteId,

    /// Identifies a set of dates when service is available.
    #[serde(rename = "service_id")]
    pub service_id: IdString,

    #[serde(rename = "trip_id")]
    pub id: TripId,

    #[serde(rename = "trip_headsign", default)]
    pub headsign: Option<String>,

    /// The geospatial shape describing the vehicle travel path.
    #[serde(rename = "shape_id", default)]
    pub shape_id: Option<ShapeId>,
}

impl HasId for Trip {
    type IdType = String;
}
