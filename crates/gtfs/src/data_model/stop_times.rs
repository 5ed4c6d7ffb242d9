use serde::{Deserialize, Serialize};

use super::{stops::StopId, trips::TripId, Time};

/// Times that a vehicle arrives at and departs from stops for each trip.
/// Primary Key: `(trip_id, stop_sequence)`
/// See <https://gtfs.org/schedule/reference/#stop_timestxt>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopTime {
    #[serde(rename = "trip_id")]
    pub trip_id: TripId,

    #[serde(rename = "arrival_time", default)]
    pub arrival_time: Option<Time>,

    #[serde(rename = "departure_time", default)]
    pub departure_time: Option<Time>,

    #[serde(rename = "stop_id", default)]
    pub stop_id: Option<StopId>,

    #[serde(rename = "stop_sequence")]
    pub stop_sequence: u32,

    /// Distance along the associated shape, in the same unit as
    /// `shape_dist_traveled` in shapes.txt.
    #[serde(rename = "shape_dist_traveled", default)]
    pub distance_traveled: Option<f64>,
}
