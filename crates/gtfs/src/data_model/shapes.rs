use serde::{Deserialize, Serialize};

pub use crate::domain_model::shape::ShapeId;

use super::{Latitude, Longitude};

/// Rules for mapping vehicle travel paths, sometimes referred to as route
/// alignments.
///
/// Primary key `(shape_id, shape_pt_sequence)`
///
/// Shapes consist of a sequence of points through which the vehicle passes in
/// order. Rows of one shape may appear in any order in the file.
///
/// See <https://gtfs.org/schedule/reference/#shapestxt>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapesRow {
    /// Identifies a shape.
    pub shape_id: ShapeId,

    #[serde(rename = "shape_pt_lat")]
    pub point_latitude: Latitude,

    #[serde(rename = "shape_pt_lon")]
    pub point_longitude: Longitude,

    /// Sequence in which the shape points connect to form the shape.
    ///
    /// # Example
    ///
    /// - `shape_id`, `shape_pt_lat`, `shape_pt_lon`, `shape_pt_sequence`
    /// - `A_shp`,    `37.61956`,     `-122.48161`,   `1`
    /// - `A_shp`,    `37.64430`,     `-122.41070`,   `2`
    /// - `A_shp`,    `37.65863`,     `-122.30839`,   `3`
    #[serde(rename = "shape_pt_sequence")]
    pub point_sequence: u32,

    /// Actual distance traveled along the shape from the first shape point to
    /// the point specified in this record, in kilometres.
    #[serde(rename = "shape_dist_traveled", default)]
    pub distance_traveled: Option<f64>,
}
