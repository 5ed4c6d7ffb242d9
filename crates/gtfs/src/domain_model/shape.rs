use indexmap::IndexMap;
use utility::geo::GeoPoint;
use utility::id::{HasId, Id};

use crate::data_model::shapes::ShapesRow;

pub type ShapeId = Id<Shape>;

/// A shape with its points in file order. Nothing guarantees the points are
/// sorted by sequence number.
#[derive(Debug, Clone)]
pub struct Shape {
    pub id: ShapeId,
    pub points: Vec<ShapePoint>,
}

impl HasId for Shape {
    type IdType = String;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePoint {
    pub position: GeoPoint,
    pub sequence: u32,
    /// Declared cumulative distance in kilometres.
    pub distance_traveled: Option<f64>,
}

impl From<&ShapesRow> for ShapePoint {
    fn from(row: &ShapesRow) -> Self {
        Self {
            position: GeoPoint::new(row.point_latitude, row.point_longitude),
            sequence: row.point_sequence,
            distance_traveled: row.distance_traveled,
        }
    }
}

impl Shape {
    pub fn new(id: ShapeId, points: Vec<ShapePoint>) -> Self {
        Self { id, points }
    }

    /// Groups rows by `shape_id`, keeping shapes in order of first appearance.
    pub fn group_rows<I>(rows: I) -> IndexMap<ShapeId, Shape>
    where
        I: IntoIterator<Item = ShapesRow>,
    {
        let mut shapes: IndexMap<ShapeId, Shape> = IndexMap::new();
        for row in rows {
            let point = ShapePoint::from(&row);
            shapes
                .entry(row.shape_id.clone())
                .or_insert_with(|| Shape::new(row.shape_id, Vec::new()))
                .points
                .push(point);
        }
        shapes
    }
}
