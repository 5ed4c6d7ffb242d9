//! Geometric validation of GTFS shapes.
//!
//! Every shape is sorted by sequence number, its points projected onto the UTM
//! grid, and the declared `shape_dist_traveled` compared against planar,
//! spherical and haversine distances. Discrepancies are reported as
//! [`Finding`]s next to a [`PointRecord`] for every point.

pub mod accumulator;
pub mod config;
pub mod feed_info;
pub mod finding;
pub mod report;
pub mod run;
pub mod sequence;
pub mod shape;
pub mod summary;
pub mod validators;
pub mod variance;

use gtfs::domain_model::shape::{Shape, ShapeId};
use indexmap::IndexMap;
use rayon::prelude::*;

pub use config::ValidationConfig;
pub use finding::{Finding, FindingKind};
pub use report::{ReportError, ShapeReportWriter};
pub use run::run_validation;
pub use shape::{validate_shape, PointRecord, ReportEntry, ShapeReport};

/// Validates all shapes in parallel. Reports come back in the order of
/// `shapes`.
pub fn validate_shapes(
    shapes: &IndexMap<ShapeId, Shape>,
    config: &ValidationConfig,
) -> Vec<ShapeReport> {
    let shapes = shapes.values().collect::<Vec<_>>();
    shapes
        .par_iter()
        .map(|shape| validate_shape(shape, config))
        .collect()
}
