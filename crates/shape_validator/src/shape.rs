//! Validation of a single shape into an ordered report buffer.

use gtfs::domain_model::shape::{Shape, ShapeId};
use serde::Serialize;
use utility::{
    serde::fixed,
    utm::{project, ProjectedPoint},
};

use crate::{
    accumulator::{Accumulator, Observation, Segment},
    config::{ValidationConfig, COORDINATE_PRECISION, PROJECTION_PRECISION},
    finding::{Finding, FindingKind},
    sequence::{range_findings, sort_by_sequence, SequenceCheck},
    variance::{self, Variance},
};

/// One row of `shapes.csv`. Values that could not be computed for the point
/// are written as empty cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRecord {
    pub shape_id: ShapeId,
    #[serde(rename = "shape_pt_lat", serialize_with = "fixed::six")]
    pub latitude: f64,
    #[serde(rename = "shape_pt_lon", serialize_with = "fixed::six")]
    pub longitude: f64,
    #[serde(rename = "shape_pt_sequence")]
    pub sequence: u32,
    #[serde(rename = "shape_dist_traveled", serialize_with = "fixed::option::four")]
    pub declared_km: Option<f64>,
    #[serde(rename = "shape_segment_length", serialize_with = "fixed::option::four")]
    pub declared_segment_km: Option<f64>,
    #[serde(rename = "shape_location_east", serialize_with = "fixed::option::one")]
    pub easting: Option<f64>,
    #[serde(rename = "shape_location_north", serialize_with = "fixed::option::one")]
    pub northing: Option<f64>,
    #[serde(rename = "calc_dist_traveled", serialize_with = "fixed::option::four")]
    pub planar_total_km: Option<f64>,
    #[serde(rename = "calc_dist_variance", serialize_with = "fixed::option::one")]
    pub planar_cumulative_percent: Option<f64>,
    #[serde(rename = "calc_segment_length", serialize_with = "fixed::option::four")]
    pub planar_segment_km: Option<f64>,
    #[serde(rename = "calc_segment_variance", serialize_with = "fixed::option::one")]
    pub planar_segment_percent: Option<f64>,
    #[serde(rename = "sphere_dist_traveled", serialize_with = "fixed::option::four")]
    pub spherical_total_km: Option<f64>,
    #[serde(rename = "sphere_dist_variance", serialize_with = "fixed::option::one")]
    pub spherical_cumulative_percent: Option<f64>,
    #[serde(rename = "sphere_segment_length", serialize_with = "fixed::option::four")]
    pub spherical_segment_km: Option<f64>,
    #[serde(rename = "sphere_segment_variance", serialize_with = "fixed::option::one")]
    pub spherical_segment_percent: Option<f64>,
    #[serde(rename = "haversine_segment_length", serialize_with = "fixed::option::four")]
    pub haversine_segment_km: Option<f64>,
    #[serde(rename = "haversine_segment_variance", serialize_with = "fixed::option::one")]
    pub haversine_segment_percent: Option<f64>,
}

impl PointRecord {
    fn new(
        shape_id: ShapeId,
        sequence: u32,
        observation: &Observation,
        declared_km: Option<f64>,
    ) -> Self {
        Self {
            shape_id,
            latitude: observation.position.latitude,
            longitude: observation.position.longitude,
            sequence,
            declared_km,
            declared_segment_km: None,
            easting: observation.projected.map(|projected| projected.easting),
            northing: observation.projected.map(|projected| projected.northing),
            planar_total_km: None,
            planar_cumulative_percent: None,
            planar_segment_km: None,
            planar_segment_percent: None,
            spherical_total_km: None,
            spherical_cumulative_percent: None,
            spherical_segment_km: None,
            spherical_segment_percent: None,
            haversine_segment_km: None,
            haversine_segment_percent: None,
        }
    }

    fn with_segment(self, segment: &Segment, variance: &Variance) -> Self {
        Self {
            declared_segment_km: Some(segment.declared_segment_km),
            planar_total_km: Some(segment.planar_total_km),
            planar_cumulative_percent: Some(variance.planar_cumulative_percent),
            planar_segment_km: segment.planar.km(),
            planar_segment_percent: variance.planar_segment_percent,
            spherical_total_km: Some(segment.spherical_total_km),
            spherical_cumulative_percent: Some(variance.spherical_cumulative_percent),
            spherical_segment_km: Some(segment.spherical_km),
            spherical_segment_percent: Some(variance.spherical_segment_percent),
            haversine_segment_km: Some(segment.haversine_km),
            haversine_segment_percent: Some(variance.haversine_segment_percent),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportEntry {
    Finding(Finding),
    Record(PointRecord),
}

/// Everything reported for one shape, in output order: for every point in
/// sequence order its findings, then its record.
#[derive(Debug, Clone)]
pub struct ShapeReport {
    pub shape_id: ShapeId,
    pub entries: Vec<ReportEntry>,
}

impl ShapeReport {
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Finding(finding) => Some(finding),
            ReportEntry::Record(_) => None,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = &PointRecord> {
        self.entries.iter().filter_map(|entry| match entry {
            ReportEntry::Record(record) => Some(record),
            ReportEntry::Finding(_) => None,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.findings().next().is_none()
    }
}

/// Validates one shape. Pure apart from logging: the result only depends on
/// the shape and the configuration.
pub fn validate_shape(shape: &Shape, config: &ValidationConfig) -> ShapeReport {
    let mut points = shape.points.clone();
    sort_by_sequence(&mut points);

    let mut entries = Vec::with_capacity(points.len() * 2);
    let mut sequence_check = SequenceCheck::default();
    let mut accumulator = Accumulator::default();

    for point in &points {
        let mut kinds = range_findings(&point.position);
        if let Some(issue) = sequence_check.advance(point.sequence) {
            kinds.push(FindingKind::OutOfSequence { issue });
        }

        let position = point.position.rounded(COORDINATE_PRECISION);
        let projected: Option<ProjectedPoint> = match project(position, PROJECTION_PRECISION) {
            Ok(projected) => Some(projected),
            Err(error) => {
                kinds.push(FindingKind::ProjectionFailed { error });
                None
            }
        };
        let observation = Observation {
            position,
            projected,
            declared_km: point.distance_traveled.unwrap_or_default(),
        };
        let mut record = PointRecord::new(
            shape.id.clone(),
            point.sequence,
            &observation,
            point.distance_traveled,
        );

        if point.distance_traveled.is_some() {
            let (next, segment) = accumulator.step(observation, config);
            accumulator = next;
            if let Some(segment) = segment {
                let variance = variance::analyze(&segment, config);
                kinds.extend(variance::findings(&segment, &variance, config));
                record = record.with_segment(&segment, &variance);
            }
        }

        for kind in kinds {
            let finding = Finding::new(shape.id.clone(), point.sequence, kind);
            log::debug!("{finding}");
            entries.push(ReportEntry::Finding(finding));
        }
        entries.push(ReportEntry::Record(record));
    }

    ShapeReport {
        shape_id: shape.id.clone(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use gtfs::domain_model::shape::ShapePoint;
    use utility::geo::GeoPoint;

    use super::*;
    use crate::finding::SequenceIssue;

    fn shape(points: &[(f64, f64, u32, Option<f64>)]) -> Shape {
        Shape::new(
            ShapeId::from("A_shp"),
            points
                .iter()
                .map(|&(latitude, longitude, sequence, distance_traveled)| ShapePoint {
                    position: GeoPoint::new(latitude, longitude),
                    sequence,
                    distance_traveled,
                })
                .collect(),
        )
    }

    #[test]
    fn writes_a_record_for_every_point() {
        let report = validate_shape(
            &shape(&[
                (54.3, 10.1, 2, Some(0.5)),
                (54.3, 10.1, 1, Some(0.0)),
                (54.3, 10.1, 3, None),
            ]),
            &ValidationConfig::default(),
        );
        let sequences = report.records().map(|r| r.sequence).collect::<Vec<_>>();
        assert_eq!(sequences, [1, 2, 3]);
        let records = report.records().collect::<Vec<_>>();
        assert_eq!(records[0].declared_segment_km, None);
        assert_eq!(records[1].declared_segment_km, Some(0.5));
        assert_eq!(records[1].planar_segment_km, Some(0.0));
        // Coincident points with a declared length: both estimators read zero,
        // so no percentage can be computed and no variance is reported.
        assert_eq!(records[1].spherical_segment_percent, Some(0.0));
        assert_eq!(records[2].declared_km, None);
        assert!(records[2].easting.is_some());
    }

    #[test]
    fn findings_precede_their_record() {
        let report = validate_shape(
            &shape(&[(0.0, 0.0, 1, Some(0.0)), (0.0, 0.01, 1, Some(1.0))]),
            &ValidationConfig::default(),
        );
        assert!(matches!(report.entries[0], ReportEntry::Record(_)));
        let ReportEntry::Finding(duplicate) = &report.entries[1] else {
            panic!("expected a finding, got {:?}", report.entries[1]);
        };
        assert_eq!(
            duplicate.kind,
            FindingKind::OutOfSequence {
                issue: SequenceIssue::Duplicate
            }
        );
        assert!(matches!(report.entries.last(), Some(ReportEntry::Record(_))));
    }

    #[test]
    fn points_without_distance_skip_the_accumulator() {
        let report = validate_shape(
            &shape(&[
                (0.0, 0.0, 1, Some(0.0)),
                (0.0, 0.005, 2, None),
                (0.0, 0.01, 3, Some(1.1111)),
            ]),
            &ValidationConfig::default(),
        );
        let records = report.records().collect::<Vec<_>>();
        assert_eq!(records[1].planar_total_km, None);
        // The segment spans from the first to the third point.
        assert_eq!(records[2].spherical_segment_km, Some(1.1111));
        assert_eq!(records[2].spherical_segment_percent, Some(0.0));
    }

    #[test]
    fn polar_points_fail_projection_once() {
        let report = validate_shape(
            &shape(&[(85.0, 0.0, 1, Some(0.0)), (85.001, 0.0, 2, Some(0.1))]),
            &ValidationConfig::default(),
        );
        let failures = report
            .findings()
            .filter(|f| matches!(f.kind, FindingKind::ProjectionFailed { .. }))
            .count();
        assert_eq!(failures, 2);
        let records = report.records().collect::<Vec<_>>();
        assert_eq!(records[1].easting, None);
        assert_eq!(records[1].planar_segment_km, None);
        assert!(records[1].haversine_segment_km.is_some());
    }
}
