use std::fmt;

use gtfs::domain_model::shape::ShapeId;
use serde::Serialize;
use utility::utm::{ProjectionError, UtmZone};

/// A classified event found while validating one point of a shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub shape_id: ShapeId,
    pub sequence: u32,
    #[serde(flatten)]
    pub kind: FindingKind,
}

impl Finding {
    pub fn new(shape_id: ShapeId, sequence: u32, kind: FindingKind) -> Self {
        Self {
            shape_id,
            sequence,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    Structural,
    Projection,
    Variance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Remediation {
    RemovePoint,
    AddPoints,
    RecalculateDistance,
}

impl fmt::Display for Remediation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemovePoint => write!(f, "Remove unnecessary shape point"),
            Self::AddPoints => write!(f, "Add intermediate shape points as necessary"),
            Self::RecalculateDistance => write!(f, "Recalculate shape_dist_traveled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum SequenceIssue {
    /// Same sequence number as the preceding point.
    Duplicate,
    /// `count` sequence numbers are skipped before this point.
    Missing { count: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "bound", rename_all = "snake_case")]
pub enum SegmentBound {
    BelowMinimum { minimum_km: f64 },
    AboveMaximum { maximum_km: f64 },
}

/// Distance estimators that can confirm a variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimator {
    Planar,
    Spherical,
    Haversine,
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planar => write!(f, "planar"),
            Self::Spherical => write!(f, "spherical"),
            Self::Haversine => write!(f, "haversine"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingKind {
    LatitudeOutOfRange {
        latitude: f64,
    },
    LongitudeOutOfRange {
        longitude: f64,
    },
    OutOfSequence {
        #[serde(flatten)]
        issue: SequenceIssue,
    },
    ProjectionFailed {
        error: ProjectionError,
    },
    /// The segment ending at this point crosses a zone or hemisphere boundary
    /// of the projection, so its planar length is not measured.
    ZoneTransition {
        from: UtmZone,
        to: UtmZone,
    },
    SegmentLength {
        length_km: f64,
        #[serde(flatten)]
        bound: SegmentBound,
    },
    /// The declared segment length disagrees with two estimators. `primary` is
    /// the planar estimator unless the segment has no planar length.
    SegmentVariance {
        declared_km: f64,
        primary: Estimator,
        primary_percent: f64,
        spherical_percent: f64,
    },
    CumulativeVariance {
        declared_km: f64,
        planar_percent: f64,
        spherical_percent: f64,
    },
}

impl FindingKind {
    /// Stable name of the kind, used to count findings in summaries.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LatitudeOutOfRange { .. } => "latitude_out_of_range",
            Self::LongitudeOutOfRange { .. } => "longitude_out_of_range",
            Self::OutOfSequence { .. } => "out_of_sequence",
            Self::ProjectionFailed { .. } => "projection_failed",
            Self::ZoneTransition { .. } => "zone_transition",
            Self::SegmentLength { .. } => "segment_length",
            Self::SegmentVariance { .. } => "segment_variance",
            Self::CumulativeVariance { .. } => "cumulative_variance",
        }
    }

    pub fn category(&self) -> FindingCategory {
        match self {
            Self::LatitudeOutOfRange { .. }
            | Self::LongitudeOutOfRange { .. }
            | Self::OutOfSequence { .. } => FindingCategory::Structural,
            Self::ProjectionFailed { .. } | Self::ZoneTransition { .. } => {
                FindingCategory::Projection
            }
            Self::SegmentLength { .. }
            | Self::SegmentVariance { .. }
            | Self::CumulativeVariance { .. } => FindingCategory::Variance,
        }
    }

    pub fn remediation(&self) -> Option<Remediation> {
        match self {
            Self::SegmentLength {
                bound: SegmentBound::BelowMinimum { .. },
                ..
            } => Some(Remediation::RemovePoint),
            Self::SegmentLength {
                bound: SegmentBound::AboveMaximum { .. },
                ..
            } => Some(Remediation::AddPoints),
            Self::SegmentVariance { .. } | Self::CumulativeVariance { .. } => {
                Some(Remediation::RecalculateDistance)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape: &str = self.shape_id.raw_ref();
        let sequence = self.sequence;
        match &self.kind {
            FindingKind::LatitudeOutOfRange { latitude } => {
                write!(f, "Out of range: Lat - [{shape} {sequence}] = {latitude}")
            }
            FindingKind::LongitudeOutOfRange { longitude } => {
                write!(f, "Out of range: Lon - [{shape} {sequence}] = {longitude}")
            }
            FindingKind::OutOfSequence { issue } => {
                write!(f, "Out of sequence: [{shape} {sequence}] ")?;
                match issue {
                    SequenceIssue::Duplicate => write!(f, "Duplicate"),
                    SequenceIssue::Missing { count } => write!(f, "Missing: {count}"),
                }
            }
            FindingKind::ProjectionFailed { error } => {
                write!(f, "Projection failed: [{shape} {sequence}] {error}")
            }
            FindingKind::ZoneTransition { from, to } => write!(
                f,
                "Projection zone transition: [{shape} {sequence}] {from} -> {to}, \
                 planar segment replaced by haversine"
            ),
            FindingKind::SegmentLength { length_km, bound } => {
                write!(f, "Segment length violation: [{shape}, {sequence}] {length_km} - ")?;
                match bound {
                    SegmentBound::BelowMinimum { minimum_km } => {
                        write!(f, "Segment length less than minimum {minimum_km:.4} km")?
                    }
                    SegmentBound::AboveMaximum { maximum_km } => {
                        write!(f, "Segment length greater than maximum {maximum_km:.4} km")?
                    }
                }
                if let Some(remediation) = self.kind.remediation() {
                    write!(f, " - Suggestion: {remediation}")?;
                }
                Ok(())
            }
            FindingKind::SegmentVariance {
                declared_km,
                primary,
                primary_percent,
                spherical_percent,
            } => write!(
                f,
                "Segment length variation violation: [{shape}, {sequence}] {declared_km} km \
                 {primary} {primary_percent}% spherical {spherical_percent}% - Suggestion: {}",
                Remediation::RecalculateDistance
            ),
            FindingKind::CumulativeVariance {
                declared_km,
                planar_percent,
                spherical_percent,
            } => write!(
                f,
                "Shape distance traveled variation violation: [{shape}, {sequence}] {declared_km} km \
                 planar {planar_percent}% spherical {spherical_percent}% - Suggestion: {}",
                Remediation::RecalculateDistance
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(kind: FindingKind) -> Finding {
        Finding::new(ShapeId::from("A_shp"), 4, kind)
    }

    #[test]
    fn classifies_findings() {
        let duplicate = FindingKind::OutOfSequence {
            issue: SequenceIssue::Duplicate,
        };
        assert_eq!(duplicate.category(), FindingCategory::Structural);
        assert_eq!(duplicate.remediation(), None);

        let short = FindingKind::SegmentLength {
            length_km: 0.0005,
            bound: SegmentBound::BelowMinimum { minimum_km: 0.001 },
        };
        assert_eq!(short.category(), FindingCategory::Variance);
        assert_eq!(short.remediation(), Some(Remediation::RemovePoint));

        let long = FindingKind::SegmentLength {
            length_km: 1.5,
            bound: SegmentBound::AboveMaximum { maximum_km: 1.0 },
        };
        assert_eq!(long.remediation(), Some(Remediation::AddPoints));
        assert_eq!(long.code(), "segment_length");
    }

    #[test]
    fn formats_diagnostic_lines() {
        let missing = finding(FindingKind::OutOfSequence {
            issue: SequenceIssue::Missing { count: 1 },
        });
        assert_eq!(missing.to_string(), "Out of sequence: [A_shp 4] Missing: 1");

        let long = finding(FindingKind::SegmentLength {
            length_km: 1.5,
            bound: SegmentBound::AboveMaximum { maximum_km: 1.0 },
        });
        assert_eq!(
            long.to_string(),
            "Segment length violation: [A_shp, 4] 1.5 - Segment length greater than \
             maximum 1.0000 km - Suggestion: Add intermediate shape points as necessary"
        );
    }

    #[test]
    fn serializes_flat_records() {
        let duplicate = finding(FindingKind::OutOfSequence {
            issue: SequenceIssue::Duplicate,
        });
        assert_eq!(
            serde_json::to_value(&duplicate).unwrap(),
            serde_json::json!({
                "shape_id": "A_shp",
                "sequence": 4,
                "kind": "out_of_sequence",
                "issue": "duplicate",
            })
        );
    }
}
