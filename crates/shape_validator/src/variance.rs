//! Declared against computed distances of a segment.

use utility::precision::{in_range, percent_difference};

use crate::{
    accumulator::{PlanarSegment, Segment},
    config::ValidationConfig,
    finding::{Estimator, FindingKind, SegmentBound},
};

/// Percentage differences of the declared distances against each estimator.
/// Positive values mean the declared distance is longer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variance {
    /// `None` when the segment has no planar length.
    pub planar_segment_percent: Option<f64>,
    pub planar_cumulative_percent: f64,
    pub spherical_segment_percent: f64,
    pub spherical_cumulative_percent: f64,
    pub haversine_segment_percent: f64,
}

pub fn analyze(segment: &Segment, config: &ValidationConfig) -> Variance {
    let precision = config.precision;
    let declared = segment.declared_segment_km;
    let cumulative = segment.declared_cumulative_km;
    Variance {
        planar_segment_percent: segment
            .planar
            .km()
            .map(|planar| percent_difference(declared, planar, precision)),
        planar_cumulative_percent: percent_difference(
            cumulative,
            segment.planar_total_km,
            precision,
        ),
        spherical_segment_percent: percent_difference(declared, segment.spherical_km, precision),
        spherical_cumulative_percent: percent_difference(
            cumulative,
            segment.spherical_total_km,
            precision,
        ),
        haversine_segment_percent: percent_difference(declared, segment.haversine_km, precision),
    }
}

/// Findings for the segment ending at the current point, in report order:
/// zone transition, segment length, segment variance, cumulative variance.
pub fn findings(segment: &Segment, variance: &Variance, config: &ValidationConfig) -> Vec<FindingKind> {
    let mut findings = Vec::new();

    if let PlanarSegment::ZoneTransition { from, to } = segment.planar {
        findings.push(FindingKind::ZoneTransition { from, to });
    }

    let length_km = segment.declared_segment_km;
    if !in_range(config.min_segment_km, length_km, config.max_segment_km) {
        let bound = if length_km < config.min_segment_km {
            SegmentBound::BelowMinimum {
                minimum_km: config.min_segment_km,
            }
        } else {
            SegmentBound::AboveMaximum {
                maximum_km: config.max_segment_km,
            }
        };
        findings.push(FindingKind::SegmentLength { length_km, bound });
    }

    // Without a planar length haversine confirms the spherical estimator.
    let (primary, primary_percent) = match variance.planar_segment_percent {
        Some(percent) => (Estimator::Planar, percent),
        None => (Estimator::Haversine, variance.haversine_segment_percent),
    };
    if config.exceeds_variance(primary_percent)
        && config.exceeds_variance(variance.spherical_segment_percent)
    {
        findings.push(FindingKind::SegmentVariance {
            declared_km: segment.declared_segment_km,
            primary,
            primary_percent,
            spherical_percent: variance.spherical_segment_percent,
        });
    }

    if config.exceeds_variance(variance.planar_cumulative_percent)
        && config.exceeds_variance(variance.spherical_cumulative_percent)
    {
        findings.push(FindingKind::CumulativeVariance {
            declared_km: segment.declared_cumulative_km,
            planar_percent: variance.planar_cumulative_percent,
            spherical_percent: variance.spherical_cumulative_percent,
        });
    }

    findings
}
