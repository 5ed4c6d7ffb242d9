//! Running distance totals along a shape.
//!
//! Only points with a declared distance take part. The state is a plain value
//! moved into and out of every step, so validating one shape never touches
//! state of another.

use utility::{
    geo::{haversine_km, planar_km, spherical_km, GeoPoint},
    precision::to_fixed,
    utm::{ProjectedPoint, UtmZone},
};

use crate::config::{ValidationConfig, DISTANCE_PRECISION};

/// A distance-bearing point as seen by the accumulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Position already rounded to the coordinate precision.
    pub position: GeoPoint,
    /// `None` when the point could not be projected.
    pub projected: Option<ProjectedPoint>,
    /// Declared cumulative distance in kilometres.
    pub declared_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningTotals {
    origin_declared_km: f64,
    previous_declared_km: f64,
    previous_position: GeoPoint,
    previous_projected: Option<ProjectedPoint>,
    planar_total_km: f64,
    spherical_total_km: f64,
}

impl RunningTotals {
    fn start(observation: &Observation) -> Self {
        Self {
            origin_declared_km: observation.declared_km,
            previous_declared_km: observation.declared_km,
            previous_position: observation.position,
            previous_projected: observation.projected,
            planar_total_km: 0.0,
            spherical_total_km: 0.0,
        }
    }

    pub fn planar_total_km(&self) -> f64 {
        self.planar_total_km
    }

    pub fn spherical_total_km(&self) -> f64 {
        self.spherical_total_km
    }
}

/// Planar length of a segment, if one could be measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanarSegment {
    Measured(f64),
    /// One of the two ends failed to project.
    Unavailable,
    /// The ends lie in different zones or hemispheres.
    ZoneTransition { from: UtmZone, to: UtmZone },
}

impl PlanarSegment {
    fn between(previous: Option<ProjectedPoint>, current: Option<ProjectedPoint>) -> Self {
        match (previous, current) {
            (Some(previous), Some(current)) if previous.zone.is_compatible(&current.zone) => {
                Self::Measured(planar_km(&previous, &current, DISTANCE_PRECISION))
            }
            (Some(previous), Some(current)) => Self::ZoneTransition {
                from: previous.zone,
                to: current.zone,
            },
            _ => Self::Unavailable,
        }
    }

    pub fn km(&self) -> Option<f64> {
        match self {
            Self::Measured(km) => Some(*km),
            _ => None,
        }
    }
}

/// Declared and computed lengths between two consecutive distance-bearing
/// points, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub declared_segment_km: f64,
    /// Declared distance since the first distance-bearing point.
    pub declared_cumulative_km: f64,
    pub planar: PlanarSegment,
    /// Includes the haversine length of segments without a planar length.
    pub planar_total_km: f64,
    pub spherical_km: f64,
    pub spherical_total_km: f64,
    pub haversine_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Accumulator {
    #[default]
    Uninitialized,
    Accumulating(RunningTotals),
}

impl Accumulator {
    /// Feeds the next distance-bearing point in sequence order. The first point
    /// only initializes the totals and yields no segment.
    pub fn step(self, observation: Observation, config: &ValidationConfig) -> (Self, Option<Segment>) {
        let totals = match self {
            Self::Uninitialized => {
                return (Self::Accumulating(RunningTotals::start(&observation)), None)
            }
            Self::Accumulating(totals) => totals,
        };

        let declared_segment_km = to_fixed(
            observation.declared_km - totals.previous_declared_km,
            DISTANCE_PRECISION,
        );
        let planar = PlanarSegment::between(totals.previous_projected, observation.projected);
        let haversine = haversine_km(
            totals.previous_position,
            observation.position,
            DISTANCE_PRECISION,
        );
        let spherical = spherical_km(
            totals.previous_position,
            observation.position,
            config.spherical_model,
            DISTANCE_PRECISION,
        );

        let planar_total_km = to_fixed(
            totals.planar_total_km + planar.km().unwrap_or(haversine),
            DISTANCE_PRECISION,
        );
        let spherical_total_km = to_fixed(totals.spherical_total_km + spherical, DISTANCE_PRECISION);

        let segment = Segment {
            declared_segment_km,
            declared_cumulative_km: to_fixed(
                observation.declared_km - totals.origin_declared_km,
                DISTANCE_PRECISION,
            ),
            planar,
            planar_total_km,
            spherical_km: spherical,
            spherical_total_km,
            haversine_km: haversine,
        };

        let next = RunningTotals {
            origin_declared_km: totals.origin_declared_km,
            previous_declared_km: observation.declared_km,
            previous_position: observation.position,
            previous_projected: observation.projected,
            planar_total_km,
            spherical_total_km,
        };
        (Self::Accumulating(next), Some(segment))
    }
}
