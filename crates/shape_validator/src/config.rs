use serde::{Deserialize, Serialize};
use thiserror::Error;
use utility::geo::SphericalModel;

/// Decimals kept for coordinates before the spherical estimators see them.
pub const COORDINATE_PRECISION: u32 = 6;

/// Decimals kept for every distance in kilometres.
pub const DISTANCE_PRECISION: u32 = 4;

/// Decimals kept for projected easting and northing in metres.
pub const PROJECTION_PRECISION: u32 = 1;

pub const DEFAULT_PRECISION: u32 = 3;
/// Beyond this many decimals `f64` rounding no longer changes anything.
pub const MAX_PRECISION: u32 = 12;
pub const DEFAULT_MIN_SEGMENT_KM: f64 = 0.001;
pub const DEFAULT_MAX_SEGMENT_KM: f64 = 1.000;
pub const DEFAULT_VARIANCE_THRESHOLD_PERCENT: f64 = 1.0;

/// Read-only tuning shared by every shape validation of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Decimals for percentages and reported segment lengths.
    pub precision: u32,
    pub min_segment_km: f64,
    pub max_segment_km: f64,
    /// A variance finding needs two estimators beyond this many percent.
    pub variance_threshold_percent: f64,
    pub spherical_model: SphericalModel,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            min_segment_km: DEFAULT_MIN_SEGMENT_KM,
            max_segment_km: DEFAULT_MAX_SEGMENT_KM,
            variance_threshold_percent: DEFAULT_VARIANCE_THRESHOLD_PERCENT,
            spherical_model: SphericalModel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("precision {0} exceeds the maximum of {MAX_PRECISION} decimals")]
    Precision(u32),
    #[error("minimum segment length {min} km exceeds the maximum {max} km")]
    SegmentBounds { min: f64, max: f64 },
}

impl ValidationConfig {
    /// Rejects settings under which every segment would be out of bounds or
    /// rounding would overflow.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Precision(self.precision));
        }
        if self.min_segment_km > self.max_segment_km {
            return Err(ConfigError::SegmentBounds {
                min: self.min_segment_km,
                max: self.max_segment_km,
            });
        }
        Ok(self)
    }

    pub fn exceeds_variance(&self, percent: f64) -> bool {
        percent.abs() > self.variance_threshold_percent
    }
}
