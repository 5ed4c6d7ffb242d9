use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::precision::{in_range, to_fixed, to_km};
use crate::utm::ProjectedPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate length of one degree of latitude at the equator.
pub const METRES_PER_DEGREE: f64 = 111_111.0;

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude_in_range(&self) -> bool {
        in_range(-90.0, self.latitude, 90.0)
    }

    pub fn longitude_in_range(&self) -> bool {
        in_range(-180.0, self.longitude, 180.0)
    }

    pub fn rounded(&self, precision: u32) -> Self {
        Self::new(
            to_fixed(self.latitude, precision),
            to_fixed(self.longitude, precision),
        )
    }
}

/// How the spherical estimator turns an angular separation into a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SphericalModel {
    /// Flat approximation with a constant 111 111 m per degree, the longitude
    /// difference scaled by the cosine of the mean latitude. Only accurate for
    /// short segments.
    #[default]
    Equirectangular,

    /// Spherical law of cosines on a sphere of radius [`EARTH_RADIUS_KM`].
    LawOfCosines,
}

impl fmt::Display for SphericalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equirectangular => write!(f, "equirectangular"),
            Self::LawOfCosines => write!(f, "law-of-cosines"),
        }
    }
}

impl FromStr for SphericalModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "equirectangular" => Ok(Self::Equirectangular),
            "law-of-cosines" | "cosines" => Ok(Self::LawOfCosines),
            other => Err(format!(
                "unknown spherical model `{other}`, expected `equirectangular` or `law-of-cosines`"
            )),
        }
    }
}

/// Great-circle distance in kilometres.
///
/// The result is rounded in metres first and again in kilometres, both at
/// `precision` decimals.
pub fn haversine_km(a: GeoPoint, b: GeoPoint, precision: u32) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();

    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    let metres = to_fixed(EARTH_RADIUS_KM * 1000.0 * c, precision);
    to_km(metres, precision)
}

/// Spherical distance in kilometres using the selected model.
pub fn spherical_km(a: GeoPoint, b: GeoPoint, model: SphericalModel, precision: u32) -> f64 {
    let metres = match model {
        SphericalModel::Equirectangular => {
            let cosine = ((a.latitude + b.latitude) / 2.0).to_radians().cos();
            let degrees = to_fixed(
                (a.latitude - b.latitude).hypot((a.longitude - b.longitude) * cosine),
                precision * 2,
            );
            degrees * METRES_PER_DEGREE
        }
        SphericalModel::LawOfCosines => {
            // acos is ill conditioned around 1 and would turn rounding noise
            // into a few centimetres.
            if a == b {
                return 0.0;
            }
            let lat1_rad = a.latitude.to_radians();
            let lat2_rad = b.latitude.to_radians();
            let dlon = (b.longitude - a.longitude).to_radians();
            let cosine = lat1_rad.sin() * lat2_rad.sin()
                + lat1_rad.cos() * lat2_rad.cos() * dlon.cos();
            EARTH_RADIUS_KM * 1000.0 * cosine.clamp(-1.0, 1.0).acos()
        }
    };
    to_km(to_fixed(metres, precision), precision)
}

/// Euclidean distance between two projected points in kilometres.
///
/// Callers are responsible for checking that both points share a zone.
pub fn planar_km(a: &ProjectedPoint, b: &ProjectedPoint, precision: u32) -> f64 {
    let metres = to_fixed(
        (a.easting - b.easting).hypot(a.northing - b.northing),
        precision,
    );
    to_km(metres, precision)
}
