//! Forward UTM projection on the WGS84 ellipsoid.
//!
//! Projected coordinates are only comparable inside the same zone and
//! hemisphere, see [`UtmZone::is_compatible`].

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::geo::GeoPoint;
use crate::precision::to_fixed;

const FALSE_NORTHING_SOUTH_M: f64 = 10_000_000.0;
const LAST_ZONE: u8 = 60;

pub const MIN_LATITUDE: f64 = -80.0;
pub const MAX_LATITUDE: f64 = 84.0;

#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize)]
#[serde(tag = "reason", content = "value", rename_all = "snake_case")]
pub enum ProjectionError {
    #[error("latitude {0} is outside the UTM domain [-80, 84]")]
    LatitudeOutOfDomain(f64),
    #[error("longitude {0} is outside the UTM domain [-180, 180]")]
    LongitudeOutOfDomain(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UtmZone {
    pub number: u8,
    pub letter: char,
}

impl UtmZone {
    pub fn is_northern(&self) -> bool {
        self.letter >= 'N'
    }

    /// Planar distances between two zones are only meaningful when both share
    /// the zone number and the hemisphere. The latitude band letter may differ.
    pub fn is_compatible(&self, other: &UtmZone) -> bool {
        self.number == other.number && self.is_northern() == other.is_northern()
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.letter)
    }
}

/// A point on the UTM grid, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub easting: f64,
    pub northing: f64,
    pub zone: UtmZone,
}

/// Projects `point` onto the UTM grid, rounding easting and northing to
/// `precision` decimals.
pub fn project(point: GeoPoint, precision: u32) -> Result<ProjectedPoint, ProjectionError> {
    let GeoPoint {
        latitude,
        longitude,
    } = point;
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(ProjectionError::LatitudeOutOfDomain(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ProjectionError::LongitudeOutOfDomain(longitude));
    }

    let letter =
        ::utm::lat_to_zone_letter(latitude).ok_or(ProjectionError::LatitudeOutOfDomain(latitude))?;
    // longitude 180 belongs to the last zone, not a 61st
    let number = ::utm::lat_lon_to_zone_number(latitude, longitude).min(LAST_ZONE);
    let zone = UtmZone { number, letter };

    let (mut northing, easting, _convergence) = ::utm::to_utm_wgs84(latitude, longitude, number);
    if !zone.is_northern() && northing < 0.0 {
        northing += FALSE_NORTHING_SOUTH_M;
    }

    Ok(ProjectedPoint {
        easting: to_fixed(easting, precision),
        northing: to_fixed(northing, precision),
        zone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1.0,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn central_meridian_maps_to_false_easting() {
        let projected = project(GeoPoint::new(0.0, 3.0), 1).unwrap();
        assert_eq!(projected.easting, 500_000.0);
        assert_eq!(projected.northing, 0.0);
        assert_eq!(projected.zone.number, 31);
        assert_eq!(projected.zone.letter, 'N');
    }

    #[test]
    fn projects_berlin() {
        let projected = project(GeoPoint::new(52.52, 13.405), 1).unwrap();
        assert_eq!(projected.zone.to_string(), "33U");
        assert_close(projected.easting, 391_779.3);
        assert_close(projected.northing, 5_820_072.2);
    }

    #[test]
    fn projects_sydney_with_false_northing() {
        let projected = project(GeoPoint::new(-33.8688, 151.2093), 1).unwrap();
        assert_eq!(projected.zone.to_string(), "56H");
        assert!(!projected.zone.is_northern());
        assert_close(projected.easting, 334_368.6);
        assert_close(projected.northing, 6_250_948.3);
    }

    #[test]
    fn applies_norway_and_svalbard_exceptions() {
        assert_eq!(project(GeoPoint::new(60.0, 5.0), 1).unwrap().zone.number, 32);
        assert_eq!(project(GeoPoint::new(78.0, 15.0), 1).unwrap().zone.number, 33);
        assert_eq!(project(GeoPoint::new(78.0, 25.0), 1).unwrap().zone.number, 35);
    }

    #[test]
    fn projects_equator_west_of_central_meridian() {
        let origin = project(GeoPoint::new(0.0, 0.0), 1).unwrap();
        assert_eq!(origin.zone.to_string(), "31N");
        assert_eq!(origin.easting, 166_021.4);
        assert_eq!(origin.northing, 0.0);
        assert_eq!(project(GeoPoint::new(0.0, 0.01), 1).unwrap().easting, 167_135.7);
    }

    #[test]
    fn southern_points_just_below_the_equator_stay_positive() {
        let projected = project(GeoPoint::new(-0.001, 3.0), 1).unwrap();
        assert_eq!(projected.zone.letter, 'M');
        assert_close(projected.northing, 10_000_000.0 - 110.6);
    }

    #[test]
    fn antimeridian_stays_in_last_zone() {
        let projected = project(GeoPoint::new(10.0, 180.0), 1).unwrap();
        assert_eq!(projected.zone.number, 60);
    }

    #[test]
    fn rejects_polar_coordinates() {
        assert_eq!(
            project(GeoPoint::new(85.0, 0.0), 1),
            Err(ProjectionError::LatitudeOutOfDomain(85.0))
        );
        assert!(matches!(
            project(GeoPoint::new(-89.0, 0.0), 1),
            Err(ProjectionError::LatitudeOutOfDomain(_))
        ));
        assert!(matches!(
            project(GeoPoint::new(f64::NAN, 0.0), 1),
            Err(ProjectionError::LatitudeOutOfDomain(_))
        ));
        assert!(matches!(
            project(GeoPoint::new(0.0, 181.0), 1),
            Err(ProjectionError::LongitudeOutOfDomain(_))
        ));
    }

    #[test]
    fn zone_compatibility_ignores_band_letter() {
        let u = UtmZone { number: 33, letter: 'U' };
        let t = UtmZone { number: 33, letter: 'T' };
        let m = UtmZone { number: 33, letter: 'M' };
        let other = UtmZone { number: 32, letter: 'U' };
        assert!(u.is_compatible(&t));
        assert!(!u.is_compatible(&m));
        assert!(!u.is_compatible(&other));
    }
}
