use serde::{Deserialize, Serialize};

use crate::config::constants::{BUILDABLE_LAT_LIMIT, EARTH_RADIUS_KM, LON_LIMIT};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Construct a point clamped to the buildable envelope. Dataset records
    /// may sit anywhere in [-90,90], but every coordinate the engine hands
    /// back must lie within [-85,85] x [-180,180].
    pub fn clamped(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-BUILDABLE_LAT_LIMIT, BUILDABLE_LAT_LIMIT),
            longitude: longitude.clamp(-LON_LIMIT, LON_LIMIT),
        }
    }

    /// Great-circle distance to another point in kilometers, haversine form.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}
