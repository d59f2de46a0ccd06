use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;

/// An industrial hydrogen demand center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandCenter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub annual_demand_tons: f64,
}

impl DemandCenter {
    pub fn coordinate(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
