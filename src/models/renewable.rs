use serde::{Deserialize, Serialize};

use crate::core::geo::GeoPoint;

/// A renewable generation site from the dataset snapshot. The category is an
/// open token set ("solar", "wind", "hydro", "geothermal", "biomass", ...)
/// carried verbatim from the source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenewableSite {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub capacity_mw: f64,
    #[serde(default)]
    pub capacity_factor: f64,
}

impl RenewableSite {
    pub fn coordinate(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}
