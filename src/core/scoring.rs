use crate::config::constants::{
    CAPACITY_NORMALIZATION_MW, CAPACITY_WEIGHT, DEMAND_PROXIMITY_WEIGHT, SOURCE_PROXIMITY_WEIGHT,
};
use crate::config::preferences::SitingPreferences;
use crate::core::geo::GeoPoint;
use crate::models::demand::DemandCenter;

/// Average demand-weighted closeness of a candidate coordinate. Each demand
/// center passing the region filter contributes annual_demand_tons/(d+1),
/// or the full annual tonnage when the candidate sits exactly on it. The
/// denominator is floored at 1 so a region with no demand centers scores 0
/// instead of dividing by zero.
pub fn average_demand_proximity(
    point: &GeoPoint,
    demand_centers: &[DemandCenter],
    prefs: &SitingPreferences,
) -> f64 {
    let mut total = 0.0;
    let mut considered = 0usize;

    for center in demand_centers {
        if !prefs.region_matches(&center.region) {
            continue;
        }
        let distance = point.distance_to(&center.coordinate());
        if distance > 0.0 {
            total += center.annual_demand_tons / (distance + 1.0);
        } else {
            total += center.annual_demand_tons;
        }
        considered += 1;
    }

    total / considered.max(1) as f64
}

/// Weighted composite of source proximity, demand proximity, and source
/// capacity. Higher is better.
pub fn composite_score(
    distance_to_source_km: f64,
    avg_demand_proximity: f64,
    source_capacity_mw: f64,
) -> f64 {
    SOURCE_PROXIMITY_WEIGHT * (1.0 / (distance_to_source_km + 1.0))
        + DEMAND_PROXIMITY_WEIGHT * avg_demand_proximity
        + CAPACITY_WEIGHT * (source_capacity_mw / CAPACITY_NORMALIZATION_MW)
}
