use crate::config::constants::{GRID_OFFSET_STEPS, GRID_STEP_DEGREES};
use crate::config::preferences::SitingPreferences;
use crate::core::geo::GeoPoint;

/// A sampled coordinate around a renewable source, with its great-circle
/// distance back to that source.
#[derive(Debug, Clone, Copy)]
pub struct GridCandidate {
    pub point: GeoPoint,
    pub distance_to_source_km: f64,
}

/// Generate the offset lattice around a source coordinate. Offsets run
/// i,j in -2..=2 at half-degree spacing, row-major, so enumeration order is
/// fixed for a given source. Candidates are clamped into the buildable
/// envelope before the distance gate; the distance is measured from the
/// unclamped source to the clamped candidate.
pub fn sample_around(source: &GeoPoint, prefs: &SitingPreferences) -> Vec<GridCandidate> {
    let mut candidates = Vec::with_capacity(
        ((2 * GRID_OFFSET_STEPS + 1) * (2 * GRID_OFFSET_STEPS + 1)) as usize,
    );

    for i in -GRID_OFFSET_STEPS..=GRID_OFFSET_STEPS {
        for j in -GRID_OFFSET_STEPS..=GRID_OFFSET_STEPS {
            let point = GeoPoint::clamped(
                source.latitude + f64::from(i) * GRID_STEP_DEGREES,
                source.longitude + f64::from(j) * GRID_STEP_DEGREES,
            );
            let distance_to_source_km = source.distance_to(&point);

            if distance_to_source_km > prefs.max_distance_to_renewable
                && prefs.distance_limit_bounded()
            {
                continue;
            }

            candidates.push(GridCandidate {
                point,
                distance_to_source_km,
            });
        }
    }

    candidates
}
