use serde::Serialize;
use tracing::info;

use crate::config::constants::{
    FALLBACK_DEMAND_PROXIMITY, FALLBACK_SCORE, MAX_SOURCES_PER_SEARCH,
};
use crate::config::preferences::SitingPreferences;
use crate::core::filter::filter_sources;
use crate::core::geo::GeoPoint;
use crate::core::sampling::sample_around;
use crate::core::scoring::{average_demand_proximity, composite_score};
use crate::data::dataset::HydrogenDataset;
use crate::models::renewable::RenewableSite;
use crate::utils::logging::{self, LocationSearchType, OperationCategory};

pub const OPTIMAL_MESSAGE: &str = "Optimal location found based on your criteria";
pub const FALLBACK_MESSAGE: &str = "Fallback location provided - try relaxing your criteria";
pub const NO_SOURCES_ERROR: &str = "No suitable renewable energy sites found with given criteria";

/// A scored candidate coordinate, alive only for the duration of one search.
#[derive(Debug, Clone, Copy)]
struct CandidateLocation<'a> {
    point: GeoPoint,
    distance_to_source_km: f64,
    source: &'a RenewableSite,
    avg_demand_proximity: f64,
    score: f64,
}

/// The recommendation handed back to callers, mirroring the API response
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteRecommendation {
    pub latitude: f64,
    pub longitude: f64,
    pub score: f64,
    pub distance_to_renewable_km: f64,
    pub renewable_source: String,
    pub renewable_type: String,
    pub renewable_capacity_mw: f64,
    pub avg_demand_proximity_score: f64,
    pub country: String,
    pub region: String,
}

/// Terminal states of one optimization call. "No result" is a value here,
/// never a panic or an error type escaping the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationOutcome {
    Optimal(SiteRecommendation),
    Fallback(SiteRecommendation),
    NoSuitableSources,
}

impl OptimizationOutcome {
    pub fn recommendation(&self) -> Option<&SiteRecommendation> {
        match self {
            OptimizationOutcome::Optimal(rec) | OptimizationOutcome::Fallback(rec) => Some(rec),
            OptimizationOutcome::NoSuitableSources => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            OptimizationOutcome::Optimal(_) => OPTIMAL_MESSAGE,
            OptimizationOutcome::Fallback(_) => FALLBACK_MESSAGE,
            OptimizationOutcome::NoSuitableSources => NO_SOURCES_ERROR,
        }
    }
}

/// Per-call search diagnostics, reported alongside the outcome for the CLI
/// and the CSV export.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub filter_tier: String,
    pub sources_matched: usize,
    pub sources_sampled: usize,
    pub candidates_considered: usize,
}

/// Run one siting search over an immutable dataset snapshot.
pub fn optimize_site(dataset: &HydrogenDataset, prefs: &SitingPreferences) -> OptimizationOutcome {
    optimize_site_with_report(dataset, prefs).0
}

/// As `optimize_site`, also returning the search diagnostics.
pub fn optimize_site_with_report(
    dataset: &HydrogenDataset,
    prefs: &SitingPreferences,
) -> (OptimizationOutcome, SearchReport) {
    let _timing = logging::start_timing(
        "optimize_site",
        OperationCategory::LocationSearch {
            subcategory: LocationSearchType::FullSearch,
        },
    );

    info!(
        technology = %prefs.technology,
        min_capacity = prefs.min_capacity,
        region = %prefs.region,
        "optimization requested"
    );

    let (sources, tier) = {
        let _timing = logging::start_timing(
            "filter_sources",
            OperationCategory::LocationSearch {
                subcategory: LocationSearchType::SourceFilter,
            },
        );
        filter_sources(&dataset.renewable_energy, prefs)
    };

    let mut report = SearchReport {
        filter_tier: tier.as_str().to_string(),
        sources_matched: sources.len(),
        sources_sampled: sources.len().min(MAX_SOURCES_PER_SEARCH),
        candidates_considered: 0,
    };

    if sources.is_empty() {
        info!("no candidate sources at any filter tier");
        return (OptimizationOutcome::NoSuitableSources, report);
    }

    let mut best: Option<CandidateLocation> = None;
    let mut best_score = -1.0;

    for &source in sources.iter().take(MAX_SOURCES_PER_SEARCH) {
        let source_point = source.coordinate();
        for grid in sample_around(&source_point, prefs) {
            let avg_demand_proximity =
                average_demand_proximity(&grid.point, &dataset.demand_centers, prefs);
            if avg_demand_proximity < prefs.min_demand_proximity
                && prefs.demand_proximity_bounded()
            {
                continue;
            }

            let score = composite_score(
                grid.distance_to_source_km,
                avg_demand_proximity,
                source.capacity_mw,
            );
            report.candidates_considered += 1;

            if score > best_score {
                best_score = score;
                best = Some(CandidateLocation {
                    point: grid.point,
                    distance_to_source_km: grid.distance_to_source_km,
                    source,
                    avg_demand_proximity,
                    score,
                });
            }
        }
    }

    info!(
        tier = %report.filter_tier,
        considered = report.candidates_considered,
        best_score,
        "search complete"
    );

    let outcome = match best {
        Some(candidate) if candidate.score > 0.0 => {
            OptimizationOutcome::Optimal(recommend(&candidate))
        }
        // Every candidate fell to a threshold; hand back the first filtered
        // source itself so the caller has something to relax around.
        _ => OptimizationOutcome::Fallback(fallback_recommendation(sources[0])),
    };

    (outcome, report)
}

fn recommend(candidate: &CandidateLocation) -> SiteRecommendation {
    SiteRecommendation {
        latitude: candidate.point.latitude,
        longitude: candidate.point.longitude,
        score: round_to(candidate.score, 4),
        distance_to_renewable_km: round_to(candidate.distance_to_source_km, 2),
        renewable_source: candidate.source.name.clone(),
        renewable_type: candidate.source.category.clone(),
        renewable_capacity_mw: candidate.source.capacity_mw,
        avg_demand_proximity_score: round_to(candidate.avg_demand_proximity, 2),
        country: candidate.source.country.clone(),
        region: candidate.source.region.clone(),
    }
}

fn fallback_recommendation(source: &RenewableSite) -> SiteRecommendation {
    let point = GeoPoint::clamped(source.latitude, source.longitude);
    SiteRecommendation {
        latitude: point.latitude,
        longitude: point.longitude,
        score: FALLBACK_SCORE,
        distance_to_renewable_km: 0.0,
        renewable_source: source.name.clone(),
        renewable_type: source.category.clone(),
        renewable_capacity_mw: source.capacity_mw,
        avg_demand_proximity_score: FALLBACK_DEMAND_PROXIMITY,
        country: source.country.clone(),
        region: source.region.clone(),
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demand::DemandCenter;

    fn site(name: &str, category: &str, lat: f64, lon: f64, capacity_mw: f64) -> RenewableSite {
        RenewableSite {
            id: format!("re_{}", name),
            name: name.to_string(),
            category: category.to_string(),
            latitude: lat,
            longitude: lon,
            country: "United States".to_string(),
            region: "North America".to_string(),
            capacity_mw,
            capacity_factor: 0.25,
        }
    }

    fn center(lat: f64, lon: f64, annual_demand_tons: f64) -> DemandCenter {
        DemandCenter {
            id: "dc_001".to_string(),
            name: "Industrial Center".to_string(),
            sector: "chemical_industry".to_string(),
            latitude: lat,
            longitude: lon,
            country: "United States".to_string(),
            region: "North America".to_string(),
            annual_demand_tons,
        }
    }

    fn dataset(sites: Vec<RenewableSite>, centers: Vec<DemandCenter>) -> HydrogenDataset {
        HydrogenDataset {
            renewable_energy: sites,
            demand_centers: centers,
            ..Default::default()
        }
    }

    #[test]
    fn california_scenario_scores_the_source_cell_by_the_formula() {
        let ds = dataset(
            vec![site("Fresno Solar", "solar", 36.78, -119.41, 500.0)],
            vec![center(34.05, -118.24, 5000.0)],
        );
        let prefs = SitingPreferences::default();

        let outcome = optimize_site(&ds, &prefs);
        let rec = outcome.recommendation().expect("expected a recommendation");
        assert!(matches!(outcome, OptimizationOutcome::Optimal(_)));

        // The lattice cell sitting on the source has distance 0, so its
        // score is 0.3 + 0.5*proximity + 0.2*(500/10000). The winner must be
        // at least as good.
        let source_point = GeoPoint::new(36.78, -119.41);
        let d = source_point.distance_to(&GeoPoint::new(34.05, -118.24));
        let center_cell_score = 0.3 + 0.5 * (5000.0 / (d + 1.0)) + 0.2 * 0.05;
        assert!(
            rec.score >= round_to(center_cell_score, 4),
            "winner {} below source-cell score {}",
            rec.score,
            center_cell_score
        );
    }

    #[test]
    fn colocated_demand_makes_the_source_cell_the_winner() {
        let ds = dataset(
            vec![site("Fresno Solar", "solar", 36.78, -119.41, 500.0)],
            vec![center(36.78, -119.41, 5000.0)],
        );
        let prefs = SitingPreferences::default();

        let outcome = optimize_site(&ds, &prefs);
        let rec = outcome.recommendation().unwrap();
        assert_eq!(rec.latitude, 36.78);
        assert_eq!(rec.longitude, -119.41);
        assert_eq!(rec.distance_to_renewable_km, 0.0);
        // d == 0 contributes the full tonnage, and it is the only center.
        let expected = 0.3 + 0.5 * 5000.0 + 0.2 * 0.05;
        assert_eq!(rec.score, round_to(expected, 4));
        assert_eq!(rec.avg_demand_proximity_score, 5000.0);
    }

    #[test]
    fn score_ties_keep_the_earliest_candidate() {
        // Two identical sources produce identical lattices and scores; the
        // strict > comparison must keep the first source's candidate.
        let ds = dataset(
            vec![
                site("First", "solar", 40.0, -100.0, 300.0),
                site("Second", "solar", 40.0, -100.0, 300.0),
            ],
            vec![],
        );
        let prefs = SitingPreferences {
            min_demand_proximity: 0.5, // unbounded, so zero proximity survives
            ..Default::default()
        };

        let outcome = optimize_site(&ds, &prefs);
        let rec = outcome.recommendation().unwrap();
        assert_eq!(rec.renewable_source, "First");
    }

    #[test]
    fn empty_renewable_collection_is_a_structured_failure() {
        let ds = dataset(vec![], vec![center(34.0, -118.0, 5000.0)]);
        let outcome = optimize_site(&ds, &SitingPreferences::default());
        assert_eq!(outcome, OptimizationOutcome::NoSuitableSources);
        assert_eq!(outcome.message(), NO_SOURCES_ERROR);
        assert!(outcome.recommendation().is_none());
    }

    #[test]
    fn unreachable_thresholds_resolve_to_the_sentinel_fallback() {
        let ds = dataset(
            vec![site("Lone Solar", "solar", 36.78, -119.41, 500.0)],
            vec![center(34.05, -118.24, 10.0)],
        );
        let prefs = SitingPreferences {
            min_demand_proximity: 1e9,
            ..Default::default()
        };

        let outcome = optimize_site(&ds, &prefs);
        match outcome {
            OptimizationOutcome::Fallback(rec) => {
                assert_eq!(rec.score, 0.1);
                assert_eq!(rec.avg_demand_proximity_score, 50.0);
                assert_eq!(rec.distance_to_renewable_km, 0.0);
                assert_eq!(rec.latitude, 36.78);
                assert_eq!(rec.longitude, -119.41);
                assert_eq!(rec.renewable_source, "Lone Solar");
            }
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn distance_limit_of_one_admits_every_lattice_cell() {
        let ds = dataset(
            vec![site("Wide Solar", "solar", 36.78, -119.41, 500.0)],
            vec![center(34.05, -118.24, 5000.0)],
        );

        let unbounded = SitingPreferences {
            max_distance_to_renewable: 1.0,
            min_demand_proximity: 0.5,
            ..Default::default()
        };
        let (_, report) = optimize_site_with_report(&ds, &unbounded);
        assert_eq!(report.candidates_considered, 25);

        let bounded = SitingPreferences {
            max_distance_to_renewable: 50.0,
            min_demand_proximity: 0.5,
            ..Default::default()
        };
        let (_, report) = optimize_site_with_report(&ds, &bounded);
        assert!(report.candidates_considered < 25);
        assert!(report.candidates_considered > 0);
    }

    #[test]
    fn returned_coordinates_stay_inside_the_buildable_envelope() {
        let ds = dataset(
            vec![site("Polar Wind", "wind", 84.9, 179.9, 800.0)],
            vec![center(84.0, 179.0, 5000.0)],
        );
        let prefs = SitingPreferences {
            technology: "wind".to_string(),
            max_distance_to_renewable: 1.0,
            min_demand_proximity: 0.5,
            ..Default::default()
        };

        let rec = optimize_site(&ds, &prefs)
            .recommendation()
            .cloned()
            .unwrap();
        assert!((-85.0..=85.0).contains(&rec.latitude));
        assert!((-180.0..=180.0).contains(&rec.longitude));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let ds = dataset(
            vec![
                site("A", "solar", 36.78, -119.41, 500.0),
                site("B", "wind", 35.00, -101.50, 900.0),
            ],
            vec![center(34.05, -118.24, 5000.0), center(35.22, -101.83, 800.0)],
        );
        let prefs = SitingPreferences::default();

        let first = optimize_site(&ds, &prefs);
        let second = optimize_site(&ds, &prefs);
        assert_eq!(first, second);

        let a = serde_json::to_string(first.recommendation().unwrap()).unwrap();
        let b = serde_json::to_string(second.recommendation().unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn winner_has_the_maximum_score_among_survivors() {
        let ds = dataset(
            vec![
                site("A", "solar", 36.78, -119.41, 500.0),
                site("B", "solar", 35.00, -101.50, 900.0),
            ],
            vec![center(34.05, -118.24, 5000.0), center(35.22, -101.83, 800.0)],
        );
        let prefs = SitingPreferences::default();

        let rec = optimize_site(&ds, &prefs)
            .recommendation()
            .cloned()
            .unwrap();

        // Re-enumerate every surviving candidate and confirm nothing beats
        // the selected score.
        let mut max_score = f64::MIN;
        for source in &ds.renewable_energy {
            for grid in sample_around(&source.coordinate(), &prefs) {
                let proximity =
                    average_demand_proximity(&grid.point, &ds.demand_centers, &prefs);
                if proximity < prefs.min_demand_proximity && prefs.demand_proximity_bounded() {
                    continue;
                }
                let score =
                    composite_score(grid.distance_to_source_km, proximity, source.capacity_mw);
                max_score = max_score.max(score);
            }
        }
        assert_eq!(rec.score, round_to(max_score, 4));
    }
}
