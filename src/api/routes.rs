use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::preferences::SitingPreferences;
use crate::core::optimizer::{self, OptimizationOutcome, SiteRecommendation};
use crate::data::dataset::{DataInfo, DatasetHandle, HydrogenDataset};

#[derive(Clone)]
pub struct AppState {
    pub dataset: DatasetHandle,
}

/// Response body for `/api/optimize`. Engine-detected conditions always ride
/// a 200; the error variant carries the structured failure text.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OptimizeResponse {
    Found {
        optimal_location: SiteRecommendation,
        message: String,
    },
    Error {
        error: String,
    },
}

pub async fn get_data(State(state): State<AppState>) -> Json<HydrogenDataset> {
    Json((*state.dataset.snapshot()).clone())
}

pub async fn get_categories() -> Json<Vec<&'static str>> {
    Json(HydrogenDataset::CATEGORY_KEYS.to_vec())
}

pub async fn get_regions(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.snapshot().regions())
}

pub async fn data_info(State(state): State<AppState>) -> Json<DataInfo> {
    Json(state.dataset.snapshot().data_info())
}

pub async fn optimize(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Json<OptimizeResponse> {
    info!(request = %body, "optimization request received");
    let snapshot = state.dataset.snapshot();
    Json(run_optimize(&snapshot, body))
}

/// Boundary logic shared by the HTTP handler and tests: coerce the raw body
/// into validated preferences, then run the engine. Malformed fields never
/// reach the search.
pub fn run_optimize(dataset: &HydrogenDataset, body: Value) -> OptimizeResponse {
    let prefs: SitingPreferences = match serde_json::from_value(body) {
        Ok(prefs) => prefs,
        Err(err) => {
            return OptimizeResponse::Error {
                error: format!("Optimization failed: {}", err),
            }
        }
    };
    if let Err(detail) = prefs.validate() {
        return OptimizeResponse::Error {
            error: format!("Optimization failed: {}", detail),
        };
    }

    let outcome = optimizer::optimize_site(dataset, &prefs);
    let message = outcome.message().to_string();
    match outcome {
        OptimizationOutcome::Optimal(rec) | OptimizationOutcome::Fallback(rec) => {
            OptimizeResponse::Found {
                optimal_location: rec,
                message,
            }
        }
        OptimizationOutcome::NoSuitableSources => OptimizeResponse::Error { error: message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demand::DemandCenter;
    use crate::models::renewable::RenewableSite;
    use serde_json::json;

    fn dataset() -> HydrogenDataset {
        HydrogenDataset {
            renewable_energy: vec![RenewableSite {
                id: "re_001".to_string(),
                name: "Fresno Solar".to_string(),
                category: "solar".to_string(),
                latitude: 36.78,
                longitude: -119.41,
                country: "United States".to_string(),
                region: "North America".to_string(),
                capacity_mw: 500.0,
                capacity_factor: 0.24,
            }],
            demand_centers: vec![DemandCenter {
                id: "dc_001".to_string(),
                name: "LA Basin".to_string(),
                sector: "refining".to_string(),
                latitude: 34.05,
                longitude: -118.24,
                country: "United States".to_string(),
                region: "North America".to_string(),
                annual_demand_tons: 5000.0,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn empty_body_runs_with_defaults() {
        let response = run_optimize(&dataset(), json!({}));
        match response {
            OptimizeResponse::Found {
                optimal_location,
                message,
            } => {
                assert_eq!(message, optimizer::OPTIMAL_MESSAGE);
                assert!(optimal_location.score > 0.0);
            }
            OptimizeResponse::Error { error } => panic!("unexpected error: {}", error),
        }
    }

    #[test]
    fn malformed_numeric_field_is_reported_at_the_boundary() {
        let response = run_optimize(&dataset(), json!({"min_capacity": "lots"}));
        match response {
            OptimizeResponse::Error { error } => {
                assert!(
                    error.starts_with("Optimization failed:"),
                    "unexpected error text: {}",
                    error
                );
            }
            other => panic!("expected an error, got {:?}", other),
        }
    }

    #[test]
    fn empty_dataset_returns_the_no_sources_error() {
        let response = run_optimize(&HydrogenDataset::default(), json!({}));
        match response {
            OptimizeResponse::Error { error } => {
                assert_eq!(error, optimizer::NO_SOURCES_ERROR);
            }
            other => panic!("expected an error, got {:?}", other),
        }
    }

    #[test]
    fn found_response_serializes_with_the_wire_field_names() {
        let response = run_optimize(&dataset(), json!({}));
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("optimal_location").is_some());
        assert!(value.get("message").is_some());
        assert!(value["optimal_location"].get("renewable_source").is_some());
        assert!(value["optimal_location"]
            .get("avg_demand_proximity_score")
            .is_some());
    }
}
