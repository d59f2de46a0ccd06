use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_BUDGET, DEFAULT_MAX_DISTANCE_KM, DEFAULT_MIN_DEMAND_PROXIMITY, DEFAULT_REGION,
    DEFAULT_TECHNOLOGY, UNBOUNDED_THRESHOLD,
};

/// Caller-supplied siting preferences. Every recognized field has an explicit
/// default so a partial (or empty) request body resolves to a full set of
/// options at the boundary instead of inside the search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitingPreferences {
    #[serde(default = "default_technology")]
    pub technology: String,
    #[serde(default)]
    pub min_capacity: f64,
    #[serde(default = "default_max_distance")]
    pub max_distance_to_renewable: f64,
    #[serde(default = "default_min_demand_proximity")]
    pub min_demand_proximity: f64,
    #[serde(default = "default_budget")]
    pub budget: f64,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_technology() -> String {
    DEFAULT_TECHNOLOGY.to_string()
}

fn default_max_distance() -> f64 {
    DEFAULT_MAX_DISTANCE_KM
}

fn default_min_demand_proximity() -> f64 {
    DEFAULT_MIN_DEMAND_PROXIMITY
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Default for SitingPreferences {
    fn default() -> Self {
        Self {
            technology: default_technology(),
            min_capacity: 0.0,
            max_distance_to_renewable: default_max_distance(),
            min_demand_proximity: default_min_demand_proximity(),
            budget: default_budget(),
            region: default_region(),
        }
    }
}

impl SitingPreferences {
    /// Reject values no search can honor. Budget is validated here even
    /// though scoring ignores it.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("min_capacity", self.min_capacity),
            ("max_distance_to_renewable", self.max_distance_to_renewable),
            ("min_demand_proximity", self.min_demand_proximity),
            ("budget", self.budget),
        ] {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number", name));
            }
            if value < 0.0 {
                return Err(format!("{} must be non-negative, got {}", name, value));
            }
        }
        Ok(())
    }

    /// Whether the region filter constrains anything. "global" and the empty
    /// string both mean worldwide.
    pub fn region_is_global(&self) -> bool {
        self.region.is_empty() || self.region.eq_ignore_ascii_case(DEFAULT_REGION)
    }

    /// Case-insensitive region check, wildcarded when global.
    pub fn region_matches(&self, region: &str) -> bool {
        self.region_is_global() || region.eq_ignore_ascii_case(&self.region)
    }

    /// Distance limits at or below 1 km mean "no limit".
    pub fn distance_limit_bounded(&self) -> bool {
        self.max_distance_to_renewable > UNBOUNDED_THRESHOLD
    }

    /// Proximity floors at or below 1 mean "no floor".
    pub fn demand_proximity_bounded(&self) -> bool {
        self.min_demand_proximity > UNBOUNDED_THRESHOLD
    }
}
