// Geodesy Constants
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Buildable Coordinate Envelope
pub const BUILDABLE_LAT_LIMIT: f64 = 85.0;           // Returned latitudes clamped to +/- this
pub const LON_LIMIT: f64 = 180.0;

// Candidate Search Bounds
pub const MAX_SOURCES_PER_SEARCH: usize = 20;        // Sources sampled per optimization call
pub const LAST_RESORT_SOURCE_LIMIT: usize = 10;      // Sites taken when every filter tier is empty
pub const GRID_OFFSET_STEPS: i32 = 2;                // Lattice spans -2..=2 in each axis
pub const GRID_STEP_DEGREES: f64 = 0.5;              // Lattice spacing in degrees

// Composite Score Weights
pub const SOURCE_PROXIMITY_WEIGHT: f64 = 0.3;        // Weight for closeness to the renewable source
pub const DEMAND_PROXIMITY_WEIGHT: f64 = 0.5;        // Weight for demand-weighted closeness
pub const CAPACITY_WEIGHT: f64 = 0.2;                // Weight for source capacity
pub const CAPACITY_NORMALIZATION_MW: f64 = 10_000.0; // Capacity divisor before weighting

// Threshold Convention
pub const UNBOUNDED_THRESHOLD: f64 = 1.0;            // Distance/proximity limits <= this are ignored

// Fallback Sentinels
// Placeholder values carried from the source system; reported as-is when no
// candidate clears the thresholds, they are not derived from the dataset.
pub const FALLBACK_SCORE: f64 = 0.1;
pub const FALLBACK_DEMAND_PROXIMITY: f64 = 50.0;

// Preference Defaults
pub const DEFAULT_TECHNOLOGY: &str = "electrolysis";
pub const DEFAULT_REGION: &str = "global";
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;
pub const DEFAULT_MIN_DEMAND_PROXIMITY: f64 = 10.0;
pub const DEFAULT_BUDGET: f64 = 10_000_000.0;
