use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::models::demand::DemandCenter;
use crate::models::infrastructure::{
    EnvironmentalConstraint, HydrogenPlant, StorageFacility, TransportLink,
};
use crate::models::renewable::RenewableSite;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetMetadata {
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub coverage: String,
}

/// The full infrastructure document. Loaded once at startup and treated as
/// immutable afterwards; every collection tolerates being absent from the
/// source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HydrogenDataset {
    #[serde(default)]
    pub metadata: DatasetMetadata,
    #[serde(default)]
    pub renewable_energy: Vec<RenewableSite>,
    #[serde(default)]
    pub hydrogen_production: Vec<HydrogenPlant>,
    #[serde(default)]
    pub storage_facilities: Vec<StorageFacility>,
    #[serde(default)]
    pub transport_infrastructure: Vec<TransportLink>,
    #[serde(default)]
    pub demand_centers: Vec<DemandCenter>,
    #[serde(default)]
    pub environmental_constraints: Vec<EnvironmentalConstraint>,
    #[serde(default)]
    pub economic_data: Vec<serde_json::Value>,
}

/// Capacity extremes across the renewable collection, zeros when empty.
#[derive(Debug, Clone, Serialize)]
pub struct CapacityRange {
    pub min: f64,
    pub max: f64,
}

/// Diagnostic summary served by the debug endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct DataInfo {
    pub total_renewable_sites: usize,
    pub regions: Vec<String>,
    pub technologies: Vec<String>,
    pub capacity_range: CapacityRange,
}

impl HydrogenDataset {
    /// Dataset category keys, metadata excluded.
    pub const CATEGORY_KEYS: [&'static str; 7] = [
        "renewable_energy",
        "hydrogen_production",
        "storage_facilities",
        "transport_infrastructure",
        "demand_centers",
        "environmental_constraints",
        "economic_data",
    ];

    /// Sorted distinct regions across the three region-bearing collections.
    pub fn regions(&self) -> Vec<String> {
        let mut regions = BTreeSet::new();
        for region in self
            .renewable_energy
            .iter()
            .map(|s| &s.region)
            .chain(self.hydrogen_production.iter().map(|p| &p.region))
            .chain(self.demand_centers.iter().map(|d| &d.region))
        {
            if !region.is_empty() {
                regions.insert(region.clone());
            }
        }
        regions.into_iter().collect()
    }

    pub fn data_info(&self) -> DataInfo {
        let mut regions = BTreeSet::new();
        let mut technologies = BTreeSet::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for site in &self.renewable_energy {
            regions.insert(site.region.clone());
            technologies.insert(site.category.clone());
            min = min.min(site.capacity_mw);
            max = max.max(site.capacity_mw);
        }
        if self.renewable_energy.is_empty() {
            min = 0.0;
            max = 0.0;
        }
        DataInfo {
            total_renewable_sites: self.renewable_energy.len(),
            regions: regions.into_iter().collect(),
            technologies: technologies.into_iter().collect(),
            capacity_range: CapacityRange { min, max },
        }
    }
}

/// Load the dataset document from a JSON file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<HydrogenDataset> {
    let _timing = logging::start_timing(
        "load_dataset",
        OperationCategory::FileIO {
            subcategory: FileIOType::DataLoad,
        },
    );
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open dataset file {}", path.display()))?;
    let reader = BufReader::new(file);
    let dataset: HydrogenDataset = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse dataset file {}", path.display()))?;
    Ok(dataset)
}

struct VersionedSnapshot {
    snapshot: Arc<HydrogenDataset>,
    version: u64,
}

/// Shared handle over the immutable dataset snapshot. Readers clone the
/// inner `Arc` and never hold the lock while computing; reload happens only
/// through an explicit versioned swap.
#[derive(Clone)]
pub struct DatasetHandle {
    inner: Arc<RwLock<VersionedSnapshot>>,
}

impl DatasetHandle {
    pub fn new(dataset: HydrogenDataset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(VersionedSnapshot {
                snapshot: Arc::new(dataset),
                version: 1,
            })),
        }
    }

    /// The current snapshot. Cheap; clones an `Arc`.
    pub fn snapshot(&self) -> Arc<HydrogenDataset> {
        self.inner.read().snapshot.clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    /// Replace the snapshot wholesale, returning the new version number.
    /// Snapshots already handed out keep observing the data they started
    /// with.
    pub fn swap(&self, dataset: HydrogenDataset) -> u64 {
        let mut guard = self.inner.write();
        guard.snapshot = Arc::new(dataset);
        guard.version += 1;
        guard.version
    }
}
