use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::config::preferences::SitingPreferences;
use crate::core::optimizer::{OptimizationOutcome, SearchReport};
use crate::utils::logging::{self, FileIOType, OperationCategory};

/// Writes optimization run summaries into a timestamped output directory.
pub struct CsvExporter {
    output_dir: PathBuf,
    timestamp: String,
}

impl CsvExporter {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let full_path = output_dir.as_ref().join(&timestamp);
        fs::create_dir_all(&full_path)?;
        Ok(Self {
            output_dir: full_path,
            timestamp,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export one run as a two-column summary CSV, returning the file path.
    pub fn export_run(
        &self,
        prefs: &SitingPreferences,
        outcome: &OptimizationOutcome,
        report: &SearchReport,
    ) -> Result<PathBuf> {
        let _timing = logging::start_timing(
            "export_run",
            OperationCategory::FileIO {
                subcategory: FileIOType::ResultsSave,
            },
        );

        let path = self.output_dir.join("optimization_summary.csv");
        let mut writer = csv::Writer::from_path(&path)?;

        writer.write_record(["field", "value"])?;
        writer.write_record(["timestamp", self.timestamp.as_str()])?;
        writer.write_record(["technology", prefs.technology.as_str()])?;
        writer.write_record(["region", prefs.region.as_str()])?;
        writer.write_record(["min_capacity", prefs.min_capacity.to_string().as_str()])?;
        writer.write_record([
            "max_distance_to_renewable",
            prefs.max_distance_to_renewable.to_string().as_str(),
        ])?;
        writer.write_record([
            "min_demand_proximity",
            prefs.min_demand_proximity.to_string().as_str(),
        ])?;
        writer.write_record(["filter_tier", report.filter_tier.as_str()])?;
        writer.write_record(["sources_matched", report.sources_matched.to_string().as_str()])?;
        writer.write_record(["sources_sampled", report.sources_sampled.to_string().as_str()])?;
        writer.write_record([
            "candidates_considered",
            report.candidates_considered.to_string().as_str(),
        ])?;
        writer.write_record(["message", outcome.message()])?;

        if let Some(rec) = outcome.recommendation() {
            writer.write_record(["latitude", rec.latitude.to_string().as_str()])?;
            writer.write_record(["longitude", rec.longitude.to_string().as_str()])?;
            writer.write_record(["score", rec.score.to_string().as_str()])?;
            writer.write_record([
                "distance_to_renewable_km",
                rec.distance_to_renewable_km.to_string().as_str(),
            ])?;
            writer.write_record(["renewable_source", rec.renewable_source.as_str()])?;
            writer.write_record(["renewable_type", rec.renewable_type.as_str()])?;
            writer.write_record([
                "renewable_capacity_mw",
                rec.renewable_capacity_mw.to_string().as_str(),
            ])?;
            writer.write_record([
                "avg_demand_proximity_score",
                rec.avg_demand_proximity_score.to_string().as_str(),
            ])?;
            writer.write_record(["country", rec.country.as_str()])?;
            writer.write_record(["region", rec.region.as_str()])?;
        }

        writer.flush()?;
        Ok(path)
    }
}
